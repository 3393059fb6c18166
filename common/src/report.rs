//! # Scan Summary Model
//!
//! The record accumulated while reading a transcript top to bottom.
//!
//! A [`ScanResult`] starts empty, is filled field by field by the parser and is then
//! handed, read-only, to whatever renders it. Nothing here outlives a single run.

use std::fmt;

/// Rendered in place of a version string when a port line carries none.
pub const UNKNOWN_VERSION: &str = "Desconocido";

/// Reachability of the scanned host.
///
/// Transcripts only ever yield [`HostState::Up`]; a missing "Host is up" line leaves
/// the state undetermined rather than implying [`HostState::Down`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostState {
    Up,
    Down,
}

impl fmt::Display for HostState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostState::Up => f.write_str("up"),
            HostState::Down => f.write_str("down"),
        }
    }
}

/// One open TCP port as listed in the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortEntry {
    /// Port and protocol exactly as written, e.g. `22/tcp`.
    pub port: String,
    pub service: String,
    pub version: Option<String>,
}

impl PortEntry {
    pub fn version_or_unknown(&self) -> &str {
        self.version.as_deref().unwrap_or(UNKNOWN_VERSION)
    }
}

impl fmt::Display for PortEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.port,
            self.service,
            self.version_or_unknown()
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub host: Option<String>,
    pub state: Option<HostState>,
    pub os: Option<String>,
    /// In transcript order. Duplicates are kept.
    pub ports: Vec<PortEntry>,
    /// Marker lines that were recognised but lacked the data to extract a field.
    pub skipped_lines: usize,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_open_ports(&self) -> bool {
        !self.ports.is_empty()
    }
}
