//! Per-line classification.
//!
//! Each line is tested against the markers below in a fixed order and the first match
//! wins, so a line never contributes to more than one field. Lines that carry a marker
//! but not the data behind it come back as [`Line::Malformed`] instead of panicking.

use std::sync::LazyLock;

use nmapsum_common::report::PortEntry;
use regex::Regex;

pub const HOST_MARKER: &str = "Nmap scan report for";
pub const UP_MARKER: &str = "Host is up";
pub const OS_DETAILS_MARKER: &str = "OS details:";
pub const OS_GUESS_MARKER: &str = "|   OS: ";

static OPEN_TCP_PORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+/tcp\s+open").expect("open port pattern is a valid regex")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Host(String),
    Up,
    OsDetails(String),
    OsGuess(String),
    Port(PortEntry),
    /// The marker matched but the fields behind it are missing.
    Malformed(&'static str),
}

/// Classifies a single line. `None` means the line is irrelevant.
///
/// `os_known` gates the OS-guess marker: once an OS is recorded, guess lines are
/// treated as if they did not match and fall through to the remaining checks.
pub fn classify(line: &str, os_known: bool) -> Option<Line> {
    if line.contains(HOST_MARKER) {
        return Some(host(line));
    }

    if line.contains(UP_MARKER) {
        return Some(Line::Up);
    }

    if line.contains(OS_DETAILS_MARKER) {
        return Some(match trailing_text(line, OS_DETAILS_MARKER) {
            Some(os) => Line::OsDetails(os),
            None => Line::Malformed(OS_DETAILS_MARKER),
        });
    }

    if line.contains(OS_GUESS_MARKER) && !os_known {
        return Some(match trailing_text(line, OS_GUESS_MARKER) {
            Some(os) => Line::OsGuess(os),
            None => Line::Malformed(OS_GUESS_MARKER),
        });
    }

    if OPEN_TCP_PORT.is_match(line) {
        return Some(port(line));
    }

    None
}

fn host(line: &str) -> Line {
    let after_marker = line
        .split_once(HOST_MARKER)
        .map(|(_, rest)| rest)
        .unwrap_or_default();

    match after_marker.split_whitespace().last() {
        Some(token) => Line::Host(token.to_string()),
        None => Line::Malformed(HOST_MARKER),
    }
}

/// Text between the first occurrence of `marker` and the next one (or end of line).
fn trailing_text(line: &str, marker: &str) -> Option<String> {
    let text = line.split(marker).nth(1)?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn port(line: &str) -> Line {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let [port, _state, service, version @ ..] = tokens.as_slice() else {
        return Line::Malformed("open tcp port");
    };

    let version = (!version.is_empty()).then(|| version.join(" "));

    Line::Port(PortEntry {
        port: port.to_string(),
        service: service.to_string(),
        version,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
