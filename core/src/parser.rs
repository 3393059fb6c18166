//! Turns a saved port-scan transcript into a [`ScanResult`].
//!
//! The file is read twice: once as raw bytes to guess its charset (unless the
//! [`Config`] names one) and once to decode it. Decoding follows
//! [`Config::decode`]; classification is a single forward pass with no lookahead.

use std::fs;
use std::path::Path;

use encoding_rs::{DecoderResult, Encoding};
use nmapsum_common::config::{Config, DecodePolicy};
use nmapsum_common::report::{HostState, ScanResult};
use nmapsum_common::{Error, Result};
use tracing::{debug, warn};

use crate::encoding;

pub mod classify;

use classify::Line;

pub fn parse_file(path: &Path, cfg: &Config) -> Result<ScanResult> {
    let encoding = match cfg.encoding.as_deref() {
        Some(label) => encoding::resolve_label(label)?,
        None => encoding::detect_encoding(path)?,
    };

    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = decode(&bytes, encoding, cfg.decode)?;
    let result = parse_text(&text);

    debug!(
        "Parsed {} as {}: {} ports, {} skipped lines",
        path.display(),
        encoding.name(),
        result.ports.len(),
        result.skipped_lines
    );

    Ok(result)
}

/// Decodes `bytes`, removing a leading BOM that belongs to `encoding`.
///
/// Under [`DecodePolicy::Lossy`] malformed sequences are dropped, not replaced.
pub fn decode(bytes: &[u8], encoding: &'static Encoding, policy: DecodePolicy) -> Result<String> {
    let mut decoder = encoding.new_decoder_with_bom_removal();
    let mut out = String::new();
    let mut input = bytes;
    let mut consumed = 0usize;
    let mut dropped = 0usize;

    loop {
        let needed = decoder
            .max_utf8_buffer_length_without_replacement(input.len())
            .unwrap_or(input.len().saturating_mul(3));
        out.reserve(needed);

        let (result, read) = decoder.decode_to_string_without_replacement(input, &mut out, true);
        input = &input[read..];
        consumed += read;

        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::OutputFull => continue,
            DecoderResult::Malformed(bad, after) => {
                if policy == DecodePolicy::Strict {
                    return Err(Error::Decode {
                        encoding: encoding.name(),
                        offset: consumed - bad as usize - after as usize,
                    });
                }
                dropped += bad as usize;
            }
        }
    }

    if dropped > 0 {
        warn!("Dropped {dropped} undecodable bytes while reading as {}", encoding.name());
    }

    Ok(out)
}

/// Classifies every line of `text` into a fresh [`ScanResult`].
///
/// Line breaks may be `\n`, `\r\n` or a bare `\r`.
pub fn parse_text(text: &str) -> ScanResult {
    let mut result = ScanResult::new();

    for line in text.split(['\n', '\r']) {
        if let Some(classified) = classify::classify(line, result.os.is_some()) {
            apply(&mut result, classified);
        }
    }

    result
}

fn apply(result: &mut ScanResult, line: Line) {
    match line {
        Line::Host(host) => result.host = Some(host),
        Line::Up => result.state = Some(HostState::Up),
        Line::OsDetails(os) => result.os = Some(os),
        Line::OsGuess(os) => {
            result.os.get_or_insert(os);
        }
        Line::Port(entry) => result.ports.push(entry),
        Line::Malformed(marker) => {
            debug!("Skipping line with '{marker}' marker but no usable data");
            result.skipped_lines += 1;
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
