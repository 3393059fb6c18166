//! Charset guessing for transcripts saved by arbitrary terminals and editors.
//!
//! A byte-order mark is authoritative. Without one the whole buffer is handed to
//! [`chardetng`], which never fails: empty or undecidable input yields its default
//! guess. Confidence is not exposed.

use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use nmapsum_common::{Error, Result};
use tracing::debug;

/// Reads `path` as raw bytes and guesses its encoding.
pub fn detect_encoding(path: &Path) -> Result<&'static Encoding> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let encoding = detect_bytes(&bytes);
    debug!(
        "Detected {} for {} ({} bytes)",
        encoding.name(),
        path.display(),
        bytes.len()
    );
    Ok(encoding)
}

pub fn detect_bytes(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Looks up a WHATWG charset label such as `"utf-8"` or `"latin1"`.
pub fn resolve_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
}
