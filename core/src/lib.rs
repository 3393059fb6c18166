//! Reading side of `nmapsum`.
//!
//! * **[`encoding`]** guesses the charset of a transcript from its raw bytes.
//! * **[`parser`]** decodes the transcript and folds its lines into a
//!   [`ScanResult`](nmapsum_common::report::ScanResult).

pub mod encoding;
pub mod parser;
