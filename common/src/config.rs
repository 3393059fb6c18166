/// How undecodable byte sequences in a transcript are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Malformed sequences are dropped silently. Nothing is substituted for them.
    #[default]
    Lossy,
    /// The first malformed sequence aborts decoding with [`crate::Error::Decode`].
    Strict,
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Suppresses decorative output.
    ///
    /// `0` prints everything, `1` drops the header and closing rule, `2` and above also
    /// silences informational logging so only the report and warnings remain.
    pub quiet: u8,
    pub decode: DecodePolicy,
    /// Charset label (e.g. `"latin1"`, `"utf-8"`) that bypasses encoding detection.
    pub encoding: Option<String>,
}

impl Config {
    pub fn strict(mut self) -> Self {
        self.decode = DecodePolicy::Strict;
        self
    }

    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }
}
