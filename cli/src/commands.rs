pub mod summarize;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use nmapsum_common::config::{Config, DecodePolicy};

#[derive(Parser, Debug)]
#[command(name = "nmapsum")]
#[command(about = "Summarizes a saved Nmap text report.", version)]
pub struct CommandLine {
    /// File holding the Nmap output
    #[arg(short = 'a', long = "archivo", value_name = "PATH")]
    pub archivo: PathBuf,

    /// Fail on undecodable bytes instead of dropping them
    #[arg(long)]
    pub strict: bool,

    /// Charset label to read the file with, skipping detection
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Less decoration; repeat to only print the summary
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            quiet: self.quiet,
            decode: if self.strict {
                DecodePolicy::Strict
            } else {
                DecodePolicy::Lossy
            },
            encoding: self.encoding.clone(),
        }
    }
}
