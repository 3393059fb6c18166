use std::path::Path;

use anyhow::Context;
use nmapsum_common::config::Config;
use nmapsum_core::parser;
use tracing::info_span;

use crate::terminal::{print, summary};

pub fn summarize(path: &Path, cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("summarize", file = %path.display());
    let guard = span.enter();

    let result = parser::parse_file(path, cfg)
        .with_context(|| format!("failed to summarize '{}'", path.display()))?;

    drop(guard);

    print::header("resumen de nmap", cfg.quiet);
    summary::display(&result);

    if cfg.quiet == 0 {
        print::end_of_program();
    }

    Ok(())
}
