mod commands;
mod terminal;

use commands::{CommandLine, summarize};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.to_config();

    logging::init(cfg.quiet)?;
    print::initialize();

    summarize::summarize(&commands.archivo, &cfg)
}
