use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;

/// Report lines always pass, whatever `RUST_LOG` says.
const PRINT_DIRECTIVE: &str = "nmapsum::print=info";

/// Installs the global subscriber.
///
/// Warnings and errors go to stderr, everything else (report included) to stdout.
pub fn init(quiet: u8) -> anyhow::Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(filter_spec(quiet, env))
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive(PRINT_DIRECTIVE.parse()?);

    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .event_format(NmapsumFormatter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}

/// `-qq` and above keep only warnings and errors, whatever `RUST_LOG` says.
fn filter_spec(quiet: u8, env: Option<String>) -> String {
    match (quiet, env) {
        (level, _) if level >= 2 => "warn".to_string(),
        (_, Some(spec)) if !spec.trim().is_empty() => spec,
        _ => "info".to_string(),
    }
}

pub struct NmapsumFormatter;

impl<S, N> FormatEvent<S, N> for NmapsumFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" && self.0.is_none() {
            self.0 = Some(format!("{value:?}"));
        }
    }
}
