//! Human-readable rendering of a [`ScanResult`].
//!
//! Unset fields are shown as `None`. The layout is fixed and meant for reading, not
//! for piping into other tools.

use colored::*;
use nmapsum_common::report::{PortEntry, ScanResult};

use crate::terminal::{colors, print};

const UNSET: &str = "None";

pub fn display(result: &ScanResult) {
    for line in render(result) {
        print::print(&line);
    }
}

pub fn render(result: &ScanResult) -> Vec<String> {
    let state = result.state.map(|state| state.to_string());

    let mut lines = vec![
        String::new(),
        format!("🔍 {}", "Resumen del escaneo".bold()),
        format!("✅ Host: {}", field(result.host.as_deref())),
        format!("🖥  Estado: {}", field(state.as_deref())),
        format!("🛠  Sistema operativo estimado: {}", field(result.os.as_deref())),
        String::new(),
    ];

    if result.has_open_ports() {
        lines.push(format!("📡 {}", "Puertos y servicios detectados:".bold()));
        lines.extend(result.ports.iter().map(port_line));
    } else {
        lines.push(format!(
            "🚫 {}",
            "No se encontraron puertos abiertos.".color(colors::EMPTY)
        ));
    }

    if result.skipped_lines > 0 {
        lines.push(String::new());
        lines.push(format!(
            "⚠  Líneas ignoradas por datos incompletos: {}",
            result.skipped_lines.to_string().color(colors::MISSING)
        ));
    }

    lines
}

fn field(value: Option<&str>) -> ColoredString {
    match value {
        Some(value) => value.color(colors::PRIMARY),
        None => UNSET.color(colors::MISSING),
    }
}

fn port_line(entry: &PortEntry) -> String {
    format!(
        "  - {} {} {} ({})",
        entry.port.as_str().color(colors::ACCENT),
        "->".color(colors::SEPARATOR),
        entry.service.as_str().color(colors::PRIMARY),
        entry.version_or_unknown().color(colors::TEXT_DEFAULT)
    )
}
