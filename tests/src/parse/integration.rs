use std::path::Path;

use nmapsum_common::Error;
use nmapsum_common::config::Config;
use nmapsum_common::report::{HostState, ScanResult};
use nmapsum_core::parser;
use nmapsum_integration_tests::{
    NO_PORTS, OS_GUESS_THEN_DETAILS, SINGLE_SSH, UNVERSIONED_HTTP, transcript,
};

fn parse(text: &str) -> anyhow::Result<ScanResult> {
    let file = transcript(text.as_bytes())?;
    Ok(parser::parse_file(file.path(), &Config::default())?)
}

#[test]
fn single_host_with_ssh() -> anyhow::Result<()> {
    let result = parse(SINGLE_SSH)?;

    assert_eq!(result.host.as_deref(), Some("10.0.0.5"));
    assert_eq!(result.state, Some(HostState::Up));
    assert!(result.os.is_none());
    assert_eq!(result.ports.len(), 1);
    assert_eq!(result.ports[0].to_string(), "22/tcp -> ssh (OpenSSH 8.2)");
    Ok(())
}

#[test]
fn report_without_ports() -> anyhow::Result<()> {
    let result = parse(NO_PORTS)?;

    assert_eq!(result.host.as_deref(), Some("192.168.1.20"));
    assert!(!result.has_open_ports());
    Ok(())
}

#[test]
fn os_details_beat_earlier_guess() -> anyhow::Result<()> {
    let result = parse(OS_GUESS_THEN_DETAILS)?;

    assert_eq!(result.os.as_deref(), Some("Microsoft Windows Server 2016"));
    assert_eq!(result.host.as_deref(), Some("fileserver.lan"));
    Ok(())
}

#[test]
fn missing_version_uses_placeholder() -> anyhow::Result<()> {
    let result = parse(UNVERSIONED_HTTP)?;

    assert_eq!(result.state, None);
    assert_eq!(result.ports[0].version, None);
    assert_eq!(result.ports[0].to_string(), "80/tcp -> http (Desconocido)");
    Ok(())
}

#[test]
fn same_file_parses_identically_twice() -> anyhow::Result<()> {
    let file = transcript(OS_GUESS_THEN_DETAILS.as_bytes())?;
    let cfg = Config::default();

    let first = parser::parse_file(file.path(), &cfg)?;
    let second = parser::parse_file(file.path(), &cfg)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn empty_file_yields_empty_result() -> anyhow::Result<()> {
    assert_eq!(parse("")?, ScanResult::new());
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let err = parser::parse_file(Path::new("/no/such/nmap.txt"), &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn invalid_bytes_dropped_by_default_rejected_when_strict() -> anyhow::Result<()> {
    let file = transcript(b"Nmap scan report for 10.0.0.8\n22/tcp open ssh Open\xFFSSH\n")?;
    let utf8 = Config::default().with_encoding("utf-8");

    let lossy = parser::parse_file(file.path(), &utf8)?;
    assert_eq!(lossy.ports[0].to_string(), "22/tcp -> ssh (OpenSSH)");

    let strict = parser::parse_file(file.path(), &utf8.strict());
    assert!(matches!(strict, Err(Error::Decode { .. })));
    Ok(())
}

#[test]
fn utf16_transcript_with_bom() -> anyhow::Result<()> {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(SINGLE_SSH.encode_utf16().flat_map(u16::to_le_bytes));
    let file = transcript(&bytes)?;

    let result = parser::parse_file(file.path(), &Config::default())?;
    assert_eq!(result.host.as_deref(), Some("10.0.0.5"));
    assert_eq!(result.ports.len(), 1);
    Ok(())
}

#[test]
fn malformed_lines_do_not_abort() -> anyhow::Result<()> {
    let result =
        parse("Nmap scan report for\n22/tcp open\n|   OS:    \n8080/tcp open http-proxy\n")?;

    assert!(result.host.is_none());
    assert!(result.os.is_none());
    assert_eq!(result.ports.len(), 1);
    assert_eq!(result.skipped_lines, 3);
    Ok(())
}

#[test]
fn legacy_encoding_is_detected_without_bom_or_override() -> anyhow::Result<()> {
    let mut bytes = b"Nmap scan report for 10.0.0.11\nHost is up.\n".to_vec();
    bytes.extend_from_slice(b"OS details: Versi\xF3n estable del n\xFAcleo\n");
    bytes.extend_from_slice(b"22/tcp open ssh Servidor de configuraci\xF3n\n");
    let file = transcript(&bytes)?;

    let result = parser::parse_file(file.path(), &Config::default())?;
    assert_eq!(result.os.as_deref(), Some("Versión estable del núcleo"));
    assert_eq!(
        result.ports[0].to_string(),
        "22/tcp -> ssh (Servidor de configuración)"
    );
    assert_eq!(result.skipped_lines, 0);
    Ok(())
}
