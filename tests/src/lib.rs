//! Shared fixtures for the integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Scenario A: a reachable host with a single versioned service.
pub const SINGLE_SSH: &str = "\
Starting Nmap 7.94 ( https://nmap.org ) at 2024-03-01 10:00 UTC
Nmap scan report for 10.0.0.5
Host is up (0.00031s latency).
PORT   STATE SERVICE VERSION
22/tcp open  ssh     OpenSSH 8.2
Nmap done: 1 IP address (1 host up) scanned in 1.02 seconds
";

/// Scenario B: nothing open.
pub const NO_PORTS: &str = "\
Nmap scan report for 192.168.1.20
Host is up (0.0012s latency).
All 1000 scanned ports on 192.168.1.20 are in ignored states.
";

/// Scenario C: an OS guess followed by an explicit OS details line.
pub const OS_GUESS_THEN_DETAILS: &str = "\
Nmap scan report for fileserver.lan
Host is up.
445/tcp open  microsoft-ds
Host script results:
| smb-os-discovery:
|   OS: Windows Server 2016 Standard 14393
OS details: Microsoft Windows Server 2016
";

/// Scenario D: an open port without version information.
pub const UNVERSIONED_HTTP: &str = "\
Nmap scan report for 10.0.0.7
80/tcp open http
";

pub fn transcript(bytes: &[u8]) -> anyhow::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}
