//! Locating the multiplexer binary and asking it for its version.
use std::path::PathBuf;
use std::process::Command;

use log::debug;
use muxconf_core::kernel::error::{Error, Result};
use muxconf_core::version::{DetectedBinary, parse_version_output};

/// A multiplexer found on this host
#[derive(Debug, Clone)]
pub struct Multiplexer {
    pub path: PathBuf,
    pub detected: DetectedBinary,
}

/// Resolves `bin` through `PATH` and runs `<bin> -V`.
pub fn probe(bin: &str) -> Result<Multiplexer> {
    let path = which::which(bin).map_err(|e| Error::Other(format!("{} not found: {}", bin, e)))?;
    debug!("Probing {}", path.display());

    let output = Command::new(&path)
        .arg("-V")
        .output()
        .map_err(|e| Error::io(e, "run -V", path.clone()))?;
    let report = String::from_utf8_lossy(&output.stdout);
    let detected = parse_version_output(report.trim())?;
    debug!("{} reports {} {}", path.display(), detected.kind, detected.version);
    Ok(Multiplexer { path, detected })
}

/// Full path of `cmd`, or `cmd` itself when it is not in `PATH`
pub fn full_path_cmd(cmd: &str) -> String {
    which::which(cmd)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| cmd.to_string())
}
