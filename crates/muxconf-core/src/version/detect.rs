//! Reduction of a binary's self-reported version (`tmux -V`) to a
//! [`VersionValue`].
use std::fmt;

use crate::version::error::VersionError;
use crate::version::value::VersionValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryKind {
    Tmux,
    Tmate,
}

impl fmt::Display for BinaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryKind::Tmux => write!(f, "tmux"),
            BinaryKind::Tmate => write!(f, "tmate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedBinary {
    pub kind: BinaryKind,
    pub version: VersionValue,
}

/// Parses output such as `tmux 3.3a`, `tmux next-3.4` or `tmate 2.4.0`.
///
/// Only `major.minor` and an optional trailing letter are kept; a third
/// dotted segment or a `-rc` style tail is dropped.
pub fn parse_version_output(output: &str) -> Result<DetectedBinary, VersionError> {
    let words: Vec<&str> = output.split_whitespace().collect();
    if words.len() != 2 {
        return Err(VersionError::NotMultiplexer(output.trim().to_string()));
    }

    let kind = match words[0] {
        "tmux" => BinaryKind::Tmux,
        "tmate" => BinaryKind::Tmate,
        _ => return Err(VersionError::NotMultiplexer(output.trim().to_string())),
    };

    let raw = words[1];
    let unsupported = || VersionError::UnsupportedBinaryVersion(raw.to_string());
    let vers = raw.strip_prefix("next-").unwrap_or(raw);

    let major_len = vers.bytes().take_while(u8::is_ascii_digit).count();
    if major_len == 0 || vers.as_bytes().get(major_len) != Some(&b'.') {
        return Err(unsupported());
    }
    let after_dot = &vers[major_len + 1..];
    let minor_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
    if minor_len == 0 {
        return Err(unsupported());
    }

    let mut end = major_len + 1 + minor_len;
    if let Some(c) = vers[end..].chars().next() {
        if c.is_ascii_lowercase() {
            end += 1;
        }
    }

    let tail = &vers[end..];
    if !(tail.is_empty() || tail.starts_with('.') || tail.starts_with('-')) {
        return Err(unsupported());
    }

    let version = VersionValue::parse(&vers[..end]).map_err(|_| unsupported())?;
    Ok(DetectedBinary { kind, version })
}
