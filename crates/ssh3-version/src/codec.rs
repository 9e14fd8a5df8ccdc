//! Codec for the version string exchanged at handshake time.
//!
//! The version string is a whitespace-separated line:
//!
//! ```text
//! <protocol> <proto-major>.<proto-minor> <implementation> <major>.<minor>.<patch> [<key>=<value> ...]
//! ```
//!
//! The experimental spec tag can reach the parser two ways: as a `_tag`
//! suffix of the protocol field, or as a trailing
//! `experimental_spec_version=<tag>` field. The trailing field wins.
//! Announcements are always written with the trailing field so that the
//! protocol field stays a plain `major.minor`, which older peers require.

use thiserror::Error;
use tracing::debug;

use crate::protocol::ProtocolVersion;
use crate::software::SoftwareVersion;
use crate::version::Version;

/// Maximum accepted length of a version string, in bytes.
pub const MAX_VERSION_STRING_LEN: usize = 4096;

/// Minimum number of whitespace-separated fields in a version string.
pub const MIN_VERSION_FIELDS: usize = 4;

/// Trailing field key carrying the experimental spec tag.
pub const SPEC_VERSION_KEY: &str = "experimental_spec_version";

/// Errors raised while parsing or negotiating a version.
///
/// Each variant carries the raw text that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Software version field is not `int.int.int`.
    #[error("Invalid software version string: {0}")]
    InvalidSoftwareVersion(String),

    /// Protocol version field is not `int.int[_tag]`.
    #[error("Invalid protocol version string: {0}")]
    InvalidProtocolVersion(String),

    /// Version string is malformed as a whole.
    #[error("Invalid ssh version string: {0}")]
    InvalidSshVersion(String),

    /// Version string was understood but is not compatible with ours.
    #[error("Unsupported ssh version: {0}")]
    UnsupportedSshVersion(String),
}

impl VersionError {
    /// The raw text that caused this error.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::InvalidSoftwareVersion(s)
            | Self::InvalidProtocolVersion(s)
            | Self::InvalidSshVersion(s)
            | Self::UnsupportedSshVersion(s) => s,
        }
    }
}

/// Render `version` as an announcement line.
///
/// The spec tag always goes into the trailing `experimental_spec_version`
/// field, never into the protocol field.
#[must_use]
pub fn format_version_string(version: &Version) -> String {
    let protocol = &version.protocol_version;
    let software = &version.software_version;
    format!(
        "{} {}.{} {} {} {}={}",
        version.protocol_name,
        protocol.major,
        protocol.minor,
        software.implementation_name,
        software,
        SPEC_VERSION_KEY,
        protocol.experimental_spec_version
    )
}

/// Parse a version string received from a peer.
///
/// Trailing `key=value` fields other than `experimental_spec_version` are
/// skipped.
///
/// # Errors
///
/// Returns [`VersionError::InvalidSshVersion`] if the string is too long or
/// has fewer than four fields, and the sub-parser's error if the protocol
/// or software version field is malformed.
pub fn parse_version_string(version: &str) -> Result<Version, VersionError> {
    if version.len() > MAX_VERSION_STRING_LEN {
        debug!(len = version.len(), "SSH version string too long");
        return Err(VersionError::InvalidSshVersion(version.to_string()));
    }

    let fields: Vec<&str> = version.split_whitespace().collect();
    if fields.len() < MIN_VERSION_FIELDS {
        debug!(raw = %version, fields = fields.len(), "bad SSH version fields");
        return Err(VersionError::InvalidSshVersion(version.to_string()));
    }

    let protocol_name = fields[0];
    let mut protocol_version = ProtocolVersion::parse(fields[1]).map_err(|e| {
        debug!(error = %e, "could not parse protocol version");
        e
    })?;
    let software_version = SoftwareVersion::parse(fields[2], fields[3]).map_err(|e| {
        debug!(error = %e, "could not parse software version");
        e
    })?;

    for field in &fields[MIN_VERSION_FIELDS..] {
        match parse_key_value(field) {
            Some((SPEC_VERSION_KEY, tag)) => {
                protocol_version.experimental_spec_version = tag.to_string();
            }
            _ => debug!(field = %field, "skipping custom version field"),
        }
    }

    Ok(Version::new(protocol_name, protocol_version, software_version))
}

/// Split a trailing field into exactly one `key=value` pair.
fn parse_key_value(field: &str) -> Option<(&str, &str)> {
    let (key, value) = field.split_once('=')?;
    if value.contains('=') {
        return None;
    }
    Some((key, value))
}
