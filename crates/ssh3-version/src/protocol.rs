//! Protocol dialect versioning.
//!
//! The protocol version field reads `major.minor[_tag]`, where the optional
//! tag names the revision of the experimental specification a peer follows.
//! A missing tag is meaningful on its own: it identifies builds that predate
//! spec tag signalling.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use crate::codec::VersionError;

/// Separator between `major.minor` and the experimental spec tag.
pub const SPEC_TAG_SEPARATOR: char = '_';

/// Protocol dialect version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProtocolVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Experimental spec tag (e.g. `alpha-00`), empty when not announced.
    pub experimental_spec_version: String,
}

impl ProtocolVersion {
    /// Create a new protocol version.
    #[must_use]
    pub fn new(major: u32, minor: u32, experimental_spec_version: impl Into<String>) -> Self {
        Self {
            major,
            minor,
            experimental_spec_version: experimental_spec_version.into(),
        }
    }

    /// Parse a `major.minor[_tag]` protocol version field.
    ///
    /// The tag is taken verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::InvalidProtocolVersion`] if the field has more
    /// than one `_`, or if its first part is not two dot-separated unsigned
    /// decimal integers.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let fields: Vec<&str> = version.split(SPEC_TAG_SEPARATOR).collect();
        let (numbers, tag) = match fields.as_slice() {
            [numbers] => (*numbers, ""),
            [numbers, tag] => (*numbers, *tag),
            _ => {
                debug!(raw = %version, "too many fields in protocol version");
                return Err(VersionError::InvalidProtocolVersion(version.to_string()));
            }
        };

        let Some((major, minor)) = split_major_minor(numbers) else {
            debug!(raw = %version, "protocol version should be in format x.y, got: {}", numbers);
            return Err(VersionError::InvalidProtocolVersion(version.to_string()));
        };

        Ok(Self {
            major: parse_field(version, "major", major)?,
            minor: parse_field(version, "minor", minor)?,
            experimental_spec_version: tag.to_string(),
        })
    }

    /// Whether a spec tag was announced.
    #[must_use]
    pub fn has_spec_tag(&self) -> bool {
        !self.experimental_spec_version.is_empty()
    }

    /// Whether `other` shares this dialect's exact `major.minor`.
    #[must_use]
    pub fn same_dialect(&self, other: &ProtocolVersion) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

fn split_major_minor(numbers: &str) -> Option<(&str, &str)> {
    let (major, minor) = numbers.split_once('.')?;
    if minor.contains('.') {
        return None;
    }
    Some((major, minor))
}

fn parse_field(raw: &str, name: &str, field: &str) -> Result<u32, VersionError> {
    field.parse().map_err(|e| {
        debug!(raw = %raw, field = name, error = %e, "bad protocol version value");
        VersionError::InvalidProtocolVersion(raw.to_string())
    })
}

/// Renders `major.minor_tag`. The separator is written even when the tag is
/// empty; announcements use [`crate::codec::format_version_string`] instead.
impl std::fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}{}{}",
            self.major, self.minor, SPEC_TAG_SEPARATOR, self.experimental_spec_version
        )
    }
}

impl FromStr for ProtocolVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
