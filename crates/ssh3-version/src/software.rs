//! Software build identification.
//!
//! A software version names the implementation that produced an
//! announcement together with its `major.minor.patch` build number.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::VersionError;

/// Implementation name and build number of a peer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoftwareVersion {
    /// Free-form implementation identifier (e.g. `francoismichel/ssh3`).
    pub implementation_name: String,
    /// Major build number.
    pub major: u32,
    /// Minor build number.
    pub minor: u32,
    /// Patch build number.
    pub patch: u32,
}

impl SoftwareVersion {
    /// Create a new software version.
    #[must_use]
    pub fn new(implementation_name: impl Into<String>, major: u32, minor: u32, patch: u32) -> Self {
        Self {
            implementation_name: implementation_name.into(),
            major,
            minor,
            patch,
        }
    }

    /// Parse a `major.minor.patch` build number for `implementation_name`.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::InvalidSoftwareVersion`] unless `version` has
    /// exactly three dot-separated unsigned decimal fields.
    pub fn parse(implementation_name: &str, version: &str) -> Result<Self, VersionError> {
        let fields: Vec<&str> = version.split('.').collect();
        let [major, minor, patch] = fields.as_slice() else {
            debug!(raw = %version, "bad software version major.minor.patch field");
            return Err(VersionError::InvalidSoftwareVersion(version.to_string()));
        };

        Ok(Self {
            implementation_name: implementation_name.to_string(),
            major: parse_field(version, "major", major)?,
            minor: parse_field(version, "minor", minor)?,
            patch: parse_field(version, "patch", patch)?,
        })
    }
}

fn parse_field(raw: &str, name: &str, field: &str) -> Result<u32, VersionError> {
    field.parse().map_err(|e| {
        debug!(raw = %raw, field = name, error = %e, "bad software version value");
        VersionError::InvalidSoftwareVersion(raw.to_string())
    })
}

impl std::fmt::Display for SoftwareVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_software_version() {
        let v = SoftwareVersion::parse("francoismichel/ssh3", "0.1.5").unwrap();
        assert_eq!(v, SoftwareVersion::new("francoismichel/ssh3", 0, 1, 5));
    }

    #[test]
    fn test_display_roundtrip() {
        for (major, minor, patch) in [(0, 0, 0), (0, 1, 4), (12, 345, 6789), (u32::MAX, 0, 1)] {
            let v = SoftwareVersion::new("impl", major, minor, patch);
            assert_eq!(SoftwareVersion::parse("impl", &v.to_string()).unwrap(), v);
        }
    }

    #[test]
    fn test_wrong_field_count() {
        for raw in ["1.2", "1.2.3.4", "", "1"] {
            match SoftwareVersion::parse("impl", raw) {
                Err(VersionError::InvalidSoftwareVersion(s)) => assert_eq!(s, raw),
                other => panic!("Expected InvalidSoftwareVersion for {raw:?}, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_non_numeric_fields() {
        for raw in ["a.b.c", "1.x.3", "1.2.", "-1.2.3", "1.2.3-rc5", "99999999999.0.0"] {
            assert!(matches!(
                SoftwareVersion::parse("impl", raw),
                Err(VersionError::InvalidSoftwareVersion(_))
            ));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(SoftwareVersion::new("x", 0, 1, 5).to_string(), "0.1.5");
    }
}
