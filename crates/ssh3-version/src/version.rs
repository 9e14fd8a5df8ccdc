//! The identity a peer announces during version exchange.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::codec::{self, VersionError};
use crate::protocol::ProtocolVersion;
use crate::software::SoftwareVersion;

/// Protocol name, dialect version and software build of one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    /// Protocol name token (e.g. `SSH`). Kept as announced, since the name
    /// itself may change.
    pub protocol_name: String,
    /// Protocol dialect version.
    pub protocol_version: ProtocolVersion,
    /// Software build.
    pub software_version: SoftwareVersion,
}

impl Version {
    /// Create a new version.
    #[must_use]
    pub fn new(
        protocol_name: impl Into<String>,
        protocol_version: ProtocolVersion,
        software_version: SoftwareVersion,
    ) -> Self {
        Self {
            protocol_name: protocol_name.into(),
            protocol_version,
            software_version,
        }
    }

    /// Protocol name token.
    #[must_use]
    pub fn protocol_name(&self) -> &str {
        &self.protocol_name
    }

    /// Protocol dialect version.
    #[must_use]
    pub fn protocol_version(&self) -> &ProtocolVersion {
        &self.protocol_version
    }

    /// Software build.
    #[must_use]
    pub fn software_version(&self) -> &SoftwareVersion {
        &self.software_version
    }
}

/// Renders the announcement form, see [`codec::format_version_string`].
impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&codec::format_version_string(self))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_version_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Version {
        Version::new(
            "SSH",
            ProtocolVersion::new(3, 0, "alpha-00"),
            SoftwareVersion::new("francoismichel/ssh3", 0, 1, 5),
        )
    }

    #[test]
    fn test_accessors() {
        let v = sample();
        assert_eq!(v.protocol_name(), "SSH");
        assert_eq!(v.protocol_version().major, 3);
        assert_eq!(v.software_version().implementation_name, "francoismichel/ssh3");
    }

    #[test]
    fn test_display_and_from_str() {
        let v = sample();
        let s = v.to_string();
        assert_eq!(
            s,
            "SSH 3.0 francoismichel/ssh3 0.1.5 experimental_spec_version=alpha-00"
        );
        assert_eq!(s.parse::<Version>().unwrap(), v);
    }

    #[test]
    fn test_serde_json() {
        let v = sample();
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["protocol_version"]["experimental_spec_version"], "alpha-00");
        assert_eq!(json["software_version"]["patch"], 5);
        let back: Version = serde_json::from_value(json).unwrap();
        assert_eq!(back, v);
    }
}
