//! Local endpoint identity.
//!
//! [`LocalIdentity`] holds the protocol and software numbers this endpoint
//! announces. The default reproduces the built-in release; other values can
//! be injected from configuration or by tests.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::protocol::ProtocolVersion;
use crate::software::SoftwareVersion;
use crate::version::Version;

/// Protocol name announced by this implementation.
pub const PROTOCOL_NAME: &str = "SSH";

/// Protocol major version.
pub const PROTOCOL_MAJOR: u32 = 3;

/// Protocol minor version.
pub const PROTOCOL_MINOR: u32 = 0;

/// Experimental spec revision this implementation follows.
///
/// Once IETF drafts are published this becomes a draft name such as
/// `draft-michel-ssh3-XX`.
pub const PROTOCOL_EXPERIMENTAL_SPEC_VERSION: &str = "alpha-00";

/// Implementation name announced by this software.
pub const SOFTWARE_IMPLEMENTATION_NAME: &str = "francoismichel/ssh3";

/// Software major version.
pub const SOFTWARE_MAJOR: u32 = 0;

/// Software minor version.
pub const SOFTWARE_MINOR: u32 = 1;

/// Software patch version.
pub const SOFTWARE_PATCH: u32 = 5;

/// Release candidate number, 0 for a final release.
pub const SOFTWARE_RC: u32 = 5;

/// Version numbers announced by the local endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalIdentity {
    /// Protocol name token.
    #[serde(default = "default_protocol_name")]
    pub protocol_name: String,

    /// Protocol major version.
    #[serde(default = "default_protocol_major")]
    pub protocol_major: u32,

    /// Protocol minor version.
    #[serde(default = "default_protocol_minor")]
    pub protocol_minor: u32,

    /// Experimental spec tag.
    #[serde(default = "default_experimental_spec_version")]
    pub experimental_spec_version: String,

    /// Implementation name.
    #[serde(default = "default_implementation_name")]
    pub implementation_name: String,

    /// Software major version.
    #[serde(default = "default_software_major")]
    pub software_major: u32,

    /// Software minor version.
    #[serde(default = "default_software_minor")]
    pub software_minor: u32,

    /// Software patch version.
    #[serde(default = "default_software_patch")]
    pub software_patch: u32,

    /// Release candidate number (display only).
    #[serde(default = "default_release_candidate")]
    pub release_candidate: u32,
}

// Default value functions
fn default_protocol_name() -> String {
    PROTOCOL_NAME.to_string()
}

fn default_protocol_major() -> u32 {
    PROTOCOL_MAJOR
}

fn default_protocol_minor() -> u32 {
    PROTOCOL_MINOR
}

fn default_experimental_spec_version() -> String {
    PROTOCOL_EXPERIMENTAL_SPEC_VERSION.to_string()
}

fn default_implementation_name() -> String {
    SOFTWARE_IMPLEMENTATION_NAME.to_string()
}

fn default_software_major() -> u32 {
    SOFTWARE_MAJOR
}

fn default_software_minor() -> u32 {
    SOFTWARE_MINOR
}

fn default_software_patch() -> u32 {
    SOFTWARE_PATCH
}

fn default_release_candidate() -> u32 {
    SOFTWARE_RC
}

impl Default for LocalIdentity {
    fn default() -> Self {
        Self {
            protocol_name: default_protocol_name(),
            protocol_major: default_protocol_major(),
            protocol_minor: default_protocol_minor(),
            experimental_spec_version: default_experimental_spec_version(),
            implementation_name: default_implementation_name(),
            software_major: default_software_major(),
            software_minor: default_software_minor(),
            software_patch: default_software_patch(),
            release_candidate: default_release_candidate(),
        }
    }
}

impl LocalIdentity {
    /// The local endpoint's version.
    #[must_use]
    pub fn version(&self) -> Version {
        Version::new(
            self.protocol_name.clone(),
            ProtocolVersion::new(
                self.protocol_major,
                self.protocol_minor,
                self.experimental_spec_version.clone(),
            ),
            SoftwareVersion::new(
                self.implementation_name.clone(),
                self.software_major,
                self.software_minor,
                self.software_patch,
            ),
        )
    }

    /// The version string to send to a peer during version exchange.
    #[must_use]
    pub fn version_string(&self) -> String {
        codec::format_version_string(&self.version())
    }

    /// The software version to display to users, e.g. `0.1.5-rc5`.
    ///
    /// Not meant for the wire; use [`LocalIdentity::version_string`] there.
    #[must_use]
    pub fn display_software_version(&self) -> String {
        let mut version = format!(
            "{}.{}.{}",
            self.software_major, self.software_minor, self.software_patch
        );
        if self.release_candidate > 0 {
            version.push_str(&format!("-rc{}", self.release_candidate));
        }
        version
    }
}

/// The built-in local version.
#[must_use]
pub fn this_version() -> Version {
    LocalIdentity::default().version()
}

/// The built-in announcement string.
#[must_use]
pub fn current_version_string() -> String {
    LocalIdentity::default().version_string()
}

/// The built-in software version for display.
#[must_use]
pub fn current_software_version() -> String {
    LocalIdentity::default().display_software_version()
}
