//! Version compatibility checks.
//!
//! Rules, first match wins:
//!
//! 1. The protocol name is not checked, it is subject to change.
//! 2. `major.minor` must equal ours exactly.
//! 3. Peers running our own implementation at `0.1.x` (`x <= 5`) without a
//!    spec tag predate tag signalling; only `0.1.4` and `0.1.5` are accepted.
//! 4. Otherwise the peer's spec tag must equal ours. A client that gets
//!    rejected is expected to retry announcing an older tag it supports.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::codec::{self, VersionError};
use crate::version::Version;

/// Software `major.minor` of the untagged legacy releases.
pub const LEGACY_SOFTWARE_LINE: (u32, u32) = (0, 1);

/// Oldest untagged legacy patch level still accepted.
pub const LEGACY_MIN_PATCH: u32 = 4;

/// Newest patch level considered an untagged legacy release.
pub const LEGACY_MAX_PATCH: u32 = 5;

/// Outcome of comparing a peer version against ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compatibility {
    /// Same dialect and same spec tag.
    Compatible,
    /// Untagged legacy release of our own implementation inside the
    /// supported window.
    LegacyAccepted,
    /// Protocol `major.minor` differs.
    ProtocolMismatch,
    /// Untagged legacy release of our own implementation that is too old.
    LegacyTooOld,
    /// Spec tag differs from ours.
    SpecVersionMismatch,
}

impl Compatibility {
    /// Whether the session may proceed.
    #[must_use]
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Compatible | Self::LegacyAccepted)
    }
}

/// Compare `peer` against `local`, returning the matching rule.
#[must_use]
pub fn check_compatibility(local: &Version, peer: &Version) -> Compatibility {
    let verdict = if !local.protocol_version.same_dialect(&peer.protocol_version) {
        Compatibility::ProtocolMismatch
    } else if is_untagged_legacy(local, peer) {
        if peer.software_version.patch >= LEGACY_MIN_PATCH {
            Compatibility::LegacyAccepted
        } else {
            Compatibility::LegacyTooOld
        }
    } else if peer.protocol_version.experimental_spec_version
        == local.protocol_version.experimental_spec_version
    {
        Compatibility::Compatible
    } else {
        Compatibility::SpecVersionMismatch
    };

    trace!(
        peer_protocol = %peer.protocol_version,
        peer_software = %peer.software_version,
        peer_implementation = %peer.software_version.implementation_name,
        verdict = ?verdict,
        "version compatibility checked"
    );
    verdict
}

/// Whether `local` can talk to `peer`.
#[must_use]
pub fn is_version_supported(local: &Version, peer: &Version) -> bool {
    check_compatibility(local, peer).is_supported()
}

/// Parse a peer version string and check it against `local`.
///
/// # Errors
///
/// Returns the parse error for a malformed string, or
/// [`VersionError::UnsupportedSshVersion`] carrying the raw string when the
/// peer is understood but incompatible.
pub fn negotiate(local: &Version, peer: &str) -> Result<Version, VersionError> {
    let peer_version = codec::parse_version_string(peer)?;
    if !is_version_supported(local, &peer_version) {
        return Err(VersionError::UnsupportedSshVersion(peer.to_string()));
    }
    Ok(peer_version)
}

fn is_untagged_legacy(local: &Version, peer: &Version) -> bool {
    let software = &peer.software_version;
    !peer.protocol_version.has_spec_tag()
        && software.implementation_name == local.software_version.implementation_name
        && (software.major, software.minor) == LEGACY_SOFTWARE_LINE
        && software.patch <= LEGACY_MAX_PATCH
}
