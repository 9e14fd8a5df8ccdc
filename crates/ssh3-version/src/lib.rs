//! # ssh3-version
//!
//! Version identification and negotiation for SSH3.
//!
//! Before any session logic runs, both endpoints exchange a version string
//! naming the protocol dialect, the experimental spec revision and the
//! software build. This crate parses that string into a [`Version`] and
//! decides whether the peer is compatible with us. It does no I/O.
//!
//! ## Components
//!
//! - [`SoftwareVersion`] - Implementation name and `major.minor.patch` build
//! - [`ProtocolVersion`] - Dialect `major.minor` and experimental spec tag
//! - [`Version`] - Everything a peer announces
//! - [`codec`] - Version string formatting and parsing
//! - [`compat`] - Compatibility checks
//! - [`LocalIdentity`] - Numbers announced by the local endpoint
//!
//! ## Example
//!
//! ```rust
//! use ssh3_version::{codec, compat, LocalIdentity};
//!
//! let local = LocalIdentity::default();
//! let announcement = local.version_string();
//!
//! let peer = codec::parse_version_string(&announcement).unwrap();
//! assert!(compat::is_version_supported(&local.version(), &peer));
//! ```

pub mod codec;
pub mod compat;
pub mod identity;
pub mod protocol;
pub mod software;
pub mod version;

pub use codec::{format_version_string, parse_version_string, VersionError};
pub use compat::{check_compatibility, is_version_supported, negotiate, Compatibility};
pub use identity::{current_software_version, current_version_string, this_version, LocalIdentity};
pub use protocol::ProtocolVersion;
pub use software::SoftwareVersion;
pub use version::Version;
