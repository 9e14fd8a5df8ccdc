//! # ssh3-verctl
//!
//! Inspect SSH3 version announcements.
//!
//! ## Usage
//!
//! ```bash
//! # Print the announcement string we send to peers
//! ssh3-verctl announce
//!
//! # Print the software version for display
//! ssh3-verctl version
//!
//! # Check peer version strings, one per line
//! echo "SSH 3.0 francoismichel/ssh3 0.1.4" | ssh3-verctl check
//!
//! # Use a custom config
//! SSH3_VERCTL_CONFIG=~/ssh3-verctl.toml ssh3-verctl check
//! ```

mod check;
mod config;

use anyhow::{bail, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let config = config::Config::load()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let identity = &config.identity;
    let command = std::env::args().nth(1).unwrap_or_else(|| "check".to_string());

    match command.as_str() {
        "announce" => println!("{}", identity.version_string()),
        "version" => println!("{}", identity.display_software_version()),
        "check" => {
            tracing::debug!("Checking peers against {}", identity.version_string());
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let summary = check::run(
                &identity.version(),
                config.json,
                stdin.lock(),
                stdout.lock(),
            )?;
            if !summary.all_supported() {
                bail!(
                    "{} of {} peer versions rejected",
                    summary.checked - summary.supported,
                    summary.checked
                );
            }
        }
        other => bail!("Unknown command: {other} (expected announce, version or check)"),
    }

    Ok(())
}
