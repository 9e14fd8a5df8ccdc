//! Checking peer version strings.
//!
//! Each input line is one version string as received from a peer.

use anyhow::Result;
use serde::Serialize;
use ssh3_version::{codec, compat, Compatibility, Version};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Result of checking one version string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The line as received.
    pub input: String,
    /// Parsed version, if the line could be parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    /// Compatibility verdict, if the line could be parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Compatibility>,
    /// Whether a session with this peer may proceed.
    pub supported: bool,
    /// Parse error, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Counts of checked lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines checked.
    pub checked: usize,
    /// Lines accepted.
    pub supported: usize,
}

impl Summary {
    /// Whether every checked line was accepted.
    #[must_use]
    pub fn all_supported(&self) -> bool {
        self.checked == self.supported
    }
}

/// Parse `line` and check it against `local`.
#[must_use]
pub fn check_line(local: &Version, line: &str) -> Report {
    match codec::parse_version_string(line) {
        Ok(version) => {
            let verdict = compat::check_compatibility(local, &version);
            Report {
                input: line.to_string(),
                supported: verdict.is_supported(),
                version: Some(version),
                verdict: Some(verdict),
                error: None,
            }
        }
        Err(e) => Report {
            input: line.to_string(),
            version: None,
            verdict: None,
            supported: false,
            error: Some(e.to_string()),
        },
    }
}

/// Check every non-empty line of `input`, writing one report per line.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run(
    local: &Version,
    json: bool,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let report = check_line(local, line);
        summary.checked += 1;
        if report.supported {
            summary.supported += 1;
            debug!(peer = %line, verdict = ?report.verdict, "Peer version supported");
        } else if let Some(error) = &report.error {
            warn!(peer = %line, error = %error, "Invalid peer version");
        } else {
            warn!(peer = %line, verdict = ?report.verdict, "Unsupported peer version");
        }

        if json {
            serde_json::to_writer(&mut output, &report)?;
            writeln!(output)?;
        } else {
            writeln!(output, "{}", render_text(&report))?;
        }
    }

    info!(
        checked = summary.checked,
        supported = summary.supported,
        "Version check finished"
    );
    Ok(summary)
}

fn render_text(report: &Report) -> String {
    match (&report.verdict, &report.error) {
        (Some(verdict), _) => format!(
            "{}\t{:?}\t{}",
            if report.supported { "ok" } else { "reject" },
            verdict,
            report.input
        ),
        (None, Some(error)) => format!("error\t{}\t{}", error, report.input),
        (None, None) => format!("error\t\t{}", report.input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssh3_version::this_version;

    #[test]
    fn test_check_line_supported() {
        let report = check_line(
            &this_version(),
            "SSH 3.0 francoismichel/ssh3 0.1.5 experimental_spec_version=alpha-00",
        );
        assert!(report.supported);
        assert_eq!(report.verdict, Some(Compatibility::Compatible));
        assert!(report.error.is_none());
    }

    #[test]
    fn test_check_line_invalid() {
        let report = check_line(&this_version(), "garbage");
        assert!(!report.supported);
        assert!(report.version.is_none());
        assert_eq!(
            report.error.as_deref(),
            Some("Invalid ssh version string: garbage")
        );
    }

    #[test]
    fn test_run_json() {
        let input = "\
SSH 3.0 francoismichel/ssh3 0.1.4

SSH 3.0 francoismichel/ssh3 0.1.3
SSH 3.0 other/impl 1.0.0 experimental_spec_version=alpha-00
garbage
";
        let mut out = Vec::new();
        let summary = run(&this_version(), true, input.as_bytes(), &mut out).unwrap();
        assert_eq!(summary, Summary { checked: 4, supported: 2 });
        assert!(!summary.all_supported());

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["verdict"], "legacy_accepted");
        assert_eq!(lines[1]["verdict"], "legacy_too_old");
        assert_eq!(lines[2]["supported"], true);
        assert!(lines[3].get("verdict").is_none());
    }

    #[test]
    fn test_run_text() {
        let mut out = Vec::new();
        let summary = run(
            &this_version(),
            false,
            "SSH 3.1 x 0.1.5 experimental_spec_version=alpha-00\n".as_bytes(),
            &mut out,
        )
        .unwrap();
        assert_eq!(summary.supported, 0);
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("reject\tProtocolMismatch\t"));
    }
}
