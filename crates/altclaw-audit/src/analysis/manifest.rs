//! Integration inference from the dependency manifest.

use std::path::Path;
use tracing::debug;

/// Manifest file probed directly under an installation root.
const MANIFEST_FILE: &str = "requirements.txt";

/// Integration labels and the manifest substrings that imply them.
/// Checked in this order; each rule contributes its label at most once,
/// and the rules are independent (an installation can match several).
const INTEGRATION_RULES: &[(&str, &[&str])] = &[
    ("GitHub", &["pygithub", "github"]),
    ("Web Scraping", &["requests", "beautifulsoup"]),
    ("Slack", &["slack"]),
    ("OpenAI API", &["openai"]),
    ("Anthropic API", &["anthropic"]),
];

/// Detect third-party integrations from `requirements.txt`, if present.
///
/// Case-insensitive substring search over the raw text; nothing is
/// parsed as a requirements format. An absent or unreadable manifest
/// contributes no labels.
pub(crate) async fn detect_integrations(root: &Path) -> Vec<String> {
    let path = root.join(MANIFEST_FILE);
    if !path.exists() {
        return Vec::new();
    }

    let bytes = match tokio::fs::read(&path).await {
        Ok(b) => b,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "could not read manifest");
            return Vec::new();
        }
    };
    let content = String::from_utf8_lossy(&bytes).to_lowercase();

    INTEGRATION_RULES
        .iter()
        .filter(|(_, needles)| needles.iter().any(|n| content.contains(n)))
        .map(|(label, _)| (*label).to_string())
        .collect()
}
