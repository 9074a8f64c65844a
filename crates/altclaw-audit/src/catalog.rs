//! Known-application catalog -- the closed universe this tool audits.
//!
//! One static table holds everything the scanner knows about an
//! application: its name, the candidate directories it may live in, and
//! the filenames that count as configuration. Adding an application
//! means adding an enum variant plus one table row; nothing else in the
//! engine changes.

use serde::{Deserialize, Serialize};

/// One of the known chat-bot applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppName {
    OpenClaw,
    Moltbot,
    Clawdbot,
}

impl AppName {
    /// Lowercase identifier used in machine-readable output.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::OpenClaw => "openclaw",
            Self::Moltbot => "moltbot",
            Self::Clawdbot => "clawdbot",
        }
    }

    /// Human-readable title for prose output.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::OpenClaw => "OpenClaw",
            Self::Moltbot => "Moltbot",
            Self::Clawdbot => "Clawdbot",
        }
    }
}

impl std::fmt::Display for AppName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Everything the scanner knows about one application.
#[derive(Debug, Clone, Copy)]
pub struct AppSpec {
    /// Application this row describes
    pub name: AppName,
    /// Candidate installation roots; a leading `~` is expanded at scan time
    pub locations: &'static [&'static str],
    /// Filenames that count as configuration when found under a root
    pub config_files: &'static [&'static str],
}

/// The applications this tool looks for, in scan order.
pub const KNOWN_APPS: &[AppSpec] = &[
    AppSpec {
        name: AppName::OpenClaw,
        locations: &["~/.openclaw", "~/.config/openclaw"],
        config_files: &["config.yaml", "config.yml", ".env"],
    },
    AppSpec {
        name: AppName::Moltbot,
        locations: &["~/.moltbot", "~/.config/moltbot"],
        config_files: &["settings.json", "config.yaml", "credentials.yaml"],
    },
    AppSpec {
        name: AppName::Clawdbot,
        locations: &["~/.clawdbot", "~/.config/clawdbot"],
        config_files: &["config.toml", "api.conf", "settings.json"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_app_once() {
        assert_eq!(KNOWN_APPS.len(), 3);
        let names: Vec<AppName> = KNOWN_APPS.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![AppName::OpenClaw, AppName::Moltbot, AppName::Clawdbot]
        );
    }

    #[test]
    fn every_row_has_locations_and_configs() {
        for spec in KNOWN_APPS {
            assert!(!spec.locations.is_empty(), "{} has no locations", spec.name);
            assert!(
                !spec.config_files.is_empty(),
                "{} has no config files",
                spec.name
            );
        }
    }

    #[test]
    fn app_name_serializes_lowercase() {
        let json = serde_json::to_string(&AppName::OpenClaw).unwrap();
        assert_eq!(json, "\"openclaw\"");

        let back: AppName = serde_json::from_str("\"clawdbot\"").unwrap();
        assert_eq!(back, AppName::Clawdbot);
    }

    #[test]
    fn display_matches_id() {
        assert_eq!(AppName::Moltbot.to_string(), "moltbot");
        assert_eq!(AppName::Clawdbot.title(), "Clawdbot");
    }
}
