//! Layered settings.
//!
//! Precedence, lowest first: built-in defaults, an optional TOML file,
//! `DSA_VIEWER_*` environment variables, then command-line flags (applied by
//! the binary on top of [`Settings::load`]).
//!
//! ```toml
//! theme = "light"
//! content = "tutorials.json"
//! page = "bst"
//! refresh_ms = 500
//! strict = true
//! log_file = "dsa-viewer.log"
//! log_level = "debug"
//! ```

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::ui::Theme;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "dsa-viewer.toml";

/// Prefix for environment overrides, e.g. `DSA_VIEWER_THEME=dark`.
pub const ENV_PREFIX: &str = "DSA_VIEWER";

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Pick light or dark from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn resolve(self) -> Theme {
        match self {
            ThemeChoice::Auto => Theme::auto_detect(),
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::Light => Theme::light(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeChoice,
    /// JSON content file; the built-in content is used when unset.
    pub content: Option<PathBuf>,
    /// Page id to open on start instead of the index.
    pub page: Option<String>,
    /// How often the content file is checked for changes.
    pub refresh_ms: u64,
    /// Reject unrecognized difficulty labels.
    pub strict: bool,
    pub log_file: Option<PathBuf>,
    /// `tracing` filter directive used when `DSA_VIEWER_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Auto,
            content: None,
            page: None,
            refresh_ms: 1000,
            strict: false,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path` (required to exist) or from
    /// [`DEFAULT_CONFIG_FILE`] (optional), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (file, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        Config::builder()
            .add_source(File::from(file).required(required))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemeChoice::Auto);
        assert_eq!(settings.refresh_ms, 1000);
        assert!(!settings.strict);
        assert!(settings.content.is_none());
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
theme = "light"
content = "tutorials.json"
page = "searching"
refresh_ms = 250
strict = true
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.content, Some(PathBuf::from("tutorials.json")));
        assert_eq!(settings.page.as_deref(), Some("searching"));
        assert_eq!(settings.refresh_ms, 250);
        assert!(settings.strict);
        // Unset keys keep their defaults.
        assert_eq!(settings.log_level, "info");
        assert!(settings.log_file.is_none());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/dsa-viewer.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_theme_is_an_error() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, r#"theme = "sepia""#).unwrap();
        assert!(Settings::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_theme_choice_resolves() {
        assert_eq!(ThemeChoice::Dark.resolve().highlight, Theme::dark().highlight);
        assert_eq!(ThemeChoice::Light.resolve().highlight, Theme::light().highlight);
    }
}
