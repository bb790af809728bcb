use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use apkdeps_error::{Error, ErrorKind, Result};
use serde::Deserialize;

/// Settings file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "pr2.toml";

/// Contents of the TOML settings file.
///
/// ```toml
/// title = "busybox"
/// version = "1.36.1-r29"
/// url = "https://dl-cdn.alpinelinux.org/alpine/v3.20/main/x86_64/APKINDEX.tar.gz"
/// test = false
/// ascii = true
/// ```
///
/// Every field is optional here; [`crate::ApkdepsOptions::from_settings`]
/// checks for the required ones after flags are merged in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Root package name.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub test: bool,
    #[serde(default)]
    pub ascii: bool,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Settings {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            let display = path.display().to_string();
            let base = if err.kind() == io::ErrorKind::NotFound {
                Error::config_not_found(display)
            } else {
                Error::new(ErrorKind::IoFailed, "failed to read config file")
                    .with_context("path", display)
            };
            base.with_operation("Settings::from_path").set_source(err)
        })?;
        Self::from_toml(&text, &path.display().to_string())
    }

    /// Parse settings from TOML text. `origin` names the source in errors.
    pub fn from_toml(text: &str, origin: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| {
            Error::new(ErrorKind::ConfigInvalid, format!("invalid TOML in {origin}"))
                .with_operation("Settings::from_toml")
                .with_context("path", origin)
                .set_source(err)
        })
    }
}

/// Load settings from `path`, or from [`DEFAULT_CONFIG_PATH`] when no path
/// is given.
///
/// A missing default file is not an error: every setting can come from
/// flags instead. A missing explicit file is.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::from_path(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                Settings::from_path(default)
            } else {
                tracing::debug!(path = DEFAULT_CONFIG_PATH, "no settings file, using flags only");
                Ok(Settings::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_fields() {
        let settings = Settings::from_toml(
            r#"
                title = "busybox"
                version = "1.36.1-r29"
                url = "https://example.org/APKINDEX.tar.gz"
                test = true
                ascii = true
                output = "graph.mmd"
            "#,
            "inline",
        )
        .unwrap();

        assert_eq!(settings.title.as_deref(), Some("busybox"));
        assert_eq!(settings.version.as_deref(), Some("1.36.1-r29"));
        assert!(settings.test);
        assert!(settings.ascii);
        assert_eq!(settings.output, Some(PathBuf::from("graph.mmd")));
    }

    #[test]
    fn flags_default_to_false() {
        let settings = Settings::from_toml("title = \"x\"", "inline").unwrap();
        assert!(!settings.test);
        assert!(!settings.ascii);
        assert_eq!(settings.url, None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let settings = Settings::from_toml("title = \"x\"\nmirror = \"eu\"\n", "inline").unwrap();
        assert_eq!(settings.title.as_deref(), Some("x"));
    }

    #[test]
    fn malformed_toml_is_config_invalid() {
        let err = Settings::from_toml("title = ", "broken.toml").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(err.context_value("path"), Some("broken.toml"));
        assert!(err.source_ref().is_some());
    }

    #[test]
    fn wrong_type_is_config_invalid() {
        let err = Settings::from_toml("ascii = \"yes\"", "typed.toml").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
