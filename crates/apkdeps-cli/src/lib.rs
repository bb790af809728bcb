//! apkdeps command-line interface.

pub mod archive;
pub mod config;
pub mod fetch;
pub mod options;
pub mod output;
pub mod pipeline;

use std::path::PathBuf;
use std::time::Instant;

use apkdeps_error::{Error, Result};
use tracing::info;

pub use config::{Settings, load_settings};
pub use options::SettingsOverrides;
pub use pipeline::{Report, RootStatus, Summary, analyze, load_index_text};

/// Effective options for one run, after merging settings and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApkdepsOptions {
    pub package: String,
    pub version: String,
    /// Archive URL, or a local archive path in test mode.
    pub url: Option<String>,
    /// Test repository mode: `url` is read from disk instead of HTTP.
    pub test: bool,
    /// Already-decoded APKINDEX text; skips fetch and extraction.
    pub index: Option<PathBuf>,
    pub ascii: bool,
    /// Also write the Mermaid graph to this file.
    pub output: Option<PathBuf>,
}

impl ApkdepsOptions {
    pub fn new(package: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            version: version.into(),
            url: None,
            test: false,
            index: None,
            ascii: false,
            output: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    pub fn with_index(mut self, index: impl Into<PathBuf>) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn with_ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Merge the settings file with command-line overrides.
    ///
    /// Flags win over settings. `title` and `version` are always required;
    /// `url` is required unless an index file is given directly.
    pub fn from_settings(settings: Settings, overrides: SettingsOverrides) -> Result<Self> {
        let package = non_empty(overrides.package.or(settings.title)).ok_or_else(|| {
            Error::config_missing_field("title").with_operation("ApkdepsOptions::from_settings")
        })?;
        let version = non_empty(overrides.version.or(settings.version)).ok_or_else(|| {
            Error::config_missing_field("version").with_operation("ApkdepsOptions::from_settings")
        })?;
        let url = non_empty(overrides.url.or(settings.url));

        if url.is_none() && overrides.index.is_none() {
            return Err(Error::config_missing_field("url")
                .with_operation("ApkdepsOptions::from_settings"));
        }

        Ok(Self {
            package,
            version,
            url,
            test: settings.test || overrides.test,
            index: overrides.index,
            ascii: settings.ascii || overrides.ascii,
            output: overrides.output.or(settings.output),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Main entry point: load the index and analyze it.
pub fn run_main(opts: &ApkdepsOptions) -> Result<Report> {
    let load_start = Instant::now();
    let text = load_index_text(opts)?;
    info!(
        bytes = text.len(),
        "Loading index: {:.2}s",
        load_start.elapsed().as_secs_f64()
    );

    let analyze_start = Instant::now();
    let report = analyze(&text, opts);
    info!(
        "Parse, resolve and render: {:.2}s",
        analyze_start.elapsed().as_secs_f64()
    );

    Ok(report)
}
