//! Command-line overrides for the settings file.

use std::path::PathBuf;

use clap::Args;

/// Flags that take precedence over the settings file.
///
/// Boolean flags can only switch a mode on; leave them out to keep the
/// value from the settings file.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// Root package name (overrides `title`)
    #[arg(short = 'p', long = "package", value_name = "NAME")]
    pub package: Option<String>,

    /// Target version of the root package (overrides `version`)
    #[arg(long = "package-version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Repository archive URL, or a local path in test mode (overrides `url`)
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Test repository mode: read `url` from the local filesystem
    #[arg(long)]
    pub test: bool,

    /// Also print the dependency tree as ASCII art
    #[arg(long)]
    pub ascii: bool,

    /// Write the Mermaid graph to this file as well as stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Read already-decoded APKINDEX text from this file instead of fetching
    #[arg(long = "index", value_name = "FILE", conflicts_with = "url")]
    pub index: Option<PathBuf>,
}
