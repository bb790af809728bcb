//! Load, parse, resolve and render one package's dependency closure.

use std::fs;

use apkdeps_core::{Diagnostics, RootLookup, find_root, parse_index_with, render_tree, resolve_with};
use apkdeps_error::{Error, Result};
use apkdeps_mermaid::render_graph;
use tracing::{info, warn};

use crate::ApkdepsOptions;
use crate::archive::extract_index;
use crate::fetch::fetch_archive;

/// How the requested root matched the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootStatus {
    Exact,
    /// The index has the package under another version.
    VersionMismatch { found: String },
    Missing,
}

/// Counters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub records: usize,
    pub visited: usize,
    pub edges: usize,
    pub dropped_blocks: usize,
    pub unresolved: usize,
    pub providers: usize,
    pub root: RootStatus,
}

/// Rendered output of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub mermaid: String,
    /// Present only when the ASCII tree was requested.
    pub tree: Option<String>,
    pub summary: Summary,
}

/// APKINDEX text for `opts`: from the `--index` file when given, otherwise
/// fetched and extracted from the archive at `url`.
pub fn load_index_text(opts: &ApkdepsOptions) -> Result<String> {
    if let Some(path) = &opts.index {
        tracing::debug!(path = %path.display(), "reading index text");
        return fs::read_to_string(path).map_err(|err| {
            Error::io_at(err, path.display().to_string())
                .with_operation("pipeline::load_index_text")
        });
    }

    let url = opts.url.as_deref().ok_or_else(|| {
        Error::config_missing_field("url").with_operation("pipeline::load_index_text")
    })?;
    let bytes = fetch_archive(url, opts.test)?;
    extract_index(&bytes, url)
}

/// Parse `text`, resolve the closure of the configured root and render it.
///
/// Never fails: a missing root yields the "no dependencies" output.
pub fn analyze(text: &str, opts: &ApkdepsOptions) -> Report {
    let mut diagnostics = Diagnostics::new();
    let records = parse_index_with(text, &mut diagnostics);

    let root = match find_root(&records, &opts.package, &opts.version) {
        RootLookup::Exact(_) => RootStatus::Exact,
        RootLookup::VersionMismatch(record) => {
            warn!(
                package = %opts.package,
                requested = %opts.version,
                found = %record.version,
                "index carries a different version of the root package"
            );
            RootStatus::VersionMismatch {
                found: record.version.clone(),
            }
        }
        RootLookup::Missing => {
            warn!(package = %opts.package, "root package not found in index");
            RootStatus::Missing
        }
    };

    let resolution = resolve_with(&opts.package, &opts.version, &records, &mut diagnostics);
    let mermaid = render_graph(&opts.package, &resolution.graph);
    let tree = opts
        .ascii
        .then(|| render_tree(&opts.package, &resolution.graph));

    for diagnostic in diagnostics.iter() {
        tracing::debug!(%diagnostic, "skipped");
    }

    let summary = Summary {
        records: records.len(),
        visited: resolution.visited.len(),
        edges: resolution.graph.edge_count(),
        dropped_blocks: diagnostics.dropped_blocks(),
        unresolved: diagnostics.unresolved_tokens(),
        providers: diagnostics.provider_substitutions(),
        root,
    };
    info!(
        records = summary.records,
        visited = summary.visited,
        edges = summary.edges,
        dropped_blocks = summary.dropped_blocks,
        unresolved = summary.unresolved,
        providers = summary.providers,
        "resolution summary"
    );

    Report {
        mermaid,
        tree,
        summary,
    }
}
