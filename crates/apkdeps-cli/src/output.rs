//! Text shown to the user and written to the output file.

use std::fmt::Write as _;
use std::fs;

use apkdeps_error::{Error, Result};

use crate::ApkdepsOptions;
use crate::pipeline::{Report, RootStatus};

/// Effective parameters as `key: value` lines, in settings-file order.
pub fn describe_parameters(opts: &ApkdepsOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "title: {}", opts.package);
    let _ = writeln!(out, "version: {}", opts.version);
    if let Some(url) = &opts.url {
        let _ = writeln!(out, "url: {url}");
    }
    let _ = writeln!(out, "test: {}", opts.test);
    let _ = writeln!(out, "ascii: {}", opts.ascii);
    if let Some(index) = &opts.index {
        let _ = writeln!(out, "index: {}", index.display());
    }
    if let Some(output) = &opts.output {
        let _ = writeln!(out, "output: {}", output.display());
    }
    out
}

/// Note for stderr when the root did not match the index exactly.
pub fn root_note(opts: &ApkdepsOptions, status: &RootStatus) -> Option<String> {
    match status {
        RootStatus::Exact => None,
        RootStatus::VersionMismatch { found } => Some(format!(
            "note: {} {} not in index, using version {found}",
            opts.package, opts.version
        )),
        RootStatus::Missing => Some(format!("note: {} not found in index", opts.package)),
    }
}

/// Stdout text: the Mermaid graph, then the ASCII tree if one was rendered.
pub fn render_report(report: &Report) -> String {
    let mut out = report.mermaid.clone();
    if let Some(tree) = &report.tree {
        out.push('\n');
        out.push_str(tree);
    }
    out
}

/// Write the Mermaid graph to the configured output file, if any.
pub fn write_report(report: &Report, opts: &ApkdepsOptions) -> Result<()> {
    let Some(path) = &opts.output else {
        return Ok(());
    };

    fs::write(path, &report.mermaid).map_err(|err| {
        Error::io_at(err, path.display().to_string()).with_operation("output::write_report")
    })?;
    tracing::info!(path = %path.display(), "graph written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Summary;
    use apkdeps_error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn report(tree: Option<&str>) -> Report {
        Report {
            mermaid: "graph TD\n    a[a]\n    a --> b\n".to_string(),
            tree: tree.map(str::to_string),
            summary: Summary {
                records: 2,
                visited: 2,
                edges: 1,
                dropped_blocks: 0,
                unresolved: 0,
                providers: 0,
                root: RootStatus::Exact,
            },
        }
    }

    #[test]
    fn parameters_skip_unset_paths() {
        let opts = ApkdepsOptions::new("busybox", "1.36.1-r29")
            .with_url("https://example.org/APKINDEX.tar.gz")
            .with_ascii(true);

        assert_eq!(
            describe_parameters(&opts),
            "title: busybox\nversion: 1.36.1-r29\nurl: https://example.org/APKINDEX.tar.gz\ntest: false\nascii: true\n"
        );
    }

    #[test]
    fn tree_follows_graph() {
        assert_eq!(render_report(&report(None)), "graph TD\n    a[a]\n    a --> b\n");
        assert_eq!(
            render_report(&report(Some("└── a\n    └── b\n"))),
            "graph TD\n    a[a]\n    a --> b\n\n└── a\n    └── b\n"
        );
    }

    #[test]
    fn root_notes() {
        let opts = ApkdepsOptions::new("musl", "1.2.4");
        assert_eq!(root_note(&opts, &RootStatus::Exact), None);
        assert_eq!(
            root_note(
                &opts,
                &RootStatus::VersionMismatch {
                    found: "1.2.5-r0".to_string()
                }
            )
            .as_deref(),
            Some("note: musl 1.2.4 not in index, using version 1.2.5-r0")
        );
    }

    #[test]
    fn writes_graph_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.mmd");
        let opts = ApkdepsOptions::new("a", "1").with_output(&path);

        write_report(&report(Some("tree")), &opts).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "graph TD\n    a[a]\n    a --> b\n");
    }

    #[test]
    fn unwritable_output_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("graph.mmd");
        let opts = ApkdepsOptions::new("a", "1").with_output(&path);

        let err = write_report(&report(None), &opts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.operation(), "output::write_report");
        assert_eq!(err.context_value("path"), path.to_str());
    }
}
