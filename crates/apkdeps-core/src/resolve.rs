//! Dependency closure resolution.
//!
//! Starting from a root package, every `D:` token is cleaned and matched
//! against the record table. A token that names no record is looked up as a
//! virtual capability among the `p:` fields; the first provider in index
//! order stands in for it. Tokens matching neither are dropped.
//!
//! Traversal is depth-first. The visited set guards against cycles and
//! diamonds: each package is expanded at most once per resolution, though it
//! may appear as an edge target many times.

use indexmap::IndexSet;

use crate::diagnostics::{Diagnostic, DiagnosticSink, NoopSink};
use crate::graph::DependencyGraph;
use crate::index::{PackageRecord, RecordTable};
use crate::token::clean_token;

/// Packages expanded during one resolution, in expansion order.
pub type VisitedSet = IndexSet<String>;

/// Output of [`resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub graph: DependencyGraph,
    pub visited: VisitedSet,
}

/// Outcome of looking up the root by exact name and version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootLookup<'a> {
    Exact(&'a PackageRecord),
    /// A record with that name exists but carries a different version.
    VersionMismatch(&'a PackageRecord),
    Missing,
}

/// Locate the root record by (name, version).
///
/// The table holds one record per name, so this only tells the caller whether
/// the requested version is the one the index has; it does not affect what
/// [`resolve`] expands.
pub fn find_root<'a>(records: &'a RecordTable, name: &str, version: &str) -> RootLookup<'a> {
    match records.get(name) {
        Some(record) if record.version == version => RootLookup::Exact(record),
        Some(record) => RootLookup::VersionMismatch(record),
        None => RootLookup::Missing,
    }
}

/// Resolve the dependency closure of `root`.
///
/// `version` is accepted for symmetry with [`find_root`] and is not used to
/// select records.
pub fn resolve(root: &str, version: &str, records: &RecordTable) -> Resolution {
    resolve_with(root, version, records, &mut NoopSink)
}

/// [`resolve`], reporting a missing root, provider substitutions and
/// unresolved tokens to `sink`.
#[tracing::instrument(skip_all, fields(root = root, version = version))]
pub fn resolve_with(
    root: &str,
    version: &str,
    records: &RecordTable,
    sink: &mut dyn DiagnosticSink,
) -> Resolution {
    let mut resolution = Resolution::default();

    if !records.contains(root) {
        tracing::debug!("root package has no record");
        sink.report(Diagnostic::RootMissing {
            root: root.to_string(),
        });
    }

    expand(root, records, &mut resolution, sink);

    tracing::debug!(
        visited = resolution.visited.len(),
        nodes = resolution.graph.node_count(),
        edges = resolution.graph.edge_count(),
        "resolved dependency closure"
    );
    resolution
}

fn expand(
    current: &str,
    records: &RecordTable,
    state: &mut Resolution,
    sink: &mut dyn DiagnosticSink,
) {
    if !state.visited.insert(current.to_string()) {
        return;
    }

    let Some(record) = records.get(current) else {
        return;
    };

    for raw in record.dependency_tokens() {
        let Some(name) = clean_token(raw) else {
            continue;
        };
        if name == current {
            continue;
        }

        let Some(target) = match_dependency(current, name, records, sink) else {
            continue;
        };

        state.graph.add_edge(current, target);
        if !state.visited.contains(target) {
            expand(target, records, state, sink);
        }
    }
}

/// Map a cleaned dependency name to the package that satisfies it.
///
/// A direct record always takes precedence over providers.
fn match_dependency<'a>(
    current: &str,
    name: &'a str,
    records: &'a RecordTable,
    sink: &mut dyn DiagnosticSink,
) -> Option<&'a str> {
    if records.contains(name) {
        return Some(name);
    }

    if let Some(provider) = records.first_provider(name) {
        tracing::trace!(package = current, capability = name, provider = %provider.name, "virtual dependency");
        sink.report(Diagnostic::ProviderSubstituted {
            package: current.to_string(),
            capability: name.to_string(),
            provider: provider.name.clone(),
        });
        return Some(provider.name.as_str());
    }

    tracing::trace!(package = current, token = name, "dropping unresolved dependency");
    sink.report(Diagnostic::UnresolvedToken {
        package: current.to_string(),
        token: name.to_string(),
    });
    None
}
