//! Graph rendering for producing Mermaid flowchart output.
//!
//! This crate turns a resolved [`DependencyGraph`] into text that external
//! graph tools (Mermaid live editors, Markdown renderers) can draw:
//!
//! ```text
//! graph TD
//!     apk_tools[apk-tools]
//!     apk_tools --> musl
//!     apk_tools --> ca_certificates_bundle
//! ```
//!
//! Output is deterministic: edges follow the graph's key order and each edge
//! list's order, with exact duplicate edge lines removed.

mod mermaid;

use indexmap::IndexSet;

use apkdeps_core::DependencyGraph;

pub use mermaid::{MermaidBuilder, node_id};

const NO_DEPS_ID: &str = "no_deps";
const NO_DEPS_LABEL: &str = "No dependencies";

/// Render `graph` as a top-down Mermaid flowchart rooted at `root`.
pub fn render_graph(root: &str, graph: &DependencyGraph) -> String {
    let root_id = node_id(root);
    let mut builder = MermaidBuilder::new();
    builder.node(&root_id, root);

    // Stub is the header plus two lines: the root node and a `no_deps` edge.
    if graph.is_empty() {
        builder.edge_to_node(&root_id, NO_DEPS_ID, NO_DEPS_LABEL);
        return builder.build();
    }

    let edges = collect_edges(graph);
    tracing::debug!(edges = edges.len(), "rendering mermaid graph");
    for (from, to) in &edges {
        builder.edge(from, to);
    }

    builder.build()
}

/// Identifier pairs for every edge, first occurrence kept.
fn collect_edges(graph: &DependencyGraph) -> IndexSet<(String, String)> {
    graph
        .iter()
        .flat_map(|(from, targets)| {
            let from_id = node_id(from);
            targets
                .iter()
                .map(move |to| (from_id.clone(), node_id(to)))
        })
        .collect()
}
