//! Mermaid flowchart syntax helpers.

use std::fmt::Write;

const INDENT: &str = "    ";
const DIRECTION: &str = "TD";

/// Mermaid node identifier for a package name.
///
/// Hyphens are not valid in bare identifiers, so each one becomes an
/// underscore. The label keeps the original name.
pub fn node_id(name: &str) -> String {
    name.replace('-', "_")
}

/// Builder for Mermaid `graph` text, one statement per line.
pub struct MermaidBuilder {
    output: String,
}

impl MermaidBuilder {
    /// Start a top-down graph.
    pub fn new() -> Self {
        let mut output = String::with_capacity(1024);
        let _ = writeln!(output, "graph {DIRECTION}");
        Self { output }
    }

    /// Declare a node: `id[label]`.
    pub fn node(&mut self, id: &str, label: &str) -> &mut Self {
        let _ = writeln!(self.output, "{INDENT}{id}[{label}]");
        self
    }

    /// Add an edge: `from --> to`.
    pub fn edge(&mut self, from: &str, to: &str) -> &mut Self {
        let _ = writeln!(self.output, "{INDENT}{from} --> {to}");
        self
    }

    /// Add an edge whose target is declared inline: `from --> to[label]`.
    pub fn edge_to_node(&mut self, from: &str, to: &str, label: &str) -> &mut Self {
        let _ = writeln!(self.output, "{INDENT}{from} --> {to}[{label}]");
        self
    }

    pub fn build(self) -> String {
        self.output
    }
}

impl Default for MermaidBuilder {
    fn default() -> Self {
        Self::new()
    }
}
