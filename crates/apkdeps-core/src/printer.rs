//! ASCII tree rendering of a resolved dependency graph.
//!
//! ```text
//! └── app
//!     ├── libfoo
//!     │   └── musl
//!     └── musl
//! ```
//!
//! The tree enumerates paths: a package reachable along two paths is printed
//! under each of them.

use crate::graph::DependencyGraph;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

const NO_DEPENDENCIES: &str = "(no dependencies)";

/// Render the dependency tree of `root`.
///
/// A root without edges renders as a two-line stub. A package that already
/// appears among its own ancestors is printed once more at the point where
/// the cycle closes, without descending into it again.
pub fn render_tree(root: &str, graph: &DependencyGraph) -> String {
    let mut out = String::new();

    if !graph.has_dependencies(root) {
        out.push_str(LAST_BRANCH);
        out.push_str(root);
        out.push('\n');
        out.push_str(SPACE);
        out.push_str(NO_DEPENDENCIES);
        out.push('\n');
        return out;
    }

    let mut path = Vec::new();
    write_node(&mut out, graph, root, "", true, &mut path);
    out
}

fn write_node<'g>(
    out: &mut String,
    graph: &'g DependencyGraph,
    name: &'g str,
    prefix: &str,
    is_last: bool,
    path: &mut Vec<&'g str>,
) {
    out.push_str(prefix);
    out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
    out.push_str(name);
    out.push('\n');

    if path.contains(&name) {
        return;
    }

    let children = graph.dependencies_of(name);
    if children.is_empty() {
        return;
    }

    let child_prefix = format!("{prefix}{}", if is_last { SPACE } else { PIPE });
    path.push(name);
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        write_node(out, graph, child, &child_prefix, last, path);
    }
    path.pop();
}
