use indexmap::{IndexMap, IndexSet};

/// Resolved dependency edges, keyed by package name.
///
/// A package is a key only once it has at least one resolved edge; a leaf is
/// simply absent. [`dependencies_of`](Self::dependencies_of) hides that
/// distinction from readers. Keys keep the order in which the resolver first
/// recorded an edge for them, and each edge list keeps declaration order,
/// duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: IndexMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `to` to the edge list of `from`.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        match self.edges.get_mut(from) {
            Some(targets) => targets.push(to.to_string()),
            None => {
                self.edges.insert(from.to_string(), vec![to.to_string()]);
            }
        }
    }

    /// Direct dependencies of `name`; empty for leaves and unknown names.
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.edges.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_dependencies(&self, name: &str) -> bool {
        !self.dependencies_of(name).is_empty()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of packages with outgoing edges.
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Total edges, duplicates counted.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edges
            .iter()
            .map(|(from, targets)| (from.as_str(), targets.as_slice()))
    }

    /// Every name reachable from `root` by following edges, `root` included,
    /// in depth-first discovery order.
    pub fn reachable_from(&self, root: &str) -> IndexSet<String> {
        let mut seen = IndexSet::new();
        let mut stack = vec![root.to_string()];

        while let Some(name) = stack.pop() {
            if seen.contains(&name) {
                continue;
            }
            stack.extend(self.dependencies_of(&name).iter().rev().cloned());
            seen.insert(name);
        }

        seen
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<S>)> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = (S, Vec<S>)>>(iter: I) -> Self {
        let mut graph = DependencyGraph::new();
        for (from, targets) in iter {
            let from = from.into();
            for to in targets {
                let to: String = to.into();
                graph.add_edge(&from, &to);
            }
        }
        graph
    }
}
