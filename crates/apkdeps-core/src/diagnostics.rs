//! Reporting of items the parser and resolver skip.
//!
//! The core never fails on odd input; it drops what it cannot use. A
//! [`DiagnosticSink`] lets the tool layer see those drops without the core
//! deciding how (or whether) to surface them.

use std::fmt;

/// Something the parser or resolver skipped or substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A non-empty index block had no `P:` line (or an empty name).
    BlockWithoutName {
        /// Zero-based position of the block in the index text.
        ordinal: usize,
        first_line: String,
    },
    /// A dependency matched neither a record nor any provider.
    UnresolvedToken { package: String, token: String },
    /// A dependency named a virtual capability and a provider stood in for it.
    ProviderSubstituted {
        package: String,
        capability: String,
        provider: String,
    },
    /// The resolution root has no record in the table.
    RootMissing { root: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::BlockWithoutName {
                ordinal,
                first_line,
            } => write!(f, "block #{ordinal} has no package name: {first_line:?}"),
            Diagnostic::UnresolvedToken { package, token } => {
                write!(f, "{package}: dependency '{token}' has no record or provider")
            }
            Diagnostic::ProviderSubstituted {
                package,
                capability,
                provider,
            } => write!(f, "{package}: '{capability}' provided by {provider}"),
            Diagnostic::RootMissing { root } => write!(f, "package '{root}' not found in index"),
        }
    }
}

/// Receiver for [`Diagnostic`]s.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Sink that keeps every diagnostic in arrival order.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn dropped_blocks(&self) -> usize {
        self.items
            .iter()
            .filter(|d| matches!(d, Diagnostic::BlockWithoutName { .. }))
            .count()
    }

    pub fn unresolved_tokens(&self) -> usize {
        self.items
            .iter()
            .filter(|d| matches!(d, Diagnostic::UnresolvedToken { .. }))
            .count()
    }

    pub fn provider_substitutions(&self) -> usize {
        self.items
            .iter()
            .filter(|d| matches!(d, Diagnostic::ProviderSubstituted { .. }))
            .count()
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }
}
