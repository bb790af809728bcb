//! Core of apkdeps: APKINDEX parsing, dependency closure resolution and the
//! ASCII tree printer.
//!
//! Everything in this crate is a pure transformation over in-memory text and
//! data. No function here performs I/O or returns an error: malformed blocks
//! and unresolvable dependency tokens are skipped, and callers that want to
//! know about the skips pass a [`DiagnosticSink`].
//!
//! ```
//! use apkdeps_core::{parse_index, render_tree, resolve};
//!
//! let text = "P:app\nV:1.0\nD:lib>=2\n\nP:lib\nV:2.1\n";
//! let records = parse_index(text);
//! let resolution = resolve("app", "1.0", &records);
//! assert_eq!(render_tree("app", &resolution.graph), "└── app\n    └── lib\n");
//! ```

pub mod diagnostics;
pub mod graph;
pub mod index;
pub mod printer;
pub mod resolve;
pub mod token;

pub use diagnostics::{Diagnostic, DiagnosticSink, Diagnostics, NoopSink};
pub use graph::DependencyGraph;
pub use index::{PackageRecord, RecordTable, parse_index, parse_index_with};
pub use printer::render_tree;
pub use resolve::{Resolution, RootLookup, VisitedSet, find_root, resolve, resolve_with};
pub use token::clean_token;
