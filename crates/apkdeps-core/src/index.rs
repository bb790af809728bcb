//! APKINDEX record parsing.
//!
//! An index is a sequence of blocks separated by a blank line. Each line in a
//! block is a one-letter tag, a colon and a raw value:
//!
//! ```text
//! P:busybox
//! V:1.36.1-r29
//! D:so:libc.musl-x86_64.so.1
//! p:cmd:busybox=1.36.1-r29 /bin/sh
//! ```
//!
//! Only `P` (name), `V` (version), `D` (dependencies) and `p` (provides) are
//! kept; every other tag is ignored.

use std::borrow::Cow;

use indexmap::IndexMap;
use indexmap::map::Iter;

use crate::diagnostics::{Diagnostic, DiagnosticSink, NoopSink};
use crate::token::clean_token;

const BLOCK_SEPARATOR: &str = "\n\n";

const TAG_NAME: &str = "P:";
const TAG_VERSION: &str = "V:";
const TAG_DEPENDS: &str = "D:";
const TAG_PROVIDES: &str = "p:";

/// One package entry of an index.
///
/// `dependencies` and `provides` hold the raw field values exactly as they
/// appeared after the tag; use [`dependency_tokens`](Self::dependency_tokens)
/// and [`provide_tokens`](Self::provide_tokens) to iterate the tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub dependencies: String,
    pub provides: String,
}

impl PackageRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_dependencies(mut self, dependencies: impl Into<String>) -> Self {
        self.dependencies = dependencies.into();
        self
    }

    pub fn with_provides(mut self, provides: impl Into<String>) -> Self {
        self.provides = provides.into();
        self
    }

    pub fn dependency_tokens(&self) -> impl Iterator<Item = &str> {
        self.dependencies.split_whitespace()
    }

    pub fn provide_tokens(&self) -> impl Iterator<Item = &str> {
        self.provides.split_whitespace()
    }

    /// Whether this package declares it provides `capability`.
    ///
    /// Provides tokens carry versions too (`cmd:sh=1.36`, `pc:zlib=1.3`), so
    /// each token is cleaned the same way dependency tokens are before the
    /// exact comparison.
    pub fn provides_capability(&self, capability: &str) -> bool {
        self.provide_tokens()
            .filter_map(clean_token)
            .any(|provided| provided == capability)
    }
}

/// Packages of one index, keyed by name.
///
/// Iteration follows the order in which each name first appeared in the
/// index text. A later block with the same name replaces the record but keeps
/// that position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    records: IndexMap<String, PackageRecord>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier one with the same name.
    pub fn insert(&mut self, record: PackageRecord) -> Option<PackageRecord> {
        self.records.insert(record.name.clone(), record)
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, PackageRecord> {
        self.records.iter()
    }

    /// First record, in table order, that provides `capability`.
    ///
    /// When several packages provide the same capability the earliest one in
    /// the index wins; there is no ranking.
    pub fn first_provider(&self, capability: &str) -> Option<&PackageRecord> {
        self.records
            .values()
            .find(|record| record.provides_capability(capability))
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = (&'a String, &'a PackageRecord);
    type IntoIter = Iter<'a, String, PackageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<PackageRecord> for RecordTable {
    fn from_iter<I: IntoIterator<Item = PackageRecord>>(iter: I) -> Self {
        let mut table = RecordTable::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

/// Parse index text into a record table.
///
/// Never fails: blocks without a name are dropped, unknown tags are ignored.
/// CRLF line endings are accepted and read as LF.
pub fn parse_index(text: &str) -> RecordTable {
    parse_index_with(text, &mut NoopSink)
}

/// [`parse_index`], reporting each dropped block to `sink`.
pub fn parse_index_with(text: &str, sink: &mut dyn DiagnosticSink) -> RecordTable {
    let mut table = RecordTable::new();
    let text = normalize_line_endings(text);

    for (ordinal, block) in text.split(BLOCK_SEPARATOR).enumerate() {
        if block.trim().is_empty() {
            continue;
        }

        match parse_block(block) {
            Some(record) => {
                if let Some(previous) = table.insert(record) {
                    tracing::trace!(
                        name = %previous.name,
                        version = %previous.version,
                        "record replaced by later block"
                    );
                }
            }
            None => {
                let first_line = block.lines().next().unwrap_or_default().to_string();
                tracing::trace!(ordinal, first_line = %first_line, "dropping block without package name");
                sink.report(Diagnostic::BlockWithoutName {
                    ordinal,
                    first_line,
                });
            }
        }
    }

    tracing::debug!(records = table.len(), "parsed index");
    table
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn parse_block(block: &str) -> Option<PackageRecord> {
    let mut name = None;
    let mut record = PackageRecord::default();

    for line in block.lines() {
        if let Some(value) = line.strip_prefix(TAG_NAME) {
            name = Some(value);
        } else if let Some(value) = line.strip_prefix(TAG_VERSION) {
            record.version = value.to_string();
        } else if let Some(value) = line.strip_prefix(TAG_DEPENDS) {
            record.dependencies = value.to_string();
        } else if let Some(value) = line.strip_prefix(TAG_PROVIDES) {
            record.provides = value.to_string();
        }
    }

    match name {
        Some(name) if !name.is_empty() => {
            record.name = name.to_string();
            Some(record)
        }
        _ => None,
    }
}
