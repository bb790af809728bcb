//! # apkdeps-error
//!
//! Error type for the apkdeps tool layer.
//!
//! The parser, resolver and renderers in `apkdeps-core` are total and never
//! return this type. It is used by the collaborators around them: config
//! loading, archive fetching and index extraction.
//!
//! - **ErrorKind**: what went wrong (e.g. `ConfigNotFound`, `IndexNotFound`)
//! - **ErrorStatus**: whether retrying may help (Permanent, Temporary, Persistent)
//! - **Context**: key/value pairs that locate the cause (path, url, field)
//! - **Source**: the wrapped underlying error, if any
//!
//! ## Usage
//!
//! ```rust
//! use apkdeps_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::IndexNotFound, "no APKINDEX member in archive")
//!         .with_operation("archive::extract_index")
//!         .with_context("url", "https://example.org/APKINDEX.tar.gz"))
//! }
//! ```
//!
//! External errors are wrapped with `set_source(err)` where they occur rather
//! than through blanket `From` impls, so the call site picks the kind.

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using the apkdeps Error
pub type Result<T> = std::result::Result<T, Error>;
