//! # folio-store
//!
//! Load-once content store for Folio.
//!
//! Each collection lives in one static JSON source. The store reads it on
//! first access, validates it (JSON Schema from `folio-schema`, then content
//! invariants), and caches the parsed records behind an `Arc`. There is no
//! write path.
//!
//! ```no_run
//! use folio_core::entities::Project;
//! use folio_store::ContentStore;
//!
//! let store = ContentStore::open("content/data");
//! let projects = store.get_all::<Project>().expect("projects load");
//! let snapshot = store.snapshot().expect("content loads");
//! assert_eq!(projects.len(), snapshot.projects.len());
//! ```

pub mod error;
pub mod slot;
pub mod source;
pub mod store;
mod validate;

pub use error::ContentLoadError;
pub use source::{ContentSource, FsSource, MemorySource};
pub use store::{Collection, ContentStore, Snapshot};
