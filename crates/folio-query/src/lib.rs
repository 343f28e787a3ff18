//! # folio-query
//!
//! Read-side operations over loaded portfolio content.
//!
//! - [`filter`], [`sort`], [`aggregate`], [`lookup`]: pure functions over
//!   entity slices
//! - [`projection`]: skill groups, experience sections, and display cards
//! - [`gateway`]: typed queries over one [`folio_store::Snapshot`]
//! - [`document`] and [`execute`]: the query language clients send, and the
//!   `{data, errors}` envelope they get back

pub mod aggregate;
pub mod document;
pub mod error;
pub mod execute;
pub mod filter;
pub mod gateway;
pub mod lookup;
pub mod projection;
pub mod sort;

pub use error::QueryError;
pub use execute::{QueryRequest, QueryResponse, ResponseError, execute};
pub use filter::{Criteria, TypeFilter};
pub use gateway::Gateway;
