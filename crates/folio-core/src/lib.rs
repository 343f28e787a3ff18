//! # folio-core
//!
//! Core content types and error types for Folio.
//!
//! This crate provides the foundational types shared across all Folio crates:
//! - Entity structs for every content collection (profile, experiences, skills,
//!   projects, case studies, designs) plus the derived `Tag`
//! - Classification enums with lenient parsing for filter arguments
//! - `ContentDate`, the date type used for ordering and invariant checks
//! - Cross-cutting error types
//! - CLI response types

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
