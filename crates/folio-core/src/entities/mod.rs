//! Entity structs for every Folio content collection.
//!
//! Each collection maps to one JSON source file (see
//! [`CollectionName::file_name`](crate::enums::CollectionName::file_name)).
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`; the schemas
//! are what the store validates raw content against before deserializing.
//! Field names are camelCase on disk and on the wire.

mod case_study;
mod design;
mod experience;
mod metric;
mod profile;
mod project;
mod skill;
mod tag;

pub use case_study::CaseStudy;
pub use design::Design;
pub use experience::Experience;
pub use metric::{Metric, TextOrList};
pub use profile::{Profile, SocialLink};
pub use project::Project;
pub use skill::Skill;
pub use tag::Tag;
