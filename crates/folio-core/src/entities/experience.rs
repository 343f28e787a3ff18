use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates::ContentDate;
use crate::enums::ExperienceType;

/// A career timeline entry: a job, a degree, a research position, or
/// volunteer work.
///
/// Invariants (checked at load): `current` implies no `end_date`, and an
/// `end_date` is never before `start_date`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
    #[schemars(with = "String")]
    pub start_date: ContentDate,
    #[serde(default)]
    #[schemars(with = "Option<String>")]
    pub end_date: Option<ContentDate>,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub logo: Option<String>,
    pub location: String,
}
