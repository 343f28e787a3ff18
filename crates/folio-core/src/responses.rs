//! CLI response types returned as JSON by `folio` commands.
//!
//! These structs define the shape of JSON output for `folio check` and
//! `folio stats`. Query responses have their own envelope in `folio-query`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CollectionName;

/// One loaded collection in a `folio check` report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CollectionCount {
    pub collection: CollectionName,
    pub file: String,
    pub records: u32,
}

/// Response from `folio check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckResponse {
    pub content_dir: String,
    pub collections: Vec<CollectionCount>,
    pub tags: u32,
}

/// Headline numbers from the skills page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkillStats {
    pub total: u32,
    /// `None` when there are no skills to take a maximum over.
    pub max_years_of_experience: Option<u32>,
    pub total_projects: u32,
}

/// Headline numbers from the design page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CaseStudyStats {
    pub total: u32,
    pub featured: u32,
    pub distinct_tools: u32,
}

/// Response from `folio stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatsResponse {
    pub skills: SkillStats,
    pub case_studies: CaseStudyStats,
}
