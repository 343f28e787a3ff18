use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates::ContentDate;
use crate::entities::{Metric, TextOrList};
use crate::enums::CaseStudyType;

/// A design case study. Source order is navigation order on detail pages.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub client: String,
    pub duration: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "type")]
    pub kind: CaseStudyType,
    pub hero_image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub problem_statement: TextOrList,
    #[serde(default)]
    pub solutions: TextOrList,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub metrics: Option<Vec<Metric>>,
    /// Unrendered MDX body, passed through as-is.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[schemars(with = "String")]
    pub published_at: ContentDate,
    #[serde(default)]
    pub app_store_url: Option<String>,
    #[serde(default)]
    pub google_play_url: Option<String>,
    #[serde(default)]
    pub live_site_url: Option<String>,
}
