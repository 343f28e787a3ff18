use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A gallery piece on the design page. Lighter than a case study: no slug,
/// no detail page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub app_store_url: Option<String>,
    #[serde(default)]
    pub google_play_url: Option<String>,
    #[serde(default)]
    pub live_site_url: Option<String>,
}
