use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SkillCategory;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    /// 0–100. The schema only bounds the integer type; the store rejects
    /// values above 100.
    pub proficiency: u8,
    pub years_of_experience: u32,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub project_count: Option<u32>,
}
