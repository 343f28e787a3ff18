//! Classification enums for content entities and collection names.
//!
//! All enums serialize as `SCREAMING_SNAKE_CASE` (`WEB_APP`, `SOFT_SKILLS`),
//! matching the query schema. Content files must use that spelling; the
//! generated JSON Schema rejects anything else at load time. `FromStr` is
//! lenient (`web-app`, `soft skills`) and is what filter arguments go through.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Normalize a user-supplied variant name: trim, upper-case, `-`/space → `_`.
fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// ExperienceType
// ---------------------------------------------------------------------------

/// Kind of a career timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceType {
    Work,
    Volunteer,
    Education,
    Research,
}

impl ExperienceType {
    pub const ALL: [Self; 4] = [Self::Work, Self::Volunteer, Self::Education, Self::Research];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "WORK",
            Self::Volunteer => "VOLUNTEER",
            Self::Education => "EDUCATION",
            Self::Research => "RESEARCH",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Volunteer => "Volunteer",
            Self::Education => "Education",
            Self::Research => "Research",
        }
    }
}

impl fmt::Display for ExperienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "ExperienceType",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// SkillCategory
// ---------------------------------------------------------------------------

/// Grouping used on the skills page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Design,
    SoftSkills,
}

impl SkillCategory {
    pub const ALL: [Self; 5] = [
        Self::Frontend,
        Self::Backend,
        Self::Tools,
        Self::Design,
        Self::SoftSkills,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "FRONTEND",
            Self::Backend => "BACKEND",
            Self::Tools => "TOOLS",
            Self::Design => "DESIGN",
            Self::SoftSkills => "SOFT_SKILLS",
        }
    }

    /// Heading shown above a group of skills.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools",
            Self::Design => "Design",
            Self::SoftSkills => "Soft Skills",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "SkillCategory",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// ProjectType
// ---------------------------------------------------------------------------

/// Kind of a development project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
    WebApp,
    MobileApp,
    Api,
    Library,
    Tool,
}

impl ProjectType {
    pub const ALL: [Self; 5] = [
        Self::WebApp,
        Self::MobileApp,
        Self::Api,
        Self::Library,
        Self::Tool,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WebApp => "WEB_APP",
            Self::MobileApp => "MOBILE_APP",
            Self::Api => "API",
            Self::Library => "LIBRARY",
            Self::Tool => "TOOL",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WebApp => "Web App",
            Self::MobileApp => "Mobile App",
            Self::Api => "API",
            Self::Library => "Library",
            Self::Tool => "Tool",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "ProjectType",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// CaseStudyType
// ---------------------------------------------------------------------------

/// Discipline of a design case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseStudyType {
    UiUx,
    Branding,
    Research,
    WebDesign,
}

impl CaseStudyType {
    pub const ALL: [Self; 4] = [Self::UiUx, Self::Branding, Self::Research, Self::WebDesign];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UiUx => "UI_UX",
            Self::Branding => "BRANDING",
            Self::Research => "RESEARCH",
            Self::WebDesign => "WEB_DESIGN",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UiUx => "UI/UX Design",
            Self::Branding => "Branding",
            Self::Research => "UX Research",
            Self::WebDesign => "Web Design",
        }
    }
}

impl fmt::Display for CaseStudyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStudyType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "CaseStudyType",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// CollectionName
// ---------------------------------------------------------------------------

/// Named content collection backed by one static source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CollectionName {
    Profile,
    Experiences,
    Skills,
    Projects,
    CaseStudies,
    Designs,
}

impl CollectionName {
    pub const ALL: [Self; 6] = [
        Self::Profile,
        Self::Experiences,
        Self::Skills,
        Self::Projects,
        Self::CaseStudies,
        Self::Designs,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Experiences => "experiences",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::CaseStudies => "case_studies",
            Self::Designs => "designs",
        }
    }

    /// File name of the backing source inside the content directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Profile => "profile.json",
            Self::Experiences => "experiences.json",
            Self::Skills => "skills.json",
            Self::Projects => "projects.json",
            Self::CaseStudies => "case-studies.json",
            Self::Designs => "designs.json",
        }
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "CollectionName",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(experience_work, ExperienceType, ExperienceType::Work, "WORK");
    test_serde_roundtrip!(
        skill_soft_skills,
        SkillCategory,
        SkillCategory::SoftSkills,
        "SOFT_SKILLS"
    );
    test_serde_roundtrip!(project_web_app, ProjectType, ProjectType::WebApp, "WEB_APP");
    test_serde_roundtrip!(case_study_ui_ux, CaseStudyType, CaseStudyType::UiUx, "UI_UX");
    test_serde_roundtrip!(
        collection_case_studies,
        CollectionName,
        CollectionName::CaseStudies,
        "case_studies"
    );

    #[test]
    fn serde_is_strict_about_spelling() {
        assert!(serde_json::from_str::<ProjectType>("\"web-app\"").is_err());
        assert!(serde_json::from_str::<SkillCategory>("\"frontend\"").is_err());
    }

    #[test]
    fn from_str_is_lenient_about_case_and_separators() {
        assert_eq!("mobile-app".parse::<ProjectType>().unwrap(), ProjectType::MobileApp);
        assert_eq!(" Web_Design ".parse::<CaseStudyType>().unwrap(), CaseStudyType::WebDesign);
        assert_eq!("frontend".parse::<SkillCategory>().unwrap(), SkillCategory::Frontend);
        assert_eq!("case-studies".parse::<CollectionName>().unwrap(), CollectionName::CaseStudies);
    }

    #[test]
    fn from_str_rejects_unknown_values() {
        let err = "GAME".parse::<ProjectType>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownVariant { kind: "ProjectType", .. }));
        assert!("all".parse::<ExperienceType>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", ExperienceType::Volunteer), "VOLUNTEER");
        assert_eq!(format!("{}", SkillCategory::Tools), "TOOLS");
        assert_eq!(format!("{}", ProjectType::Library), "LIBRARY");
        assert_eq!(format!("{}", CaseStudyType::Branding), "BRANDING");
        assert_eq!(format!("{}", CollectionName::Designs), "designs");
    }

    #[test]
    fn every_collection_has_a_json_file() {
        for name in CollectionName::ALL {
            assert!(name.file_name().ends_with(".json"), "{name}");
        }
    }
}
