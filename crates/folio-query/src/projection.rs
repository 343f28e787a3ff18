//! View-model projection: groupings and cards built from entity lists.

use serde::Serialize;

use folio_core::entities::{CaseStudy, Design, Experience, Project, Skill};
use folio_core::enums::{ExperienceType, SkillCategory};

// ---------------------------------------------------------------------------
// Skill groups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup<'a> {
    pub category: SkillCategory,
    pub label: &'static str,
    pub skills: Vec<&'a Skill>,
}

/// Skills grouped by category. Groups appear in the order their category is
/// first seen; skills keep input order within a group.
#[must_use]
pub fn group_by_category(skills: &[Skill]) -> Vec<SkillGroup<'_>> {
    let mut groups: Vec<SkillGroup<'_>> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: skill.category,
                label: skill.category.label(),
                skills: vec![skill],
            }),
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// Experience sections
// ---------------------------------------------------------------------------

/// Fixed sections of the career timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Work,
    Education,
    Volunteer,
}

impl SectionKey {
    pub const ALL: [Self; 3] = [Self::Work, Self::Education, Self::Volunteer];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Education => "education",
            Self::Volunteer => "volunteer",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Work => "Work Experience",
            Self::Education => "Education & Research",
            Self::Volunteer => "Volunteer Work",
        }
    }

    /// Experience types collected into this section, in display order.
    #[must_use]
    pub const fn members(self) -> &'static [ExperienceType] {
        match self {
            Self::Work => &[ExperienceType::Work],
            Self::Education => &[ExperienceType::Education, ExperienceType::Research],
            Self::Volunteer => &[ExperienceType::Volunteer],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<'a> {
    pub key: SectionKey,
    pub title: &'static str,
    pub experiences: Vec<&'a Experience>,
}

/// Experiences split into the fixed `work`, `education`, `volunteer`
/// sections. The education section lists EDUCATION entries before RESEARCH
/// entries; each type keeps input order. Empty sections are left out.
#[must_use]
pub fn build_filterable_sections(experiences: &[Experience]) -> Vec<Section<'_>> {
    SectionKey::ALL
        .into_iter()
        .filter_map(|key| {
            let members: Vec<&Experience> = key
                .members()
                .iter()
                .flat_map(|kind| experiences.iter().filter(move |e| e.kind == *kind))
                .collect();
            (!members.is_empty()).then(|| Section {
                key,
                title: key.title(),
                experiences: members,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

/// One card in a mixed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub enum ContentCard<'a> {
    Project(&'a Project),
    CaseStudy(&'a CaseStudy),
    Design(&'a Design),
    Experience(&'a Experience),
    Skill(&'a Skill),
}

/// What every card shows, whatever it wraps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSummary {
    pub title: String,
    pub subtitle: String,
    pub badges: Vec<String>,
    pub link: Option<String>,
}

const FEATURED: &str = "Featured";

impl ContentCard<'_> {
    #[must_use]
    pub fn summary(&self) -> CardSummary {
        match self {
            Self::Project(p) => CardSummary {
                title: p.title.clone(),
                subtitle: p.description.clone(),
                badges: badges(p.kind.label(), p.featured),
                link: p.demo_url.clone().or_else(|| p.github_url.clone()),
            },
            Self::CaseStudy(c) => CardSummary {
                title: c.title.clone(),
                subtitle: c.client.clone(),
                badges: badges(c.kind.label(), c.featured),
                link: Some(format!("/case-studies/{}", c.slug)),
            },
            Self::Design(d) => CardSummary {
                title: d.title.clone(),
                subtitle: d.description.clone(),
                badges: d
                    .category
                    .iter()
                    .cloned()
                    .chain(d.featured.unwrap_or(false).then(|| FEATURED.to_string()))
                    .collect(),
                link: d
                    .live_site_url
                    .as_ref()
                    .or(d.app_store_url.as_ref())
                    .or(d.google_play_url.as_ref())
                    .cloned(),
            },
            Self::Experience(e) => CardSummary {
                title: e.role.clone(),
                subtitle: e.company.clone(),
                badges: std::iter::once(e.kind.label().to_string())
                    .chain(e.current.then(|| "Current".to_string()))
                    .collect(),
                link: None,
            },
            Self::Skill(s) => CardSummary {
                title: s.name.clone(),
                subtitle: format!("{} years", s.years_of_experience),
                badges: vec![s.category.label().to_string(), format!("{}%", s.proficiency)],
                link: None,
            },
        }
    }
}

fn badges(label: &str, featured: bool) -> Vec<String> {
    let mut badges = vec![label.to_string()];
    if featured {
        badges.push(FEATURED.to_string());
    }
    badges
}

#[cfg(test)]
mod tests {
    use folio_core::dates::ContentDate;
    use folio_core::entities::TextOrList;
    use folio_core::enums::CaseStudyType;
    use pretty_assertions::assert_eq;

    use super::*;

    fn skill(id: &str, category: SkillCategory) -> Skill {
        Skill {
            id: id.into(),
            name: id.to_uppercase(),
            category,
            proficiency: 70,
            years_of_experience: 4,
            icon: None,
            project_count: None,
        }
    }

    fn experience(id: &str, kind: ExperienceType) -> Experience {
        Experience {
            id: id.into(),
            company: "Acme".into(),
            role: "Engineer".into(),
            kind,
            start_date: ContentDate::parse("2020").unwrap(),
            end_date: None,
            current: true,
            description: String::new(),
            responsibilities: vec![],
            achievements: vec![],
            technologies: vec![],
            logo: None,
            location: "Remote".into(),
        }
    }

    #[test]
    fn groups_in_first_seen_category_order() {
        let skills = [
            skill("ts", SkillCategory::Frontend),
            skill("figma", SkillCategory::Design),
            skill("react", SkillCategory::Frontend),
        ];
        let groups = group_by_category(&skills);
        let shape: Vec<(SkillCategory, Vec<&str>)> = groups
            .iter()
            .map(|g| (g.category, g.skills.iter().map(|s| s.id.as_str()).collect()))
            .collect();
        assert_eq!(
            shape,
            [
                (SkillCategory::Frontend, vec!["ts", "react"]),
                (SkillCategory::Design, vec!["figma"]),
            ]
        );
        assert_eq!(groups[1].label, "Design");
    }

    #[test]
    fn sections_use_fixed_order_and_skip_empty() {
        let experiences = [
            experience("r1", ExperienceType::Research),
            experience("w1", ExperienceType::Work),
            experience("e1", ExperienceType::Education),
            experience("w2", ExperienceType::Work),
        ];
        let sections = build_filterable_sections(&experiences);
        let shape: Vec<(&str, Vec<&str>)> = sections
            .iter()
            .map(|s| {
                (
                    s.key.as_str(),
                    s.experiences.iter().map(|e| e.id.as_str()).collect(),
                )
            })
            .collect();
        assert_eq!(
            shape,
            [("work", vec!["w1", "w2"]), ("education", vec!["e1", "r1"])]
        );
    }

    #[test]
    fn no_experiences_no_sections() {
        assert!(build_filterable_sections(&[]).is_empty());
    }

    #[test]
    fn case_study_card_links_to_detail_page() {
        let study = CaseStudy {
            id: "cs-1".into(),
            slug: "booking-redesign".into(),
            title: "Booking".into(),
            client: "Northwind".into(),
            duration: "4 months".into(),
            role: None,
            kind: CaseStudyType::UiUx,
            hero_image: "/hero.png".into(),
            images: vec![],
            problem_statement: TextOrList::default(),
            solutions: TextOrList::default(),
            tools: vec![],
            results: vec![],
            metrics: None,
            content: None,
            tags: vec![],
            featured: true,
            published_at: ContentDate::parse("2024-02-01").unwrap(),
            app_store_url: None,
            google_play_url: None,
            live_site_url: None,
        };
        let summary = ContentCard::CaseStudy(&study).summary();
        assert_eq!(
            summary,
            CardSummary {
                title: "Booking".into(),
                subtitle: "Northwind".into(),
                badges: vec!["UI/UX Design".into(), "Featured".into()],
                link: Some("/case-studies/booking-redesign".into()),
            }
        );
    }

    #[test]
    fn skill_and_experience_cards() {
        let s = skill("rust", SkillCategory::Backend);
        let e = experience("w1", ExperienceType::Work);
        assert_eq!(ContentCard::Skill(&s).summary().badges, ["Backend", "70%"]);
        let exp = ContentCard::Experience(&e).summary();
        assert_eq!(exp.title, "Engineer");
        assert_eq!(exp.badges, ["Work", "Current"]);
        assert_eq!(exp.link, None);
    }
}
