//! Content invariants the JSON Schema cannot express.
//!
//! Each check returns the first violation as a human-readable reason; the
//! store wraps it in `ContentLoadError::Invalid` with the collection name.

use std::collections::HashSet;

use folio_core::entities::{Experience, Skill};

/// Every record's key must be unique within its collection.
pub fn unique<'a, T>(
    items: &'a [T],
    field: &str,
    key: impl Fn(&'a T) -> &'a str,
) -> Result<(), String> {
    let mut seen = HashSet::new();
    for item in items {
        let value = key(item);
        if !seen.insert(value) {
            return Err(format!("duplicate {field} '{value}'"));
        }
    }
    Ok(())
}

/// A slug is URL-safe when it is non-empty ASCII alphanumerics, `-` and `_`.
#[must_use]
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Slugs must be unique and URL-safe.
pub fn slugs<'a, T>(items: &'a [T], slug: impl Fn(&'a T) -> &'a str) -> Result<(), String> {
    if let Some(bad) = items.iter().map(&slug).find(|s| !is_url_safe(s)) {
        return Err(format!("slug '{bad}' is not URL-safe"));
    }
    unique(items, "slug", slug)
}

pub fn skills(skills: &[Skill]) -> Result<(), String> {
    unique(skills, "id", |s| s.id.as_str())?;
    if let Some(skill) = skills.iter().find(|s| s.proficiency > 100) {
        return Err(format!(
            "skill '{}' has proficiency {} (max 100)",
            skill.id, skill.proficiency
        ));
    }
    Ok(())
}

/// `current` implies no end date; an end date is never before the start date.
pub fn experiences(experiences: &[Experience]) -> Result<(), String> {
    unique(experiences, "id", |e| e.id.as_str())?;
    for exp in experiences {
        match &exp.end_date {
            Some(end) if exp.current => {
                return Err(format!(
                    "experience '{}' is current but has end date {end}",
                    exp.id
                ));
            }
            Some(end) if end.date() < exp.start_date.date() => {
                return Err(format!(
                    "experience '{}' ends ({end}) before it starts ({})",
                    exp.id, exp.start_date
                ));
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use folio_core::dates::ContentDate;
    use folio_core::enums::{ExperienceType, SkillCategory};
    use rstest::rstest;

    use super::*;

    fn skill(id: &str, proficiency: u8) -> Skill {
        Skill {
            id: id.into(),
            name: "Rust".into(),
            category: SkillCategory::Backend,
            proficiency,
            years_of_experience: 2,
            icon: None,
            project_count: None,
        }
    }

    fn experience(id: &str, start: &str, end: Option<&str>, current: bool) -> Experience {
        Experience {
            id: id.into(),
            company: "Acme".into(),
            role: "Engineer".into(),
            kind: ExperienceType::Work,
            start_date: ContentDate::parse(start).unwrap(),
            end_date: end.map(|e| ContentDate::parse(e).unwrap()),
            current,
            description: String::new(),
            responsibilities: vec![],
            achievements: vec![],
            technologies: vec![],
            logo: None,
            location: "Remote".into(),
        }
    }

    #[rstest]
    #[case("booking-redesign", true)]
    #[case("ledger_cli2", true)]
    #[case("", false)]
    #[case("has space", false)]
    #[case("über", false)]
    #[case("a/b", false)]
    fn url_safe_slugs(#[case] slug: &str, #[case] expected: bool) {
        assert_eq!(is_url_safe(slug), expected);
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let err = skills(&[skill("s1", 50), skill("s1", 60)]).unwrap_err();
        assert_eq!(err, "duplicate id 's1'");
    }

    #[test]
    fn proficiency_above_100_is_rejected() {
        assert!(skills(&[skill("s1", 100)]).is_ok());
        assert!(skills(&[skill("s1", 101)]).is_err());
    }

    #[test]
    fn duplicate_slugs_are_reported() {
        let items = ["a", "b", "a"];
        assert_eq!(slugs(&items, |s| *s).unwrap_err(), "duplicate slug 'a'");
    }

    #[rstest]
    #[case("2020-01", None, true, true)]
    #[case("2020-01", Some("2021-06"), false, true)]
    #[case("2020-01", Some("2020-01"), false, true)]
    #[case("2020-01", Some("2021-06"), true, false)]
    #[case("2021-06", Some("2020-01"), false, false)]
    fn experience_date_invariants(
        #[case] start: &str,
        #[case] end: Option<&str>,
        #[case] current: bool,
        #[case] ok: bool,
    ) {
        let result = experiences(&[experience("e1", start, end, current)]);
        assert_eq!(result.is_ok(), ok, "{result:?}");
    }
}
