//! Counting and summary statistics over collections.

use std::collections::{HashMap, HashSet};
use std::iter::Sum;

use folio_core::entities::{CaseStudy, Skill};
use folio_core::responses::{CaseStudyStats, SkillStats};

/// Errors from aggregations that have no value on empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    #[error("cannot aggregate an empty collection")]
    Empty,
}

/// Each tag with the number of items referencing it, in first-seen order.
///
/// Tags match case-sensitively. An item listing a tag twice counts once.
pub fn aggregate_tag_counts<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    tags_of: impl Fn(&'a T) -> &'a [String],
) -> Vec<(String, u32)> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for item in items {
        let mut seen_here = HashSet::new();
        for tag in tags_of(item) {
            if !seen_here.insert(tag.as_str()) {
                continue;
            }
            match index.get(tag.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(tag.as_str(), counts.len());
                    counts.push((tag.clone(), 1));
                }
            }
        }
    }
    counts
}

/// Number of distinct values of a multi-valued field across all items.
pub fn aggregate_unique<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    values_of: impl Fn(&'a T) -> &'a [String],
) -> usize {
    items
        .into_iter()
        .flat_map(|item| values_of(item).iter().map(String::as_str))
        .collect::<HashSet<_>>()
        .len()
}

/// # Errors
///
/// Returns `AggregateError::Empty` when `items` is empty.
pub fn max_of<T, V: Ord>(items: &[T], field: impl Fn(&T) -> V) -> Result<V, AggregateError> {
    items.iter().map(field).max().ok_or(AggregateError::Empty)
}

/// # Errors
///
/// Returns `AggregateError::Empty` when `items` is empty.
pub fn min_of<T, V: Ord>(items: &[T], field: impl Fn(&T) -> V) -> Result<V, AggregateError> {
    items.iter().map(field).min().ok_or(AggregateError::Empty)
}

/// Sum of `field` over `items`; zero for empty input.
pub fn sum_of<T, V: Sum<V>>(items: &[T], field: impl Fn(&T) -> V) -> V {
    items.iter().map(field).sum()
}

#[allow(clippy::cast_possible_truncation)]
const fn count(n: usize) -> u32 {
    n as u32
}

/// Headline numbers for the skills page.
#[must_use]
pub fn skill_stats(skills: &[Skill]) -> SkillStats {
    SkillStats {
        total: count(skills.len()),
        max_years_of_experience: max_of(skills, |s| s.years_of_experience).ok(),
        total_projects: sum_of(skills, |s| s.project_count.unwrap_or(0)),
    }
}

/// Headline numbers for the design page.
#[must_use]
pub fn case_study_stats(case_studies: &[CaseStudy]) -> CaseStudyStats {
    CaseStudyStats {
        total: count(case_studies.len()),
        featured: count(case_studies.iter().filter(|c| c.featured).count()),
        distinct_tools: count(aggregate_unique(case_studies, |c| c.tools.as_slice())),
    }
}

#[cfg(test)]
mod tests {
    use folio_core::enums::SkillCategory;
    use pretty_assertions::assert_eq;

    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| (*t).to_string()).collect()
    }

    fn skill(years: u32, projects: Option<u32>) -> Skill {
        Skill {
            id: format!("s{years}"),
            name: "Skill".into(),
            category: SkillCategory::Tools,
            proficiency: 50,
            years_of_experience: years,
            icon: None,
            project_count: projects,
        }
    }

    #[test]
    fn tag_counts_in_first_seen_order() {
        let items = [tags(&["React", "UI"]), tags(&["UI", "Mobile"])];
        let counts = aggregate_tag_counts(&items, Vec::as_slice);
        assert_eq!(
            counts,
            [
                ("React".to_string(), 1),
                ("UI".to_string(), 2),
                ("Mobile".to_string(), 1)
            ]
        );
    }

    #[test]
    fn tag_counts_are_case_sensitive_and_per_item() {
        let items = [tags(&["ui", "UI", "UI"])];
        let counts = aggregate_tag_counts(&items, Vec::as_slice);
        assert_eq!(counts, [("ui".to_string(), 1), ("UI".to_string(), 1)]);
    }

    #[test]
    fn unique_counts_distinct_values() {
        let items = [tags(&["Figma", "Maze"]), tags(&["Figma", "Illustrator"])];
        assert_eq!(aggregate_unique(&items, Vec::as_slice), 3);
        assert_eq!(aggregate_unique(&[] as &[Vec<String>], Vec::as_slice), 0);
    }

    #[test]
    fn sum_of_empty_is_zero() {
        let empty: [Skill; 0] = [];
        assert_eq!(sum_of(&empty, |s| s.years_of_experience), 0);
    }

    #[test]
    fn max_and_min_of_empty_fail() {
        let empty: [Skill; 0] = [];
        assert_eq!(max_of(&empty, |s| s.years_of_experience), Err(AggregateError::Empty));
        assert_eq!(min_of(&empty, |s| s.years_of_experience), Err(AggregateError::Empty));
    }

    #[test]
    fn max_and_min_pick_extremes() {
        let skills = [skill(3, None), skill(8, None), skill(1, None)];
        assert_eq!(max_of(&skills, |s| s.years_of_experience), Ok(8));
        assert_eq!(min_of(&skills, |s| s.years_of_experience), Ok(1));
    }

    #[test]
    fn skill_stats_treat_missing_project_count_as_zero() {
        let stats = skill_stats(&[skill(3, Some(4)), skill(6, None), skill(2, Some(1))]);
        assert_eq!(
            stats,
            SkillStats {
                total: 3,
                max_years_of_experience: Some(6),
                total_projects: 5,
            }
        );
    }

    #[test]
    fn skill_stats_on_empty_have_no_maximum() {
        let stats = skill_stats(&[]);
        assert_eq!(stats.max_years_of_experience, None);
        assert_eq!(stats.total_projects, 0);
    }
}
