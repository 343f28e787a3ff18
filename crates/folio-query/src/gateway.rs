//! Typed read operations over a content snapshot.
//!
//! Each method is a pure function of the snapshot and its arguments, so the
//! same call against the same snapshot always returns the same result. Lookups
//! return `None` for unknown keys; an unrecognized type argument yields an
//! empty list rather than an error.

use folio_core::entities::{CaseStudy, Design, Experience, Profile, Project, Skill, Tag};
use folio_core::enums::{CaseStudyType, ExperienceType, ProjectType, SkillCategory};
use folio_store::Snapshot;

use crate::aggregate::aggregate_tag_counts;
use crate::filter::{Criteria, Unclassified};
use crate::lookup::{Neighbors, find_by_id, find_by_slug, neighbors};
use crate::sort::{sort_by_date_descending, sort_chronological};

/// Query entry point for one immutable snapshot.
#[derive(Debug, Clone)]
pub struct Gateway {
    snapshot: Snapshot,
}

impl Gateway {
    #[must_use]
    pub const fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.snapshot.profile
    }

    /// Experiences in source order.
    #[must_use]
    pub fn experiences(&self, criteria: &Criteria<ExperienceType>) -> Vec<&Experience> {
        criteria.apply(&self.snapshot.experiences)
    }

    /// Experiences oldest `startDate` first, for timeline displays.
    #[must_use]
    pub fn timeline(&self, criteria: &Criteria<ExperienceType>) -> Vec<&Experience> {
        let mut experiences = criteria.apply(&self.snapshot.experiences);
        sort_chronological(&mut experiences, |e| &e.start_date);
        experiences
    }

    #[must_use]
    pub fn experience(&self, id: &str) -> Option<&Experience> {
        find_by_id(&self.snapshot.experiences, id)
    }

    /// Skills in source order.
    #[must_use]
    pub fn skills(&self, criteria: &Criteria<SkillCategory>) -> Vec<&Skill> {
        criteria.apply(&self.snapshot.skills)
    }

    #[must_use]
    pub fn skill(&self, id: &str) -> Option<&Skill> {
        find_by_id(&self.snapshot.skills, id)
    }

    /// Projects, newest `publishedAt` first.
    #[must_use]
    pub fn projects(&self, criteria: &Criteria<ProjectType>) -> Vec<&Project> {
        let mut projects = criteria.apply(&self.snapshot.projects);
        sort_by_date_descending(&mut projects, |p| &p.published_at);
        projects
    }

    #[must_use]
    pub fn project(&self, slug: &str) -> Option<&Project> {
        find_by_slug(&self.snapshot.projects, slug)
    }

    /// Case studies in source order, which is also navigation order.
    #[must_use]
    pub fn case_studies(&self, criteria: &Criteria<CaseStudyType>) -> Vec<&CaseStudy> {
        criteria.apply(&self.snapshot.case_studies)
    }

    #[must_use]
    pub fn case_study(&self, slug: &str) -> Option<&CaseStudy> {
        find_by_slug(&self.snapshot.case_studies, slug)
    }

    /// Previous and next case study around `slug` for detail-page navigation.
    #[must_use]
    pub fn case_study_neighbors(&self, slug: &str) -> Option<Neighbors<'_, CaseStudy>> {
        neighbors(&self.snapshot.case_studies, slug)
    }

    /// Gallery designs in source order.
    #[must_use]
    pub fn designs(&self, criteria: &Criteria<Unclassified>) -> Vec<&Design> {
        criteria.apply(&self.snapshot.designs)
    }

    /// Tags derived from project tags, in first-seen order with 1-based ids.
    #[must_use]
    pub fn tags(&self) -> Vec<Tag> {
        aggregate_tag_counts(self.snapshot.projects.iter(), |p| p.tags.as_slice())
            .into_iter()
            .enumerate()
            .map(|(position, (name, count))| Tag::new(position, &name, count))
            .collect()
    }
}
