//! Predicate filters over content entities.
//!
//! Three predicates, each a pure function of one entity and one argument:
//! type equality, featured equality, and keyword search. [`Criteria`] combines
//! them with logical AND; an unset predicate matches everything.

use std::str::FromStr;

use folio_core::entities::{CaseStudy, Design, Experience, Project, Skill};
use folio_core::enums::{CaseStudyType, ExperienceType, ProjectType, SkillCategory};

/// What the filters need to know about an entity.
pub trait Filterable {
    /// Classification enum the type filter compares against.
    type Kind: Copy + PartialEq;

    /// `None` for entities without a classification.
    fn kind(&self) -> Option<Self::Kind>;

    /// Entities without a featured flag are never featured.
    fn is_featured(&self) -> bool {
        false
    }

    /// Text fields the keyword filter searches.
    fn search_fields(&self) -> Vec<&str>;
}

/// Classification of entities that have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unclassified {}

impl Filterable for Project {
    type Kind = ProjectType;

    fn kind(&self) -> Option<ProjectType> {
        Some(self.kind)
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.technologies.iter().map(String::as_str));
        fields
    }
}

impl Filterable for CaseStudy {
    type Kind = CaseStudyType;

    fn kind(&self) -> Option<CaseStudyType> {
        Some(self.kind)
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.client.as_str()];
        fields.extend(self.tools.iter().map(String::as_str));
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Filterable for Experience {
    type Kind = ExperienceType;

    fn kind(&self) -> Option<ExperienceType> {
        Some(self.kind)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.company.as_str(),
            self.role.as_str(),
            self.description.as_str(),
        ];
        fields.extend(self.technologies.iter().map(String::as_str));
        fields
    }
}

impl Filterable for Skill {
    type Kind = SkillCategory;

    fn kind(&self) -> Option<SkillCategory> {
        Some(self.category)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Filterable for Design {
    type Kind = Unclassified;

    fn kind(&self) -> Option<Unclassified> {
        None
    }

    fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.category.as_deref());
        fields
    }
}

// ---------------------------------------------------------------------------
// Type filter
// ---------------------------------------------------------------------------

/// A parsed type argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter<K> {
    /// No argument, or the `all` sentinel.
    Any,
    Only(K),
    /// A value that names no variant. Matches nothing.
    Unrecognized(String),
}

impl<K> Default for TypeFilter<K> {
    fn default() -> Self {
        Self::Any
    }
}

impl<K: FromStr> TypeFilter<K> {
    /// Parse a user-supplied type argument. Blank and `all` (any case) mean
    /// no filter; variant names are matched leniently (`web-app`, `Web App`).
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None => Self::Any,
            Some(v) if v.is_empty() || v.eq_ignore_ascii_case("all") => Self::Any,
            Some(v) => v
                .parse()
                .map_or_else(|_| Self::Unrecognized(v.to_string()), Self::Only),
        }
    }
}

/// Exact enum equality; [`TypeFilter::Any`] matches everything.
pub fn matches_type<T: Filterable>(entity: &T, filter: &TypeFilter<T::Kind>) -> bool {
    match filter {
        TypeFilter::Any => true,
        TypeFilter::Only(kind) => entity.kind() == Some(*kind),
        TypeFilter::Unrecognized(_) => false,
    }
}

/// Exact boolean equality when `featured` is given.
pub fn matches_featured<T: Filterable>(entity: &T, featured: Option<bool>) -> bool {
    featured.is_none_or(|wanted| entity.is_featured() == wanted)
}

/// Case-insensitive substring match against the entity's search fields. A
/// blank query matches everything.
pub fn matches_keyword<T: Filterable>(entity: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || entity
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// Type + featured + keyword, combined with logical AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria<K> {
    pub kind: TypeFilter<K>,
    pub featured: Option<bool>,
    pub keyword: Option<String>,
}

impl<K> Default for Criteria<K> {
    fn default() -> Self {
        Self {
            kind: TypeFilter::Any,
            featured: None,
            keyword: None,
        }
    }
}

impl<K: Copy + PartialEq> Criteria<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(mut self, kind: TypeFilter<K>) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub const fn with_featured(mut self, featured: Option<bool>) -> Self {
        self.featured = featured;
        self
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// True when no predicate would exclude anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, TypeFilter::Any)
            && self.featured.is_none()
            && self.keyword.as_deref().is_none_or(|k| k.trim().is_empty())
    }

    pub fn matches<T: Filterable<Kind = K>>(&self, entity: &T) -> bool {
        matches_type(entity, &self.kind)
            && matches_featured(entity, self.featured)
            && self
                .keyword
                .as_deref()
                .is_none_or(|q| matches_keyword(entity, q))
    }

    /// The matching entities, in input order.
    pub fn apply<'a, T: Filterable<Kind = K>>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}
