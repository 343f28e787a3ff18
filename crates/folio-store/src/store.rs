//! The content store: one load-once slot per collection.
//!
//! Loading a collection runs the full boundary pipeline before anything is
//! cached:
//! 1. read the raw text from the [`ContentSource`]
//! 2. parse it as JSON
//! 3. validate it against the collection's generated JSON Schema
//! 4. deserialize into the entity type
//! 5. check the invariants the schema cannot express (see `validate`)
//!
//! After the first successful load every caller shares the same `Arc`.

use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use folio_core::entities::{CaseStudy, Design, Experience, Profile, Project, Skill};
use folio_core::enums::CollectionName;
use folio_schema::SchemaRegistry;

use crate::error::ContentLoadError;
use crate::slot::Slot;
use crate::source::{ContentSource, FsSource};
use crate::validate;

/// An entity type stored as an ordered list in one collection.
pub trait Collection: DeserializeOwned + Send + Sync + 'static {
    const NAME: CollectionName;

    /// The store's cache slot for this collection.
    fn slot(store: &ContentStore) -> &Slot<Vec<Self>>;

    /// Invariants beyond the JSON Schema. Returns the first violation.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when a record breaks an invariant.
    fn check(items: &[Self]) -> Result<(), String>;
}

impl Collection for Experience {
    const NAME: CollectionName = CollectionName::Experiences;

    fn slot(store: &ContentStore) -> &Slot<Vec<Self>> {
        &store.experiences
    }

    fn check(items: &[Self]) -> Result<(), String> {
        validate::experiences(items)
    }
}

impl Collection for Skill {
    const NAME: CollectionName = CollectionName::Skills;

    fn slot(store: &ContentStore) -> &Slot<Vec<Self>> {
        &store.skills
    }

    fn check(items: &[Self]) -> Result<(), String> {
        validate::skills(items)
    }
}

impl Collection for Project {
    const NAME: CollectionName = CollectionName::Projects;

    fn slot(store: &ContentStore) -> &Slot<Vec<Self>> {
        &store.projects
    }

    fn check(items: &[Self]) -> Result<(), String> {
        validate::unique(items, "id", |p| p.id.as_str())?;
        validate::slugs(items, |p| p.slug.as_str())
    }
}

impl Collection for CaseStudy {
    const NAME: CollectionName = CollectionName::CaseStudies;

    fn slot(store: &ContentStore) -> &Slot<Vec<Self>> {
        &store.case_studies
    }

    fn check(items: &[Self]) -> Result<(), String> {
        validate::unique(items, "id", |c| c.id.as_str())?;
        validate::slugs(items, |c| c.slug.as_str())
    }
}

impl Collection for Design {
    const NAME: CollectionName = CollectionName::Designs;

    fn slot(store: &ContentStore) -> &Slot<Vec<Self>> {
        &store.designs
    }

    fn check(items: &[Self]) -> Result<(), String> {
        validate::unique(items, "id", |d| d.id.as_str())
    }
}

// ---------------------------------------------------------------------------
// ContentStore
// ---------------------------------------------------------------------------

/// Read-only access to every content collection, loaded at most once each.
pub struct ContentStore {
    source: Box<dyn ContentSource>,
    schemas: SchemaRegistry,
    profile: Slot<Profile>,
    experiences: Slot<Vec<Experience>>,
    skills: Slot<Vec<Skill>>,
    projects: Slot<Vec<Project>>,
    case_studies: Slot<Vec<CaseStudy>>,
    designs: Slot<Vec<Design>>,
}

impl ContentStore {
    #[must_use]
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            schemas: SchemaRegistry::new(),
            profile: Slot::new(),
            experiences: Slot::new(),
            skills: Slot::new(),
            projects: Slot::new(),
            case_studies: Slot::new(),
            designs: Slot::new(),
        }
    }

    /// Store backed by the JSON files of a content directory.
    #[must_use]
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self::new(FsSource::new(dir))
    }

    #[must_use]
    pub fn source(&self) -> &dyn ContentSource {
        self.source.as_ref()
    }

    /// Read, validate, and parse a collection straight from its source.
    ///
    /// Records come back in source order. Nothing is cached; use
    /// [`get_all`](Self::get_all) for the memoized sequence.
    ///
    /// # Errors
    ///
    /// Returns `ContentLoadError` when the source is missing, unreadable,
    /// malformed, fails schema validation, or breaks an invariant.
    pub fn load<T: Collection>(&self) -> Result<Vec<T>, ContentLoadError> {
        let items: Vec<T> = self.read_validated(T::NAME)?;
        T::check(&items).map_err(|reason| ContentLoadError::Invalid {
            collection: T::NAME,
            reason,
        })?;
        tracing::debug!(
            collection = %T::NAME,
            records = items.len(),
            "loaded content collection"
        );
        Ok(items)
    }

    /// The collection's records in source order. Loads on first access only.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load). A failed load is not cached.
    pub fn get_all<T: Collection>(&self) -> Result<Arc<Vec<T>>, ContentLoadError> {
        T::slot(self).get_or_try_load(|| self.load::<T>())
    }

    /// The singleton profile. Loads on first access only.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn profile(&self) -> Result<Arc<Profile>, ContentLoadError> {
        self.profile.get_or_try_load(|| {
            let profile: Profile = self.read_validated(CollectionName::Profile)?;
            tracing::debug!(collection = %CollectionName::Profile, "loaded content collection");
            Ok(profile)
        })
    }

    /// How many times `collection` has been loaded through the cache.
    #[must_use]
    pub fn load_count(&self, collection: CollectionName) -> usize {
        match collection {
            CollectionName::Profile => self.profile.load_count(),
            CollectionName::Experiences => self.experiences.load_count(),
            CollectionName::Skills => self.skills.load_count(),
            CollectionName::Projects => self.projects.load_count(),
            CollectionName::CaseStudies => self.case_studies.load_count(),
            CollectionName::Designs => self.designs.load_count(),
        }
    }

    /// Load every collection and return them as one immutable snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first collection's `ContentLoadError`; there is no partial
    /// snapshot.
    pub fn snapshot(&self) -> Result<Snapshot, ContentLoadError> {
        Ok(Snapshot {
            profile: self.profile()?,
            experiences: self.get_all()?,
            skills: self.get_all()?,
            projects: self.get_all()?,
            case_studies: self.get_all()?,
            designs: self.get_all()?,
        })
    }

    fn read_validated<D: DeserializeOwned>(
        &self,
        collection: CollectionName,
    ) -> Result<D, ContentLoadError> {
        let text = self.source.read(collection)?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|source| ContentLoadError::Malformed { collection, source })?;
        self.schemas
            .validate_collection(collection, &value)
            .map_err(|e| ContentLoadError::from_schema(collection, e))?;
        serde_json::from_value(value)
            .map_err(|source| ContentLoadError::Malformed { collection, source })
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Every collection, fully loaded. Cloning shares the underlying data.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub profile: Arc<Profile>,
    pub experiences: Arc<Vec<Experience>>,
    pub skills: Arc<Vec<Skill>>,
    pub projects: Arc<Vec<Project>>,
    pub case_studies: Arc<Vec<CaseStudy>>,
    pub designs: Arc<Vec<Design>>,
}

impl Snapshot {
    /// Record count per collection, in [`CollectionName::ALL`] order.
    #[must_use]
    pub fn counts(&self) -> Vec<(CollectionName, usize)> {
        CollectionName::ALL
            .into_iter()
            .map(|name| {
                let count = match name {
                    CollectionName::Profile => 1,
                    CollectionName::Experiences => self.experiences.len(),
                    CollectionName::Skills => self.skills.len(),
                    CollectionName::Projects => self.projects.len(),
                    CollectionName::CaseStudies => self.case_studies.len(),
                    CollectionName::Designs => self.designs.len(),
                };
                (name, count)
            })
            .collect()
    }
}
