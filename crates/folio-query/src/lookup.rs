//! Lookup by id or slug, detail-page neighbors, gallery cycling, and paging.

use serde::Serialize;

use folio_core::entities::{CaseStudy, Design, Experience, Project, Skill};

/// Entities with a unique id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Entities with a unique, URL-safe slug.
pub trait Slugged {
    fn slug(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_identified!(Experience, Skill, Project, CaseStudy, Design);

impl Slugged for Project {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for CaseStudy {
    fn slug(&self) -> &str {
        &self.slug
    }
}

#[must_use]
pub fn find_by_id<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

#[must_use]
pub fn find_by_slug<'a, T: Slugged>(items: &'a [T], slug: &str) -> Option<&'a T> {
    items.iter().find(|item| item.slug() == slug)
}

/// The items either side of one item, in collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbors<'a, T> {
    pub previous: Option<&'a T>,
    pub next: Option<&'a T>,
}

/// Previous and next items around `slug`. No wrap-around: the first item has
/// no previous and the last has no next. `None` when `slug` is unknown.
#[must_use]
pub fn neighbors<'a, T: Slugged>(items: &'a [T], slug: &str) -> Option<Neighbors<'a, T>> {
    let index = items.iter().position(|item| item.slug() == slug)?;
    Some(Neighbors {
        previous: index.checked_sub(1).and_then(|i| items.get(i)),
        next: items.get(index + 1),
    })
}

/// Step `index` by `step` around a gallery of `len` items, wrapping at both
/// ends. `None` for an empty gallery.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn cycle(len: usize, index: usize, step: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let start = (index % len) as isize;
    Some((start + step).rem_euclid(len as isize) as usize)
}

/// The `limit`-sized window starting at `offset`. `None` means no limit.
#[must_use]
pub fn paginate<T>(items: &[T], limit: Option<usize>, offset: usize) -> &[T] {
    let start = offset.min(items.len());
    let end = limit.map_or(items.len(), |l| start.saturating_add(l).min(items.len()));
    &items[start..end]
}
