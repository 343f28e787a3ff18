use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A tag derived from project content. Never stored.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// 1-based position in first-seen order.
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Number of items referencing the tag.
    pub count: u32,
}

impl Tag {
    /// Build the tag at 0-based `position` in first-seen order.
    #[must_use]
    pub fn new(position: usize, name: &str, count: u32) -> Self {
        Self {
            id: (position + 1).to_string(),
            name: name.to_string(),
            slug: slugify(name),
            count,
        }
    }
}

/// Lower-case, then replace every run of whitespace with a single `-`.
/// Leading and trailing runs are kept, so `" padded "` slugs to `-padded-`.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(ch);
            in_space = false;
        }
    }
    slug
}
