use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A headline number shown on a project or case study ("Conversion", "+32%").
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Prose or a bullet list. Case studies were written both ways.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl TextOrList {
    /// Iterate the entries: one for `Text`, each item for `List`.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::Text(text) => std::slice::from_ref(text),
            Self::List(items) => items,
        };
        slice.iter().map(String::as_str)
    }

    /// First entry, used as a one-line teaser.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.entries().next()
    }
}

impl Default for TextOrList {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_or_list_accepts_both_shapes() {
        let text: TextOrList = serde_json::from_str("\"Checkout was slow\"").unwrap();
        assert_eq!(text.entries().collect::<Vec<_>>(), ["Checkout was slow"]);

        let list: TextOrList = serde_json::from_str("[\"a\", \"b\"]").unwrap();
        assert_eq!(list.entries().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(list.first(), Some("a"));
    }

    #[test]
    fn empty_list_has_no_teaser() {
        assert_eq!(TextOrList::default().first(), None);
    }
}
