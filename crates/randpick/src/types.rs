use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_TITLE: &str = "Random Generation Results";

// ============================================================================
// Definition
// ============================================================================

/// A pick-list definition: named categories of items plus report settings.
///
/// # JSON shape
///
/// ```json
/// {
///   "title": "Tavern Generator",
///   "description": "Roll up a tavern for tonight's session",
///   "display_order": ["name", "patrons"],
///   "allow_regenerate": true,
///   "categories": {
///     "name": { "items": ["The Prancing Pony", "The Green Dragon"] },
///     "patrons": { "items": ["dwarf", "elf", "hobbit"], "pick_count": 2, "label": "Who's Here" }
///   }
/// }
/// ```
///
/// Every field is optional. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category names in report order. Categories not listed are not shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<Vec<String>>,
    #[serde(default = "default_allow_regenerate")]
    pub allow_regenerate: bool,
    #[serde(default)]
    pub categories: Categories,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_allow_regenerate() -> bool {
    true
}

impl Default for Definition {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: None,
            display_order: None,
            allow_regenerate: true,
            categories: Categories::default(),
        }
    }
}

impl Definition {
    /// Parse a definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a definition from any reader producing JSON.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// The heading shown for a category: its declared `label`, or the name
    /// with underscores turned into spaces and title-cased.
    pub fn label_for(&self, name: &str) -> String {
        self.categories
            .get(name)
            .and_then(|c| c.label.clone())
            .unwrap_or_else(|| default_label(name))
    }
}

/// `"magic_item"` becomes `"Magic Item"`.
///
/// Each run of cased letters starts uppercase and continues lowercase; any
/// other character (digits, punctuation, uncased scripts) starts a new run.
pub fn default_label(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;
    for ch in name.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_lowercase() || ch.is_uppercase() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

// ============================================================================
// Category
// ============================================================================

/// One named list of items to draw from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub items: Vec<Item>,
    /// How many distinct items to draw per cycle.
    #[serde(default = "default_pick_count")]
    pub pick_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn default_pick_count() -> i64 {
    1
}

impl Category {
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            pick_count: 1,
            label: None,
        }
    }

    pub fn with_pick_count(mut self, pick_count: i64) -> Self {
        self.pick_count = pick_count;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// `pick_count` clamped to `0..=items.len()`.
    pub fn effective_pick_count(&self) -> usize {
        let available = self.items.len();
        usize::try_from(self.pick_count)
            .map(|n| n.min(available))
            .unwrap_or(0)
    }
}

// ============================================================================
// Item
// ============================================================================

/// A single entry in a category.
///
/// Usually a string, but any JSON value is accepted. Strings display as
/// their text; everything else displays as compact JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(pub serde_json::Value);

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item(serde_json::Value::String(s.to_string()))
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item(serde_json::Value::String(s))
    }
}

impl From<serde_json::Value> for Item {
    fn from(v: serde_json::Value) -> Self {
        Item(v)
    }
}

// ============================================================================
// Named maps
// ============================================================================

/// Values keyed by category name, in insertion order.
///
/// Deserializing keeps the order of the source JSON; a repeated key keeps
/// its first position and takes the last value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedMap<V>(IndexMap<String, V>);

/// Categories of a [`Definition`], in source order.
pub type Categories = NamedMap<Category>;

/// One generation cycle's picks, keyed by category name in sampling order.
pub type Results = NamedMap<Pick>;

impl<V> Default for NamedMap<V> {
    fn default() -> Self {
        Self(IndexMap::new())
    }
}

impl<V> NamedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: V) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>, V> FromIterator<(S, V)> for NamedMap<V> {
    fn from_iter<T: IntoIterator<Item = (S, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(n, v)| (n.into(), v)).collect())
    }
}

// ============================================================================
// Results
// ============================================================================

/// What was drawn for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pick {
    /// Effective pick count of exactly one.
    One(Item),
    /// Distinct draws, in the order they were drawn.
    Many(Vec<Item>),
}

impl Pick {
    /// The drawn items as a slice, regardless of variant.
    pub fn items(&self) -> &[Item] {
        match self {
            Pick::One(item) => std::slice::from_ref(item),
            Pick::Many(items) => items,
        }
    }
}
