//! Translation catalog and path accessor
//!
//! A catalog is the per-language tree of templates and display strings,
//! loaded from one JSON document per language. Lookups walk the tree key by
//! key and return `None` as soon as a key is missing, so a rating/variant
//! pair that was never authored for a language simply resolves to nothing.
//!
//! # Example
//!
//! ```
//! use zeugnis_core::catalog::Catalog;
//!
//! let catalog = Catalog::from_json_str(
//!     "en",
//!     r#"{"form": {"introductionVariants": {"1": "{firstName} joined us."}}}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     catalog.template(&["form", "introductionVariants", "1"]),
//!     Some("{firstName} joined us.")
//! );
//! assert!(catalog.template(&["form", "introductionVariants", "7"]).is_none());
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{CoreError, Result};

/// Top-level key for form templates
pub const FORM: &str = "form";
/// Top-level key for preview strings
pub const PREVIEW: &str = "preview";

/// A node in the catalog tree
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogNode {
    /// A leaf string (template or display text)
    Template(String),
    /// A keyed sub-tree
    Map(BTreeMap<String, CatalogNode>),
    /// An ordered list (help texts and similar UI content)
    List(Vec<CatalogNode>),
}

impl CatalogNode {
    /// Build a node from parsed JSON
    ///
    /// Numbers and booleans become their JSON text. `null` has no node.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(CatalogNode::Template(s)),
            Value::Bool(b) => Some(CatalogNode::Template(b.to_string())),
            Value::Number(n) => Some(CatalogNode::Template(n.to_string())),
            Value::Array(items) => Some(CatalogNode::List(
                items.into_iter().filter_map(CatalogNode::from_value).collect(),
            )),
            Value::Object(map) => Some(CatalogNode::Map(
                map.into_iter()
                    .filter_map(|(k, v)| CatalogNode::from_value(v).map(|node| (k, node)))
                    .collect(),
            )),
        }
    }

    /// The string, if this node is a leaf
    pub fn as_template(&self) -> Option<&str> {
        match self {
            CatalogNode::Template(s) => Some(s),
            _ => None,
        }
    }

    /// The sub-tree, if this node is a map
    pub fn as_map(&self) -> Option<&BTreeMap<String, CatalogNode>> {
        match self {
            CatalogNode::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Child lookup by key; lists accept decimal indices
    pub fn child(&self, key: &str) -> Option<&CatalogNode> {
        match self {
            CatalogNode::Map(map) => map.get(key),
            CatalogNode::List(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            CatalogNode::Template(_) => None,
        }
    }
}

/// Walk `path` from `node`, stopping at the first missing key
pub fn resolve<'a, S: AsRef<str>>(node: &'a CatalogNode, path: &[S]) -> Option<&'a CatalogNode> {
    path.iter()
        .try_fold(node, |current, key| current.child(key.as_ref()))
}

/// The catalog for one language
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    language: String,
    root: CatalogNode,
}

impl Catalog {
    /// A catalog with no content, used before the first load completes
    pub fn empty(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            root: CatalogNode::Map(BTreeMap::new()),
        }
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(language: impl Into<String>, json: &str) -> Result<Self> {
        let language = language.into();
        let value: Value = serde_json::from_str(json).map_err(|source| CoreError::CatalogJson {
            language: language.clone(),
            source,
        })?;
        Self::from_value(language, value)
    }

    /// Build a catalog from parsed JSON; the root must be an object
    pub fn from_value(language: impl Into<String>, value: Value) -> Result<Self> {
        let language = language.into();
        match CatalogNode::from_value(value) {
            Some(root @ CatalogNode::Map(_)) => Ok(Self { language, root }),
            _ => Err(CoreError::CatalogShape(language)),
        }
    }

    /// Language code this catalog was loaded for
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Root node
    pub fn root(&self) -> &CatalogNode {
        &self.root
    }

    /// Resolve a path to any node
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Option<&CatalogNode> {
        resolve(&self.root, path)
    }

    /// Resolve a path to a leaf string
    pub fn template<S: AsRef<str>>(&self, path: &[S]) -> Option<&str> {
        self.resolve(path).and_then(CatalogNode::as_template)
    }

    /// Resolve a path to a sub-tree
    pub fn map<S: AsRef<str>>(&self, path: &[S]) -> Option<&BTreeMap<String, CatalogNode>> {
        self.resolve(path).and_then(CatalogNode::as_map)
    }

    /// Number of keys directly under `path` (0 when absent or not a map)
    pub fn count_keys<S: AsRef<str>>(&self, path: &[S]) -> usize {
        self.map(path).map_or(0, BTreeMap::len)
    }

    /// Seed text for the free-text duties field
    pub fn duties_default(&self) -> &str {
        self.template(&[FORM, "dutiesDefault"]).unwrap_or("")
    }

    /// Display string for a title key (`mr`, `ms`, `dr`)
    pub fn title_option(&self, key: &str) -> Option<&str> {
        self.template(&[FORM, "titleOptions", key])
    }

    /// Heading printed above the letter body
    pub fn letter_title(&self) -> &str {
        self.template(&[PREVIEW, "letterTitle"])
            .unwrap_or("Employment Reference Letter")
    }

    /// Message shown when exporting before a letter exists
    pub fn placeholder_message(&self) -> &str {
        self.template(&[PREVIEW, "placeholder"])
            .unwrap_or("Please generate the letter first")
    }

    /// Label prefix for variant choices
    pub fn variant_label(&self) -> &str {
        self.template(&[FORM, "labels", "variant"])
            .unwrap_or("Variant")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Catalog {
        Catalog::from_value(
            "de",
            json!({
                "form": {
                    "dutiesDefault": "• Kundenbetreuung",
                    "titleOptions": {"mr": "Herr", "ms": "Frau"},
                    "knowledgeVariants": {
                        "sehr-gut": {"1": "A", "2": "B", "3": "C"},
                        "gut": {"1": "D"}
                    },
                    "labels": {"variant": "Variante"}
                },
                "intro": {"howItWorks": ["Schritt 1", "Schritt 2"]},
                "version": 3,
                "draft": null
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_template() {
        let catalog = sample();
        assert_eq!(
            catalog.template(&["form", "knowledgeVariants", "gut", "1"]),
            Some("D")
        );
    }

    #[test]
    fn test_missing_intermediate_key_is_none() {
        let catalog = sample();
        assert!(catalog
            .resolve(&["form", "qualityVariants", "gut", "1"])
            .is_none());
        assert!(catalog
            .template(&["form", "knowledgeVariants", "mangelhaft", "1"])
            .is_none());
    }

    #[test]
    fn test_walking_past_a_leaf_is_none() {
        let catalog = sample();
        assert!(catalog
            .resolve(&["form", "dutiesDefault", "anything"])
            .is_none());
    }

    #[test]
    fn test_template_on_map_is_none() {
        let catalog = sample();
        assert!(catalog.template(&["form", "knowledgeVariants"]).is_none());
        assert!(catalog.map(&["form", "knowledgeVariants"]).is_some());
    }

    #[test]
    fn test_count_keys() {
        let catalog = sample();
        assert_eq!(catalog.count_keys(&["form", "knowledgeVariants", "sehr-gut"]), 3);
        assert_eq!(catalog.count_keys(&["form", "knowledgeVariants", "gut"]), 1);
        assert_eq!(catalog.count_keys(&["form", "knowledgeVariants", "ausreichend"]), 0);
        assert_eq!(catalog.count_keys(&["form", "dutiesDefault"]), 0);
    }

    #[test]
    fn test_lists_and_scalars() {
        let catalog = sample();
        assert_eq!(catalog.template(&["intro", "howItWorks", "1"]), Some("Schritt 2"));
        assert_eq!(catalog.template(&["version"]), Some("3"));
        assert!(catalog.resolve(&["draft"]).is_none());
    }

    #[test]
    fn test_convenience_accessors() {
        let catalog = sample();
        assert_eq!(catalog.duties_default(), "• Kundenbetreuung");
        assert_eq!(catalog.title_option("ms"), Some("Frau"));
        assert_eq!(catalog.title_option("dr"), None);
        assert_eq!(catalog.variant_label(), "Variante");
        assert_eq!(catalog.letter_title(), "Employment Reference Letter");
        assert_eq!(catalog.placeholder_message(), "Please generate the letter first");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty("en");
        assert_eq!(catalog.language(), "en");
        assert_eq!(catalog.duties_default(), "");
        assert!(catalog.resolve(&["form"]).is_none());
    }

    #[test]
    fn test_malformed_json() {
        let err = Catalog::from_json_str("en", "{not json").unwrap_err();
        assert!(matches!(err, CoreError::CatalogJson { .. }));
    }

    #[test]
    fn test_non_object_root() {
        let err = Catalog::from_json_str("en", "[1, 2]").unwrap_err();
        assert!(matches!(err, CoreError::CatalogShape(lang) if lang == "en"));
    }
}
