//! Document root and metadata definitions
//!
//! A [`Document`] is the composed letter: metadata plus the ordered block
//! list every renderer consumes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::section::SectionKind;

/// A complete composed letter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, language, attributes)
    pub metadata: DocumentMeta,
    /// Document content blocks
    pub blocks: Vec<Block>,
}

/// Document metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Letter title
    pub title: Option<String>,
    /// Language code of the catalog used for composition
    pub language: Option<String>,
    /// Letter author (the signing writer)
    pub author: Option<String>,
    /// Additional attributes (file name parts, generation date)
    pub attributes: HashMap<String, String>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with a title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            metadata: DocumentMeta::with_title(title),
            blocks: Vec::new(),
        }
    }

    /// Add a block to the document
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the document is empty (no blocks)
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Body sections present in the document, in emission order
    pub fn sections(&self) -> Vec<SectionKind> {
        self.blocks.iter().filter_map(Block::section).collect()
    }
}

impl DocumentMeta {
    /// Create metadata with just a title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set an attribute
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get an attribute
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }
}
