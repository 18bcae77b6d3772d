use indexmap::IndexMap;
use uuid::Uuid;

use super::constants::{TAG_ARRAY, TAG_DICT, TAG_STRING};

/// A single element of a TextMate property list.
///
/// Only three element kinds are produced: every scalar becomes a `string`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlistNode {
    /// A `<string>` leaf.
    String(String),
    /// An `<array>` of values, in order.
    Array(Vec<PlistNode>),
    /// A `<dict>`, written as alternating `<key>`/value children in insertion order.
    Dict(IndexMap<String, PlistNode>),
}

impl PlistNode {
    /// XML tag name of this element.
    pub fn tag(&self) -> &'static str {
        match self {
            PlistNode::String(_) => TAG_STRING,
            PlistNode::Array(_) => TAG_ARRAY,
            PlistNode::Dict(_) => TAG_DICT,
        }
    }

    /// Returns the text if this is a String variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PlistNode::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the entries if this is a Dict variant.
    pub fn as_dict(&self) -> Option<&IndexMap<String, PlistNode>> {
        match self {
            PlistNode::Dict(map) => Some(map),
            _ => None,
        }
    }

    /// Returns a reference to the items if this is an Array variant.
    pub fn as_array(&self) -> Option<&Vec<PlistNode>> {
        match self {
            PlistNode::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get a value from a Dict by key.
    pub fn get(&self, key: &str) -> Option<&PlistNode> {
        self.as_dict().and_then(|map| map.get(key))
    }
}

impl From<&str> for PlistNode {
    fn from(value: &str) -> Self {
        PlistNode::String(value.to_string())
    }
}

impl From<String> for PlistNode {
    fn from(value: String) -> Self {
        PlistNode::String(value)
    }
}

/// A complete `<plist version="1.0">` document.
///
/// The doctype and root element are fixed; `root` is the root element's single child.
/// An injected UUID is kept beside the tree and written as the leading pair of the
/// root dict, so entries of the converted data are never replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlistDocument {
    pub root: Option<PlistNode>,
    uuid: Option<String>,
}

impl PlistDocument {
    /// An empty document with no child under `<plist>`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: PlistNode) -> Self {
        PlistDocument {
            root: Some(root),
            uuid: None,
        }
    }

    /// Tag the root dict with a leading `uuid` key holding `uuid`.
    ///
    /// Returns false, leaving the document unchanged, when the root is missing or
    /// is not a dict. A `uuid` entry already in the dict is kept after the new pair.
    pub fn inject_uuid(&mut self, uuid: &Uuid) -> bool {
        if !matches!(self.root, Some(PlistNode::Dict(_))) {
            return false;
        }
        self.uuid = Some(uuid.hyphenated().to_string());
        true
    }

    /// The injected UUID, if any.
    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }
}
