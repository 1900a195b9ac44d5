//! # Document Model
//!
//! In-memory stand-in for the browser DOM. Elements live in an arena in
//! document order and are addressed by [`NodeId`]. The document is the single
//! source of truth for all view state: page visibility, highlighting, menu
//! state, collapsed sections, form values and reveal styling are all stored as
//! classes, inline style or values on its elements.
//!
//! Documents are described as a JSON tree of [`ElementSpec`]s:
//!
//! ```json
//! { "tag": "section", "id": "home", "class": "page active",
//!   "children": [ { "tag": "a", "attrs": { "href": "#about" } } ] }
//! ```

mod element;

pub use element::{Element, InlineStyle, LayoutBox, NodeId};

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Class carried by top-level page containers
pub const PAGE_CLASS: &str = "page";

/// Class marking the visible page, highlighted links and the open menu
pub const ACTIVE_CLASS: &str = "active";

/// JSON description of an element and its children
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ElementSpec {
    pub tag: String,
    pub id: Option<String>,
    /// Space separated class list
    pub class: String,
    pub attrs: BTreeMap<String, String>,
    pub style: InlineStyle,
    pub text: String,
    pub value: String,
    pub layout: Option<LayoutBox>,
    pub children: Vec<ElementSpec>,
}

/// Arena of elements in document order
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    ids: HashMap<String, NodeId>,
}

impl Document {
    /// Flatten an element tree into a document (pre-order)
    pub fn from_spec(root: ElementSpec) -> Self {
        let mut document = Self::default();
        document.append_spec(root, None);
        document
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let spec: ElementSpec =
            serde_json::from_str(json).context("Failed to parse document description")?;
        Ok(Self::from_spec(spec))
    }

    /// Load a JSON document description from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading document from '{}'", path.display());
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    fn append_spec(&mut self, spec: ElementSpec, parent: Option<NodeId>) {
        let node = NodeId(self.elements.len());
        let mut element = Element::new(spec.tag);
        element.classes = spec.class.split_whitespace().map(str::to_string).collect();
        element.attributes = spec.attrs;
        element.style = spec.style;
        element.text = spec.text;
        element.value = spec.value;
        element.layout = spec.layout;
        element.parent = parent;

        if let Some(id) = spec.id {
            // getElementById semantics: first element in document order wins
            self.ids.entry(id.clone()).or_insert(node);
            element.id = Some(id);
        }
        self.elements.push(element);

        for child in spec.children {
            self.append_spec(child, Some(node));
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(node.0)
    }

    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    /// All elements in document order
    pub fn elements(&self) -> impl Iterator<Item = (NodeId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, element)| (NodeId(index), element))
    }

    pub fn elements_with_class<'a>(
        &'a self,
        class: &'a str,
    ) -> impl Iterator<Item = (NodeId, &'a Element)> + 'a {
        self.elements()
            .filter(move |(_, element)| element.has_class(class))
    }

    /// Ancestors of `node`, nearest first
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.get(node).and_then(|e| e.parent), move |current| {
            self.get(*current).and_then(|e| e.parent)
        })
    }

    pub fn has_ancestor_with_class(&self, node: NodeId, class: &str) -> bool {
        self.ancestors(node)
            .filter_map(|ancestor| self.get(ancestor))
            .any(|element| element.has_class(class))
    }

    /// Whether the element takes part in layout
    ///
    /// Hidden when it or an ancestor has inline `display: none`, or when it
    /// belongs to a `.page` that is not `.active`.
    pub fn is_rendered(&self, node: NodeId) -> bool {
        std::iter::once(node)
            .chain(self.ancestors(node))
            .filter_map(|current| self.get(current))
            .all(|element| {
                let inactive_page =
                    element.has_class(PAGE_CLASS) && !element.has_class(ACTIVE_CLASS);
                !element.is_display_none() && !inactive_page
            })
    }

    /// Label for log output, falling back to the node index
    pub fn describe(&self, node: NodeId) -> String {
        self.get(node)
            .map(Element::describe)
            .unwrap_or_else(|| node.to_string())
    }
}
