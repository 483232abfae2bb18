mod memory_document;
mod selector;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use memory_document::MemoryDocument;
pub use selector::{
    AttributeMatch, AttributeSelector, ComplexSelector, CompoundSelector, Selector, SelectorTree,
};

use crate::core::Rect;
use crate::error::MotionResult;

/// Opaque handle to an element owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScrollBehavior {
    Auto,
    #[default]
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ScrollIntoView {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

/// Visual-tree capability the engine drives.
///
/// Implementations own element identity: a given element always maps to the
/// same [`NodeId`]. Reads take `&self`; anything that mutates the tree or its
/// presentation takes `&mut self`. Selectors use the syntax accepted by
/// [`Selector::parse`].
pub trait Document {
    fn query_all(&self, selector: &str) -> MotionResult<Vec<NodeId>>;

    fn query_all_within(&self, scope: NodeId, selector: &str) -> MotionResult<Vec<NodeId>>;

    fn query_first(&self, selector: &str) -> MotionResult<Option<NodeId>> {
        Ok(self.query_all(selector)?.into_iter().next())
    }

    fn query_first_within(&self, scope: NodeId, selector: &str) -> MotionResult<Option<NodeId>> {
        Ok(self.query_all_within(scope, selector)?.into_iter().next())
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, node: NodeId, selector: &str) -> MotionResult<Option<NodeId>>;

    fn head(&self) -> Option<NodeId>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Layout box relative to the viewport, when the host knows it.
    fn bounding_rect(&self, _node: NodeId) -> Option<Rect> {
        None
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> MotionResult<()>;

    fn add_class(&mut self, node: NodeId, class: &str) -> MotionResult<()>;

    fn remove_class(&mut self, node: NodeId, class: &str) -> MotionResult<()>;

    fn set_text(&mut self, node: NodeId, text: &str) -> MotionResult<()>;

    /// Sets an inline style property. An empty value clears it.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> MotionResult<()>;

    fn create_element(&mut self, tag: &str) -> MotionResult<NodeId>;

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> MotionResult<()>;

    fn scroll_into_view(&mut self, node: NodeId, options: ScrollIntoView) -> MotionResult<()>;
}
