use indexmap::IndexMap;
use smallvec::SmallVec;

use super::selector::{Selector, SelectorTree};
use super::{Document, NodeId, ScrollIntoView};
use crate::core::Rect;
use crate::error::{MotionError, MotionResult};

#[derive(Debug, Clone, Default)]
struct MemoryNode {
    tag: String,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    attributes: IndexMap<String, String>,
    classes: SmallVec<[String; 2]>,
    styles: IndexMap<String, String>,
    text: String,
    rect: Option<Rect>,
}

/// Headless visual tree used by tests and non-browser hosts.
///
/// Starts with `html > (head, body)`. Every mutation is applied in place and
/// can be read back, and scroll requests are logged instead of performed.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<MemoryNode>,
    head: NodeId,
    body: NodeId,
    scroll_requests: Vec<(NodeId, ScrollIntoView)>,
    text_writes: usize,
    read_only: Vec<NodeId>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        let mut document = Self {
            nodes: Vec::new(),
            head: NodeId::new(0),
            body: NodeId::new(0),
            scroll_requests: Vec::new(),
            text_writes: 0,
            read_only: Vec::new(),
        };
        let html = document.push_node("html", None);
        document.head = document.push_node("head", Some(html));
        document.body = document.push_node("body", Some(html));
        document
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Appends a new element under `parent`.
    ///
    /// `class` attributes are split into class names; every other attribute is
    /// stored verbatim in insertion order.
    pub fn append(
        &mut self,
        parent: NodeId,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> MotionResult<NodeId> {
        self.node(parent)?;
        let node = self.push_node(tag, Some(parent));
        for (name, value) in attributes {
            self.set_attribute(node, name, value)?;
        }
        Ok(node)
    }

    pub fn set_bounding_rect(&mut self, node: NodeId, rect: Rect) -> MotionResult<()> {
        rect.validate()?;
        self.node_mut(node)?.rect = Some(rect);
        Ok(())
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.node(node).ok().map(|node| node.text.as_str())
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.node(node)
            .ok()
            .and_then(|node| node.styles.get(property))
            .map(String::as_str)
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.tag_name(node)
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> Vec<&str> {
        self.node(node)
            .map(|node| node.classes.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn scroll_requests(&self) -> &[(NodeId, ScrollIntoView)] {
        &self.scroll_requests
    }

    /// Total number of `set_text` calls so far.
    #[must_use]
    pub fn text_writes(&self) -> usize {
        self.text_writes
    }

    /// Makes every later mutation of `node` fail with a host error, the way a
    /// browser rejects writes to a frozen or foreign element.
    pub fn reject_writes(&mut self, node: NodeId) {
        if !self.read_only.contains(&node) {
            self.read_only.push(node);
        }
    }

    fn push_node(&mut self, tag: &str, parent: Option<NodeId>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(MemoryNode {
            tag: tag.to_ascii_lowercase(),
            parent,
            ..MemoryNode::default()
        });
        if let Some(parent) = parent {
            self.nodes[parent.raw() as usize].children.push(id);
        }
        id
    }

    fn node(&self, node: NodeId) -> MotionResult<&MemoryNode> {
        self.nodes
            .get(node.raw() as usize)
            .ok_or(MotionError::UnknownNode(node.raw()))
    }

    fn node_mut(&mut self, node: NodeId) -> MotionResult<&mut MemoryNode> {
        if self.read_only.contains(&node) {
            return Err(MotionError::Host(format!("{node} rejects writes")));
        }
        self.nodes
            .get_mut(node.raw() as usize)
            .ok_or(MotionError::UnknownNode(node.raw()))
    }

    fn is_connected(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.root() {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn is_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Connected elements in document order, depth first.
    fn document_order(&self, scope: NodeId) -> Vec<NodeId> {
        let mut ordered = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            ordered.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        ordered
    }
}

impl SelectorTree for MemoryDocument {
    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.node(node).ok().map(|node| node.tag.as_str())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).ok().and_then(|node| node.parent)
    }

    fn attribute_value(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)
            .ok()
            .and_then(|node| node.attributes.get(name))
            .map(String::as_str)
    }

    fn has_class_name(&self, node: NodeId, class: &str) -> bool {
        self.node(node)
            .is_ok_and(|node| node.classes.iter().any(|existing| existing == class))
    }
}

impl Document for MemoryDocument {
    fn query_all(&self, selector: &str) -> MotionResult<Vec<NodeId>> {
        self.query_all_within(self.root(), selector)
    }

    fn query_all_within(&self, scope: NodeId, selector: &str) -> MotionResult<Vec<NodeId>> {
        self.node(scope)?;
        let selector = Selector::parse(selector)?;
        Ok(self
            .document_order(scope)
            .into_iter()
            .filter(|node| selector.matches(self, *node))
            .collect())
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.document_order(self.root())
            .into_iter()
            .find(|node| self.attribute_value(*node, "id") == Some(id))
    }

    fn closest(&self, node: NodeId, selector: &str) -> MotionResult<Option<NodeId>> {
        self.node(node)?;
        let selector = Selector::parse(selector)?;
        let mut current = Some(node);
        while let Some(id) = current {
            if selector.matches(self, id) {
                return Ok(Some(id));
            }
            current = self.parent(id);
        }
        Ok(None)
    }

    fn head(&self) -> Option<NodeId> {
        Some(self.head)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        if name == "class" {
            return self
                .node(node)
                .ok()
                .filter(|node| !node.classes.is_empty())
                .map(|node| node.classes.join(" "));
        }
        self.attribute_value(node, name).map(str::to_owned)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.has_class_name(node, class)
    }

    fn bounding_rect(&self, node: NodeId) -> Option<Rect> {
        self.node(node).ok().and_then(|node| node.rect)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> MotionResult<()> {
        let entry = self.node_mut(node)?;
        if name == "class" {
            entry.classes = value.split_whitespace().map(str::to_owned).collect();
        } else {
            entry.attributes.insert(name.to_owned(), value.to_owned());
        }
        Ok(())
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> MotionResult<()> {
        let entry = self.node_mut(node)?;
        if !entry.classes.iter().any(|existing| existing == class) {
            entry.classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&mut self, node: NodeId, class: &str) -> MotionResult<()> {
        self.node_mut(node)?
            .classes
            .retain(|existing| existing != class);
        Ok(())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> MotionResult<()> {
        let entry = self.node_mut(node)?;
        entry.text.clear();
        entry.text.push_str(text);
        self.text_writes += 1;
        Ok(())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> MotionResult<()> {
        let styles = &mut self.node_mut(node)?.styles;
        if value.is_empty() {
            styles.shift_remove(property);
        } else {
            styles.insert(property.to_owned(), value.to_owned());
        }
        Ok(())
    }

    fn create_element(&mut self, tag: &str) -> MotionResult<NodeId> {
        if tag.is_empty() || !tag.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-') {
            return Err(MotionError::InvalidConfig(format!(
                "invalid element tag `{tag}`"
            )));
        }
        Ok(self.push_node(tag, None))
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> MotionResult<()> {
        self.node_mut(parent)?;
        self.node_mut(child)?;
        if child == parent || self.is_descendant_of(parent, child) || child == self.root() {
            return Err(MotionError::Host(format!(
                "cannot append {child} under {parent}: would create a cycle"
            )));
        }
        if let Some(previous) = self.node(child)?.parent {
            self.node_mut(previous)?
                .children
                .retain(|existing| *existing != child);
        }
        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }

    fn scroll_into_view(&mut self, node: NodeId, options: ScrollIntoView) -> MotionResult<()> {
        if !self.is_connected(node) {
            return Err(MotionError::MissingElement(format!(
                "{node} is not attached to the document"
            )));
        }
        self.scroll_requests.push((node, options));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryDocument;
    use crate::dom::Document;

    #[test]
    fn query_returns_document_order() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let section = doc
            .append(body, "section", &[("id", "diagnostico")])
            .expect("section");
        let first = doc
            .append(section, "div", &[("class", "reveal-up")])
            .expect("first");
        let second = doc
            .append(body, "div", &[("class", "fade-in-up")])
            .expect("second");

        let found = doc.query_all(".reveal-up, .fade-in-up").expect("query");
        assert_eq!(found, vec![first, second]);
        assert_eq!(
            doc.closest(first, "#diagnostico").expect("closest"),
            Some(section)
        );
        assert_eq!(doc.closest(second, "#diagnostico").expect("closest"), None);
    }

    #[test]
    fn detached_elements_are_not_queried() {
        let mut doc = MemoryDocument::new();
        let detached = doc.create_element("div").expect("create");
        doc.add_class(detached, "counter").expect("class");
        assert!(doc.query_all(".counter").expect("query").is_empty());

        let body = doc.body();
        doc.append_child(body, detached).expect("append");
        assert_eq!(doc.query_all(".counter").expect("query"), vec![detached]);
    }

    #[test]
    fn append_child_rejects_cycles() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let outer = doc.append(body, "div", &[]).expect("outer");
        let inner = doc.append(outer, "div", &[]).expect("inner");
        assert!(doc.append_child(inner, outer).is_err());
    }

    #[test]
    fn empty_style_value_clears_property() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let node = doc.append(body, "div", &[]).expect("node");
        doc.set_style(node, "display", "none").expect("style");
        assert_eq!(doc.style(node, "display"), Some("none"));
        doc.set_style(node, "display", "").expect("clear");
        assert_eq!(doc.style(node, "display"), None);
    }
}
