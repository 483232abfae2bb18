use std::cell::RefCell;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, NodeList, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::core::Rect;
use crate::dom::{Document, NodeId, ScrollBehavior, ScrollBlock, ScrollIntoView};
use crate::error::{MotionError, MotionResult};

pub(super) fn host_error(err: JsValue) -> MotionError {
    MotionError::Host(format!("{err:?}"))
}

/// `Document` over the live browser DOM.
///
/// Elements are interned on first sight, so the same DOM element always maps
/// to the same `NodeId` for the lifetime of the adapter.
pub struct WebDocument {
    document: web_sys::Document,
    elements: RefCell<Vec<Element>>,
}

impl WebDocument {
    #[must_use]
    pub fn new(document: web_sys::Document) -> Self {
        Self {
            document,
            elements: RefCell::new(Vec::new()),
        }
    }

    pub fn from_window() -> MotionResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| MotionError::Host("no window document".to_owned()))?;
        Ok(Self::new(document))
    }

    #[must_use]
    pub fn raw(&self) -> &web_sys::Document {
        &self.document
    }

    /// Returns the id for `element`, interning it when unseen.
    pub fn intern(&self, element: Element) -> NodeId {
        let mut elements = self.elements.borrow_mut();
        if let Some(index) = elements.iter().position(|known| *known == element) {
            return NodeId::new(index as u32);
        }
        elements.push(element);
        NodeId::new((elements.len() - 1) as u32)
    }

    pub fn element(&self, node: NodeId) -> MotionResult<Element> {
        self.elements
            .borrow()
            .get(node.raw() as usize)
            .cloned()
            .ok_or(MotionError::UnknownNode(node.raw()))
    }

    fn intern_list(&self, list: NodeList) -> Vec<NodeId> {
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| self.intern(element))
            .collect()
    }

    fn html_element(&self, node: NodeId) -> MotionResult<HtmlElement> {
        self.element(node)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MotionError::Host(format!("{node} has no inline style")))
    }
}

impl Document for WebDocument {
    fn query_all(&self, selector: &str) -> MotionResult<Vec<NodeId>> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|_| invalid_selector(selector))?;
        Ok(self.intern_list(list))
    }

    fn query_all_within(&self, scope: NodeId, selector: &str) -> MotionResult<Vec<NodeId>> {
        let list = self
            .element(scope)?
            .query_selector_all(selector)
            .map_err(|_| invalid_selector(selector))?;
        Ok(self.intern_list(list))
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.document
            .get_element_by_id(id)
            .map(|element| self.intern(element))
    }

    fn closest(&self, node: NodeId, selector: &str) -> MotionResult<Option<NodeId>> {
        let found = self
            .element(node)?
            .closest(selector)
            .map_err(|_| invalid_selector(selector))?;
        Ok(found.map(|element| self.intern(element)))
    }

    fn head(&self) -> Option<NodeId> {
        self.document
            .head()
            .map(|head| self.intern(Element::from(head)))
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node).ok()?.get_attribute(name)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .map(|element| element.class_list().contains(class))
            .unwrap_or(false)
    }

    fn bounding_rect(&self, node: NodeId) -> Option<Rect> {
        let rect = self.element(node).ok()?.get_bounding_client_rect();
        Some(Rect::new(rect.x(), rect.y(), rect.width(), rect.height()))
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> MotionResult<()> {
        self.element(node)?
            .set_attribute(name, value)
            .map_err(host_error)
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> MotionResult<()> {
        self.element(node)?
            .class_list()
            .add_1(class)
            .map_err(host_error)
    }

    fn remove_class(&mut self, node: NodeId, class: &str) -> MotionResult<()> {
        self.element(node)?
            .class_list()
            .remove_1(class)
            .map_err(host_error)
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> MotionResult<()> {
        self.element(node)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> MotionResult<()> {
        self.html_element(node)?
            .style()
            .set_property(property, value)
            .map_err(host_error)
    }

    fn create_element(&mut self, tag: &str) -> MotionResult<NodeId> {
        let element = self.document.create_element(tag).map_err(host_error)?;
        Ok(self.intern(element))
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> MotionResult<()> {
        let child = self.element(child)?;
        self.element(parent)?
            .append_child(&child)
            .map(|_| ())
            .map_err(host_error)
    }

    fn scroll_into_view(&mut self, node: NodeId, options: ScrollIntoView) -> MotionResult<()> {
        let scroll_options = ScrollIntoViewOptions::new();
        scroll_options.set_behavior(match options.behavior {
            ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        scroll_options.set_block(match options.block {
            ScrollBlock::Start => ScrollLogicalPosition::Start,
            ScrollBlock::Center => ScrollLogicalPosition::Center,
            ScrollBlock::End => ScrollLogicalPosition::End,
            ScrollBlock::Nearest => ScrollLogicalPosition::Nearest,
        });
        self.element(node)?
            .scroll_into_view_with_scroll_into_view_options(&scroll_options);
        Ok(())
    }
}

fn invalid_selector(selector: &str) -> MotionError {
    MotionError::InvalidSelector {
        selector: selector.to_owned(),
        reason: "rejected by the browser".to_owned(),
    }
}
