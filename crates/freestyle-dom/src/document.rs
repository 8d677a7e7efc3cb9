//! Arena-backed in-memory document.
//!
//! [`MemoryDocument`] is a minimal element tree that implements
//! [`StyleHost`]. It is enough to run style injection without a browser:
//! server-side rendering, snapshot tests, or tooling that emits HTML.
//!
//! Nodes live in a [`SlotMap`] and are addressed by [`NodeId`], so handles stay
//! valid while the tree is rearranged and become invalid once a node is
//! removed.

use slotmap::{SlotMap, new_key_type};

use crate::host::StyleHost;

new_key_type! {
    /// Handle to a node in a [`MemoryDocument`].
    pub struct NodeId;
}

/// Elements rendered without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "meta", "img", "br", "hr", "input", "link", "area", "base", "col", "embed", "param", "source",
    "track", "wbr",
];

#[derive(Debug, Clone)]
enum NodeKind {
    Document,
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// A small owned document tree.
///
/// A new document starts as `<html><head></head><body></body></html>`.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: SlotMap<NodeId, NodeData>,
    root: NodeId,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Create a document with an empty `html`, `head` and `body`.
    pub fn new() -> Self {
        let mut document = Self::empty();
        let html = document.create_element("html");
        let head = document.create_element("head");
        let body = document.create_element("body");
        document.append_child(document.root, html);
        document.append_child(html, head);
        document.append_child(html, body);
        document
    }

    /// Create a document with nothing but the root node.
    pub fn empty() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(NodeData::new(NodeKind::Document));
        Self { nodes, root }
    }

    /// The first `head` element, if any.
    pub fn head(&self) -> Option<NodeId> {
        self.get_elements_by_tag_name("head").into_iter().next()
    }

    /// The first `body` element, if any.
    pub fn body(&self) -> Option<NodeId> {
        self.get_elements_by_tag_name("body").into_iter().next()
    }

    /// Check whether `node` still exists.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    /// Check whether `node` is reachable from the root.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.root {
                return true;
            }
            current = self.nodes.get(id).and_then(|data| data.parent);
        }
        false
    }

    /// Parent of `node`.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node)?.parent
    }

    /// Children of `node`, in order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node)
            .map(|data| data.children.as_slice())
            .unwrap_or_default()
    }

    /// Value of attribute `name` on element `node`.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes.get(node)?.kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    /// Concatenated text of `node` and all its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut text = String::new();
        self.collect_text(node, &mut text);
        text
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let Some(data) = self.nodes.get(node) else {
            return;
        };
        if let NodeKind::Text(text) = &data.kind {
            out.push_str(text);
        }
        for &child in &data.children {
            self.collect_text(child, out);
        }
    }

    /// Attached elements in tree order.
    fn elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(data) = self.nodes.get(id) else {
                continue;
            };
            if matches!(data.kind, NodeKind::Element { .. }) {
                out.push(id);
            }
            stack.extend(data.children.iter().rev());
        }
        out
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get_mut(node).and_then(|data| data.parent.take()) else {
            return;
        };
        if let Some(parent_data) = self.nodes.get_mut(parent) {
            parent_data.children.retain(|&child| child != node);
        }
    }

    fn remove_subtree(&mut self, node: NodeId) {
        if let Some(data) = self.nodes.remove(node) {
            for child in data.children {
                self.remove_subtree(child);
            }
        }
    }

    /// Render the document as HTML.
    ///
    /// Attribute values have `&` and `"` escaped; text is written as-is,
    /// which is what `style` contents need.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.render(self.root, &mut html);
        html
    }

    fn render(&self, node: NodeId, out: &mut String) {
        let Some(data) = self.nodes.get(node) else {
            return;
        };
        match &data.kind {
            NodeKind::Document => {
                for &child in &data.children {
                    self.render(child, out);
                }
            }
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { tag, attributes } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    let value = value.replace('&', "&amp;").replace('"', "&quot;");
                    out.push_str(&format!(" {}=\"{}\"", name, value));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                for &child in &data.children {
                    self.render(child, out);
                }
                out.push_str(&format!("</{}>", tag));
            }
        }
    }
}

impl StyleHost for MemoryDocument {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        self.root
    }

    fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|&node| self.attribute(node, "id") == Some(id))
    }

    fn get_elements_by_tag_name(&self, tag: &str) -> Vec<NodeId> {
        self.elements()
            .into_iter()
            .filter(|&node| {
                self.tag_name(node)
                    .is_some_and(|name| name.eq_ignore_ascii_case(tag))
            })
            .collect()
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.nodes.get(node)?.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.insert(NodeData::new(NodeKind::Element {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
        }))
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(NodeKind::Element { attributes, .. }) =
            self.nodes.get_mut(node).map(|data| &mut data.kind)
        else {
            tracing::warn!("set_attribute on a non-element node {:?}", node);
            return;
        };
        match attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.contains(parent) || !self.contains(child) {
            tracing::warn!("append_child with a removed node");
            return;
        }
        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            if id == child {
                tracing::warn!("Refusing to append {:?} inside itself", child);
                return;
            }
            ancestor = self.parent(id);
        }

        self.detach(child);
        if let Some(data) = self.nodes.get_mut(child) {
            data.parent = Some(parent);
        }
        if let Some(data) = self.nodes.get_mut(parent) {
            data.children.push(child);
        }
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) {
        let Some(children) = self.nodes.get_mut(node).map(|data| std::mem::take(&mut data.children))
        else {
            return;
        };
        for child in children {
            self.remove_subtree(child);
        }
        if text.is_empty() {
            return;
        }
        let text_node = self.nodes.insert(NodeData::new(NodeKind::Text(text.to_string())));
        self.append_child(node, text_node);
    }

    fn remove(&mut self, node: NodeId) {
        if node == self.root {
            tracing::warn!("Refusing to remove the document root");
            return;
        }
        self.detach(node);
        self.remove_subtree(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_skeleton() {
        let document = MemoryDocument::new();
        assert_eq!(
            document.to_html(),
            "<html><head></head><body></body></html>"
        );
        assert!(document.head().is_some());
        assert!(document.body().is_some());
    }

    #[test]
    fn lookup_by_id_in_tree_order() {
        let mut document = MemoryDocument::new();
        let body = document.body().unwrap();
        let first = document.create_element("div");
        let second = document.create_element("p");
        document.set_attribute(first, "id", "dup");
        document.set_attribute(second, "id", "dup");
        document.append_child(body, first);
        document.append_child(body, second);

        assert_eq!(document.get_element_by_id("dup"), Some(first));
        assert_eq!(document.get_element_by_id("missing"), None);
    }

    #[test]
    fn detached_elements_are_not_found() {
        let mut document = MemoryDocument::new();
        let div = document.create_element("div");
        document.set_attribute(div, "id", "floating");

        assert_eq!(document.get_element_by_id("floating"), None);
        assert!(!document.is_attached(div));
    }

    #[test]
    fn tag_lookup_ignores_case() {
        let mut document = MemoryDocument::new();
        let body = document.body().unwrap();
        let style = document.create_element("STYLE");
        document.append_child(body, style);

        assert_eq!(document.tag_name(style), Some("style"));
        assert_eq!(document.get_elements_by_tag_name("Style"), vec![style]);
    }

    #[test]
    fn text_content_replaces_children() {
        let mut document = MemoryDocument::new();
        let head = document.head().unwrap();
        let style = document.create_element("style");
        document.append_child(head, style);

        document.set_text_content(style, "a { color: red; }");
        document.set_text_content(style, "b { color: blue; }");

        assert_eq!(document.text_content(style), "b { color: blue; }");
        assert_eq!(document.children(style).len(), 1);
    }

    #[test]
    fn append_moves_node() {
        let mut document = MemoryDocument::new();
        let head = document.head().unwrap();
        let body = document.body().unwrap();
        let div = document.create_element("div");

        document.append_child(head, div);
        document.append_child(body, div);

        assert!(document.children(head).is_empty());
        assert_eq!(document.children(body), &[div]);
        assert_eq!(document.parent(div), Some(body));
    }

    #[test]
    fn append_refuses_cycles() {
        let mut document = MemoryDocument::new();
        let body = document.body().unwrap();
        let outer = document.create_element("div");
        let inner = document.create_element("div");
        document.append_child(body, outer);
        document.append_child(outer, inner);

        document.append_child(inner, outer);
        assert_eq!(document.parent(outer), Some(body));
    }

    #[test]
    fn remove_drops_subtree() {
        let mut document = MemoryDocument::new();
        let body = document.body().unwrap();
        let div = document.create_element("div");
        let span = document.create_element("span");
        document.append_child(body, div);
        document.append_child(div, span);

        document.remove(div);

        assert!(!document.contains(div));
        assert!(!document.contains(span));
        assert!(document.children(body).is_empty());
    }

    #[test]
    fn root_cannot_be_removed() {
        let mut document = MemoryDocument::new();
        let root = document.root();
        document.remove(root);
        assert!(document.contains(root));
    }

    #[test]
    fn renders_attributes_and_void_elements() {
        let mut document = MemoryDocument::empty();
        let root = document.root();
        let link = document.create_element("link");
        document.set_attribute(link, "title", "a \"b\" & c");
        document.append_child(root, link);

        assert_eq!(
            document.to_html(),
            "<link title=\"a &quot;b&quot; &amp; c\">"
        );
    }
}
