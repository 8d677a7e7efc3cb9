//! The document capability used by style injection.

use std::fmt;

/// The slice of a DOM-like document that style injection needs.
///
/// Implement this for whatever owns your element tree (a browser binding, a
/// server-side HTML tree, or the bundled [`MemoryDocument`](crate::MemoryDocument)).
/// Node handles are plain copyable keys; the host owns the nodes.
///
/// Tag names are compared ASCII case-insensitively by the injection code, so
/// hosts may report them in whatever case they store.
pub trait StyleHost {
    /// Handle to a node in the document.
    type Node: Copy + Eq + fmt::Debug;

    /// The node everything else hangs off.
    fn root(&self) -> Self::Node;

    /// First attached element whose `id` attribute equals `id`, in tree order.
    fn get_element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All attached elements with the given tag name, in tree order.
    fn get_elements_by_tag_name(&self, tag: &str) -> Vec<Self::Node>;

    /// Tag name of `node`, or `None` if it is not an element.
    fn tag_name(&self, node: Self::Node) -> Option<&str>;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Set an attribute on an element.
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    /// Append `child` as the last child of `parent`, moving it if attached elsewhere.
    fn append_child(&mut self, parent: Self::Node, child: Self::Node);

    /// Replace the children of `node` with a single text node.
    fn set_text_content(&mut self, node: Self::Node, text: &str);

    /// Detach `node` from the document.
    fn remove(&mut self, node: Self::Node);
}
