use indextree::{Arena, NodeId};

use crate::name::{NameId, NameLookup};
use crate::xmlvalue::{Element, Text, Value, ValueType};

pub(crate) type XmlArena = Arena<Value>;

/// A node in an XML document tree.
///
/// Node handles are cheap to copy and only meaningful for the
/// [`Document`] they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// The XML declaration from the document prolog, e.g.
/// `<?xml version="1.0" encoding="UTF-8"?>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<bool>,
}

/// A parsed XML document.
///
/// Holds the node arena and the interned element and attribute names.
/// Construct one with [`Document::parse`] or [`Document::parse_bytes`].
#[derive(Debug)]
pub struct Document {
    pub(crate) arena: XmlArena,
    pub(crate) name_lookup: NameLookup,
    pub(crate) root: Node,
    pub(crate) declaration: Option<Declaration>,
}

impl Document {
    /// The document root. This is the parent of the document element,
    /// comments and processing instructions in the prolog and epilog.
    pub fn root(&self) -> Node {
        self.root
    }

    /// The XML declaration, if the document had one.
    pub fn declaration(&self) -> Option<&Declaration> {
        self.declaration.as_ref()
    }

    /// Obtain the document element.
    pub fn document_element(&self) -> Node {
        for child in self.children(self.root) {
            if let Value::Element(_) = self.value(child) {
                return child;
            }
        }
        unreachable!("parsed document always has a document element")
    }

    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena[node.get()].get()
    }

    #[inline]
    pub fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena[node.get()].get_mut()
    }

    /// The type of a node without borrowing its value.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// The element value of a node, if it is an element.
    pub fn element(&self, node: Node) -> Option<&Element> {
        match self.value(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The mutable element value of a node, if it is an element.
    pub fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        match self.value_mut(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The text value of a node, if it is a text node.
    pub fn text(&self, node: Node) -> Option<&Text> {
        match self.value(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get parent node, or `None` for the document root.
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena[node.get()].parent().map(Node::new)
    }

    /// Get first child, or `None` if the node has no children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena[node.get()].first_child().map(Node::new)
    }

    /// Iterator over the direct children of a node.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(&self.arena).map(Node::new)
    }

    /// Iterator over a node and all its descendants, in document
    /// (pre-order) order.
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(&self.arena).map(Node::new)
    }

    /// Look up an interned name. Returns `None` if the name does not
    /// occur in this document and was never added.
    pub fn name(&self, name: &str) -> Option<NameId> {
        self.name_lookup.get_id(name)
    }

    /// Intern a name, adding it if needed.
    pub fn add_name(&mut self, name: &str) -> NameId {
        self.name_lookup.get_id_mut(name.to_string())
    }

    /// The string for an interned name.
    pub fn name_str(&self, name_id: NameId) -> &str {
        self.name_lookup.get_value(name_id)
    }
}
