use html5ever::tendril::TendrilSink as _;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{self as rcdom, Handle, RcDom};

/// Index of a node inside a [`Document`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Data stored for each retained node. Comments, doctypes and processing instructions are
/// dropped while the tree is built.
#[derive(Clone, Debug)]
pub enum NodeData {
    Document,
    Element(ElementData),
    Text(String),
}

#[derive(Clone, Debug)]
pub struct ElementData {
    /// Lower-case local name (`div`, `img`, ...).
    pub tag_name: String,
    /// Attributes in source order.
    pub attributes: Vec<(String, String)>,
}

impl ElementData {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }
}

#[derive(Clone, Debug)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Owned, read-only HTML tree.
///
/// Built once from html5ever's reference DOM and then queried by the extractors; node ids are
/// assigned in document (pre-)order, so comparing two ids compares their source position.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        let rc = parse_document(RcDom::default(), ParseOpts::default()).one(html);

        let mut doc = Self {
            nodes: vec![Node {
                data: NodeData::Document,
                parent: None,
                children: Vec::new(),
            }],
        };

        let root = doc.root();
        let mut stack: Vec<(Handle, NodeId)> = rc
            .document
            .children
            .borrow()
            .iter()
            .rev()
            .map(|c| (c.clone(), root))
            .collect();

        while let Some((handle, parent)) = stack.pop() {
            let data = match &handle.data {
                rcdom::NodeData::Element { name, attrs, .. } => NodeData::Element(ElementData {
                    tag_name: name.local.to_string(),
                    attributes: attrs
                        .borrow()
                        .iter()
                        .map(|a| (a.name.local.to_string(), a.value.to_string()))
                        .collect(),
                }),
                rcdom::NodeData::Text { contents } => NodeData::Text(contents.borrow().to_string()),
                _ => continue,
            };
            let id = doc.push(parent, data);
            for child in handle.children.borrow().iter().rev() {
                stack.push((child.clone(), id));
            }
        }

        doc
    }

    fn push(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0].data
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.data(id) {
            NodeData::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// All nodes below `scope` in document order, `scope` itself excluded.
    pub fn descendants(&self, scope: NodeId) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: self.children(scope).iter().rev().copied().collect(),
        }
    }

    pub fn descendant_elements(
        &self,
        scope: NodeId,
    ) -> impl Iterator<Item = (NodeId, &ElementData)> + '_ {
        self.descendants(scope)
            .filter_map(|id| self.element(id).map(|el| (id, el)))
    }

    pub fn find_all_by_tag(&self, scope: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendant_elements(scope)
            .filter(|(_, el)| el.is(tag))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn find_first_by_tag(&self, scope: NodeId, tag: &str) -> Option<NodeId> {
        self.descendant_elements(scope)
            .find(|(_, el)| el.is(tag))
            .map(|(id, _)| id)
    }

    pub fn find_all_by_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.descendant_elements(scope)
            .filter(|(_, el)| el.has_class(class))
            .map(|(id, _)| id)
            .collect()
    }

    /// Concatenated text of every text node below `id` (untrimmed).
    pub fn text(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let NodeData::Text(t) = self.data(id) {
            out.push_str(t);
        }
        for d in self.descendants(id) {
            if let NodeData::Text(t) = self.data(d) {
                out.push_str(t);
            }
        }
        out
    }
}

/// Pre-order walk produced by [`Document::descendants`].
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/markup/dom.rs"]
mod tests;
