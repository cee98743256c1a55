use crate::domain::model::Display;
use crate::domain::ports::ElementRegistry;
use crate::utils::error::Result;
use crate::utils::html::{escape_html, is_void_element};
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        display: Option<Display>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A change applied through [`ElementRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub target: NodeId,
    pub kind: MutationKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    SetText(String),
    ClearChildren,
    AppendParagraph(String),
    SetAttribute { name: String, value: String },
    RemoveAttribute { name: String },
    SetDisplay(Display),
}

/// In-memory host document rooted at `<body>`.
///
/// Nodes live in an arena; detached subtrees stay allocated but are no
/// longer reachable from the body, so lookups never see them.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
    base_url: Url,
    journal: Vec<Mutation>,
}

impl Document {
    pub fn new(base_url: Url) -> Self {
        let body = Node {
            kind: NodeKind::Element {
                tag: "body".to_string(),
                attributes: Vec::new(),
                display: None,
            },
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![body],
            body: NodeId(0),
            base_url,
            journal: Vec::new(),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Adds an element while building the document. Not journaled.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> NodeId {
        let attributes = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.push_child(
            parent,
            NodeKind::Element {
                tag: tag.to_string(),
                attributes,
                display: None,
            },
        )
    }

    pub fn set_page_marker(&mut self, page: &str) {
        let body = self.body;
        self.write_attribute(body, "data-page", page);
    }

    pub fn mutations(&self) -> &[Mutation] {
        &self.journal
    }

    /// Number of journaled writes of attribute `name` on `element`.
    pub fn attribute_writes(&self, element: NodeId, name: &str) -> usize {
        self.journal
            .iter()
            .filter(|m| m.target == element)
            .filter(|m| matches!(&m.kind, MutationKind::SetAttribute { name: n, .. } if n == name))
            .count()
    }

    pub fn tag(&self, element: NodeId) -> Option<&str> {
        match &self.node(element).kind {
            NodeKind::Element { tag, .. } => Some(tag.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn display(&self, element: NodeId) -> Option<Display> {
        match &self.node(element).kind {
            NodeKind::Element { display, .. } => *display,
            NodeKind::Text(_) => None,
        }
    }

    pub fn children(&self, element: NodeId) -> &[NodeId] {
        &self.node(element).children
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self, element: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(element, &mut out);
        out
    }

    /// Texts of the `<p>` children of `element`, in order.
    pub fn paragraphs(&self, element: NodeId) -> Vec<String> {
        self.children(element)
            .iter()
            .filter(|&&child| self.tag(child) == Some("p"))
            .map(|&child| self.text_content(child))
            .collect()
    }

    /// Text content of the element with `id`, if it exists.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.lookup(id).map(|el| self.text_content(el))
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(self.body, &mut out);
        out
    }

    pub fn snapshot(&self) -> NodeSnapshot {
        self.snapshot_node(self.body)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn push_child(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    fn detach_children(&mut self, element: NodeId) {
        let children = std::mem::take(&mut self.nodes[element.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    fn write_attribute(&mut self, element: NodeId, name: &str, value: &str) {
        if let NodeKind::Element { attributes, .. } = &mut self.nodes[element.0].kind {
            match attributes.iter_mut().find(|(k, _)| k == name) {
                Some(slot) => slot.1 = value.to_string(),
                None => attributes.push((name.to_string(), value.to_string())),
            }
        }
    }

    fn record(&mut self, target: NodeId, kind: MutationKind) {
        self.journal.push(Mutation { target, kind });
    }

    fn find_by_id(&self, from: NodeId, id: &str) -> Option<NodeId> {
        let node = self.node(from);
        if let NodeKind::Element { attributes, .. } = &node.kind {
            if attributes.iter().any(|(k, v)| k == "id" && v == id) {
                return Some(from);
            }
        }
        node.children
            .iter()
            .find_map(|&child| self.find_by_id(child, id))
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        match &node.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for &child in &node.children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        match &node.kind {
            NodeKind::Text(text) => out.push_str(&escape_html(text)),
            NodeKind::Element {
                tag,
                attributes,
                display,
            } => {
                out.push('<');
                out.push_str(tag);
                let mut style_written = false;
                for (name, value) in attributes {
                    let value = match display {
                        Some(display) if name == "style" => {
                            style_written = true;
                            merge_display(value, *display)
                        }
                        _ => value.clone(),
                    };
                    out.push_str(&format!(" {}=\"{}\"", name, escape_html(&value)));
                }
                if let (Some(display), false) = (display, style_written) {
                    out.push_str(&format!(" style=\"display: {}\"", display.as_css()));
                }
                out.push('>');
                if is_void_element(tag) {
                    return;
                }
                for &child in &node.children {
                    self.write_html(child, out);
                }
                out.push_str(&format!("</{}>", tag));
            }
        }
    }

    fn snapshot_node(&self, id: NodeId) -> NodeSnapshot {
        let node = self.node(id);
        match &node.kind {
            NodeKind::Text(text) => NodeSnapshot::Text(text.clone()),
            NodeKind::Element {
                tag,
                attributes,
                display,
            } => NodeSnapshot::Element {
                tag: tag.clone(),
                attributes: attributes.iter().cloned().collect(),
                display: *display,
                children: node
                    .children
                    .iter()
                    .map(|&child| self.snapshot_node(child))
                    .collect(),
            },
        }
    }
}

/// Sets `display` inside an inline style, replacing any earlier declaration.
fn merge_display(style: &str, display: Display) -> String {
    let display = format!("display: {}", display.as_css());
    let mut declarations: Vec<&str> = style
        .split(';')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .filter(|d| {
            d.split(':')
                .next()
                .map(|property| property.trim() != "display")
                .unwrap_or(true)
        })
        .collect();
    declarations.push(&display);
    declarations.join("; ")
}

/// Serializable view of a document subtree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeSnapshot {
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        display: Option<Display>,
        children: Vec<NodeSnapshot>,
    },
    Text(String),
}

impl ElementRegistry for Document {
    type Handle = NodeId;

    fn lookup(&self, id: &str) -> Option<NodeId> {
        self.find_by_id(self.body, id)
    }

    fn page_marker(&self) -> Option<String> {
        self.attribute(self.body, "data-page")
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn parent(&self, element: NodeId) -> Option<NodeId> {
        self.node(element).parent
    }

    fn set_text(&mut self, element: NodeId, text: &str) {
        self.detach_children(element);
        if !text.is_empty() {
            self.push_child(element, NodeKind::Text(text.to_string()));
        }
        self.record(element, MutationKind::SetText(text.to_string()));
    }

    fn clear_children(&mut self, element: NodeId) {
        self.detach_children(element);
        self.record(element, MutationKind::ClearChildren);
    }

    fn append_paragraph(&mut self, element: NodeId, text: &str) {
        let p = self.push_child(
            element,
            NodeKind::Element {
                tag: "p".to_string(),
                attributes: Vec::new(),
                display: None,
            },
        );
        self.push_child(p, NodeKind::Text(text.to_string()));
        self.record(element, MutationKind::AppendParagraph(text.to_string()));
    }

    fn attribute(&self, element: NodeId, name: &str) -> Option<String> {
        match &self.node(element).kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone()),
            NodeKind::Text(_) => None,
        }
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) {
        self.write_attribute(element, name, value);
        self.record(
            element,
            MutationKind::SetAttribute {
                name: name.to_string(),
                value: value.to_string(),
            },
        );
    }

    fn remove_attribute(&mut self, element: NodeId, name: &str) {
        if let NodeKind::Element { attributes, .. } = &mut self.nodes[element.0].kind {
            attributes.retain(|(k, _)| k != name);
        }
        self.record(
            element,
            MutationKind::RemoveAttribute {
                name: name.to_string(),
            },
        );
    }

    fn set_display(&mut self, element: NodeId, display: Display) {
        if let NodeKind::Element { display: slot, .. } = &mut self.nodes[element.0].kind {
            *slot = Some(display);
        }
        self.record(element, MutationKind::SetDisplay(display));
    }
}
