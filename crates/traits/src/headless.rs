//! An in-memory document.
//!
//! `HeadlessDocument` keeps a small element tree with scripted geometry
//! (bounding rects, viewport height, scroll offset) and a listener registry
//! that tests drive with [`HeadlessDocument::dispatch`]. It works in any
//! environment, including native builds where no browser is available.

use crate::dom::{Document, DomError, EventKind, EventTarget};
use crate::subscription::Subscription;
use docnav_types::Rect;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handle to a node of a [`HeadlessDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct ElementData {
    tag: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    rect: Rect,
    children: Vec<NodeId>,
}

#[derive(Debug)]
enum NodeKind {
    Element(ElementData),
    Text(String),
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
}

#[derive(Debug)]
struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
    viewport_height: f64,
    scroll_y: f64,
}

impl Tree {
    fn element(&self, id: NodeId) -> Result<&ElementData, DomError> {
        match self.nodes.get(id.0) {
            Some(Node {
                kind: NodeKind::Element(data),
                ..
            }) => Ok(data),
            _ => Err(DomError::ForeignNode),
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        match self.nodes.get_mut(id.0) {
            Some(Node {
                kind: NodeKind::Element(data),
                ..
            }) => Ok(data),
            _ => Err(DomError::ForeignNode),
        }
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { kind, parent: None });
        id
    }

    /// Elements reachable from the root, in document (pre-)order.
    fn attached_elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if let Ok(data) = self.element(id) {
                out.push(id);
                stack.extend(data.children.iter().rev().copied());
            }
        }
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.nodes.get(id.0).map(|n| &n.kind) {
            Some(NodeKind::Text(text)) => out.push_str(text),
            Some(NodeKind::Element(data)) => {
                for child in &data.children {
                    self.collect_text(*child, out);
                }
            }
            None => {}
        }
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes.get(id.0).and_then(|n| n.parent) {
            if let Ok(data) = self.element_mut(parent) {
                data.children.retain(|c| *c != id);
            }
        }
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.parent = None;
        }
    }

    fn is_ancestor(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut cursor = Some(of);
        while let Some(id) = cursor {
            if id == candidate {
                return true;
            }
            cursor = self.nodes.get(id.0).and_then(|n| n.parent);
        }
        false
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        match self.nodes.get(id.0).map(|n| &n.kind) {
            Some(NodeKind::Text(text)) => out.push_str(&escape(text)),
            Some(NodeKind::Element(data)) => {
                out.push('<');
                out.push_str(&data.tag);
                for (name, value) in &data.attributes {
                    out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
                }
                if !data.classes.is_empty() {
                    out.push_str(&format!(" class=\"{}\"", data.classes.join(" ")));
                }
                if !data.styles.is_empty() {
                    let style: Vec<String> = data
                        .styles
                        .iter()
                        .map(|(p, v)| format!("{p}: {v};"))
                        .collect();
                    out.push_str(&format!(" style=\"{}\"", style.join(" ")));
                }
                out.push('>');
                for child in &data.children {
                    self.write_html(*child, out);
                }
                out.push_str(&format!("</{}>", data.tag));
            }
            None => {}
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

type Handler = Rc<RefCell<Box<dyn FnMut()>>>;

struct Listener {
    id: u64,
    target: EventTarget<NodeId>,
    kind: EventKind,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// An in-memory [`Document`].
///
/// Clones share the same tree and listener registry.
#[derive(Clone)]
pub struct HeadlessDocument {
    tree: Rc<RefCell<Tree>>,
    registry: Rc<RefCell<Registry>>,
}

impl Default for HeadlessDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HeadlessDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree.borrow();
        f.debug_struct("HeadlessDocument")
            .field("nodes", &tree.nodes.len())
            .field("viewport_height", &tree.viewport_height)
            .field("scroll_y", &tree.scroll_y)
            .field("listeners", &self.registry.borrow().listeners.len())
            .finish()
    }
}

impl HeadlessDocument {
    /// An empty document with a `<body>` root and a 768px viewport.
    pub fn new() -> Self {
        let mut tree = Tree {
            nodes: Vec::new(),
            root: NodeId(0),
            viewport_height: 768.0,
            scroll_y: 0.0,
        };
        tree.root = tree.push(NodeKind::Element(ElementData {
            tag: "body".to_string(),
            ..ElementData::default()
        }));
        Self {
            tree: Rc::new(RefCell::new(tree)),
            registry: Rc::new(RefCell::new(Registry::default())),
        }
    }

    pub fn body(&self) -> NodeId {
        self.tree.borrow().root
    }

    /// Creates a `<tag>` element and appends it to `parent`.
    pub fn append_element(&self, parent: &NodeId, tag: &str) -> Result<NodeId, DomError> {
        let child = self.create_element(tag)?;
        self.append_child(parent, &child)?;
        Ok(child)
    }

    pub fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.tree.borrow().nodes.get(node.0).and_then(|n| n.parent)
    }

    /// Scripts the value later returned by [`Document::bounding_rect`].
    pub fn set_rect(&self, element: &NodeId, rect: Rect) -> Result<(), DomError> {
        self.tree.borrow_mut().element_mut(*element)?.rect = rect;
        Ok(())
    }

    pub fn set_viewport_height(&self, height: f64) {
        self.tree.borrow_mut().viewport_height = height;
    }

    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.tree.borrow_mut().scroll_y = scroll_y;
    }

    /// Fires `kind` on `target` and returns how many listeners ran.
    pub fn dispatch(&self, target: EventTarget<NodeId>, kind: EventKind) -> usize {
        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind && l.target == target)
            .map(|l| l.handler.clone())
            .collect();

        let mut ran = 0;
        for handler in &handlers {
            // A handler that re-dispatches its own event is not re-entered.
            if let Ok(mut handler) = handler.try_borrow_mut() {
                (&mut **handler)();
                ran += 1;
            }
        }
        ran
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Serializes `element` and its subtree as HTML.
    pub fn to_html(&self, element: &NodeId) -> String {
        let mut out = String::new();
        self.tree.borrow().write_html(*element, &mut out);
        out
    }
}

impl Document for HeadlessDocument {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let tree = self.tree.borrow();
        tree.attached_elements().into_iter().find(|node| {
            tree.element(*node)
                .map(|data| data.attributes.iter().any(|(k, v)| k == "id" && v == id))
                .unwrap_or(false)
        })
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        let tree = self.tree.borrow();
        tree.attached_elements()
            .into_iter()
            .filter(|node| {
                tree.element(*node)
                    .map(|data| data.classes.iter().any(|c| c == class))
                    .unwrap_or(false)
            })
            .collect()
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, DomError> {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(DomError::CreateElement {
                tag: tag.to_string(),
                message: "invalid tag name".to_string(),
            });
        }
        Ok(self.tree.borrow_mut().push(NodeKind::Element(ElementData {
            tag: tag.to_ascii_lowercase(),
            ..ElementData::default()
        })))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        let mut tree = self.tree.borrow_mut();
        tree.element(*parent)?;
        if tree.nodes.get(child.0).is_none() {
            return Err(DomError::ForeignNode);
        }
        if tree.is_ancestor(*child, *parent) {
            return Err(DomError::Js(
                "the new child is an ancestor of the parent".to_string(),
            ));
        }
        tree.detach(*child);
        tree.element_mut(*parent)?.children.push(*child);
        tree.nodes[child.0].parent = Some(*parent);
        Ok(())
    }

    fn append_text(&self, parent: &NodeId, text: &str) -> Result<(), DomError> {
        let mut tree = self.tree.borrow_mut();
        tree.element(*parent)?;
        let node = tree.push(NodeKind::Text(text.to_string()));
        tree.nodes[node.0].parent = Some(*parent);
        tree.element_mut(*parent)?.children.push(node);
        Ok(())
    }

    fn children(&self, element: &NodeId) -> Vec<NodeId> {
        let tree = self.tree.borrow();
        match tree.element(*element) {
            Ok(data) => data
                .children
                .iter()
                .copied()
                .filter(|c| tree.element(*c).is_ok())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    fn tag_name(&self, element: &NodeId) -> String {
        self.tree
            .borrow()
            .element(*element)
            .map(|data| data.tag.clone())
            .unwrap_or_default()
    }

    fn text_content(&self, element: &NodeId) -> String {
        let mut out = String::new();
        self.tree.borrow().collect_text(*element, &mut out);
        out
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        let tree = self.tree.borrow();
        let data = tree.element(*element).ok()?;
        if name == "class" {
            return (!data.classes.is_empty()).then(|| data.classes.join(" "));
        }
        data.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) -> Result<(), DomError> {
        let mut tree = self.tree.borrow_mut();
        let data = tree.element_mut(*element)?;
        if name == "class" {
            data.classes = value.split_whitespace().map(str::to_string).collect();
            return Ok(());
        }
        match data.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => data.attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn add_class(&self, element: &NodeId, class: &str) -> Result<(), DomError> {
        let mut tree = self.tree.borrow_mut();
        let data = tree.element_mut(*element)?;
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, element: &NodeId, class: &str) -> Result<(), DomError> {
        let mut tree = self.tree.borrow_mut();
        tree.element_mut(*element)?.classes.retain(|c| c != class);
        Ok(())
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.tree
            .borrow()
            .element(*element)
            .map(|data| data.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) -> Result<(), DomError> {
        let mut tree = self.tree.borrow_mut();
        let data = tree.element_mut(*element)?;
        match data.styles.iter_mut().find(|(p, _)| p == property) {
            Some((_, v)) => *v = value.to_string(),
            None => data.styles.push((property.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn style(&self, element: &NodeId, property: &str) -> Option<String> {
        let tree = self.tree.borrow();
        let data = tree.element(*element).ok()?;
        data.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.clone())
    }

    fn bounding_rect(&self, element: &NodeId) -> Rect {
        self.tree
            .borrow()
            .element(*element)
            .map(|data| data.rect)
            .unwrap_or_default()
    }

    fn viewport_height(&self) -> f64 {
        self.tree.borrow().viewport_height
    }

    fn scroll_y(&self) -> f64 {
        self.tree.borrow().scroll_y
    }

    fn listen(
        &self,
        target: EventTarget<NodeId>,
        kind: EventKind,
        handler: Box<dyn FnMut()>,
    ) -> Result<Subscription, DomError> {
        if let EventTarget::Element(node) = &target {
            self.tree.borrow().element(*node)?;
        }

        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push(Listener {
            id,
            target,
            kind,
            handler: Rc::new(RefCell::new(handler)),
        });

        let registry = Rc::downgrade(&self.registry);
        Ok(Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().listeners.retain(|l| l.id != id);
            }
        }))
    }
}
