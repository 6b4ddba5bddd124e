//! Document trait for abstracting DOM access.
//!
//! The widgets query and mutate the host page only through this trait, so the
//! same outline and rendering code runs against the browser (`web-sys`) and
//! against [`crate::HeadlessDocument`] in tests.

use crate::subscription::Subscription;
use docnav_types::Rect;
use std::fmt::Debug;
use thiserror::Error;

/// Error type for document operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomError {
    #[error("Failed to create <{tag}> element: {message}")]
    CreateElement { tag: String, message: String },

    #[error("Element is not an HTML element: {0}")]
    NotHtmlElement(String),

    #[error("Failed to register '{event}' listener: {message}")]
    Listen { event: String, message: String },

    #[error("Node does not belong to this document")]
    ForeignNode,

    #[error("DOM operation failed: {0}")]
    Js(String),
}

/// Browser events the widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Resize,
    Scroll,
    Click,
    MouseEnter,
    MouseLeave,
}

impl EventKind {
    /// The DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Resize => "resize",
            EventKind::Scroll => "scroll",
            EventKind::Click => "click",
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
        }
    }
}

/// Where a listener is attached.
#[derive(Debug, Clone, PartialEq)]
pub enum EventTarget<E> {
    Window,
    Element(E),
}

/// A handle to the host page.
///
/// Implementations are cheap to clone; clones refer to the same page. Event
/// handlers capture a clone and run on the UI thread, so nothing here needs to
/// be `Send`.
///
/// # Implementations
///
/// - `WebDocument` (docnav-wasm): the live browser document via `web-sys`
/// - [`crate::HeadlessDocument`]: an in-memory tree with scripted geometry
pub trait Document: Clone + Debug + 'static {
    /// Handle to an element of this document.
    type Element: Clone + PartialEq + Debug + 'static;

    /// Looks up an attached element by its `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All attached elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    fn create_element(&self, tag: &str) -> Result<Self::Element, DomError>;

    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<(), DomError>;

    /// Appends a text node to `parent`.
    fn append_text(&self, parent: &Self::Element, text: &str) -> Result<(), DomError>;

    /// Element children only; text nodes are skipped.
    fn children(&self, element: &Self::Element) -> Vec<Self::Element>;

    fn first_element_child(&self, element: &Self::Element) -> Option<Self::Element> {
        self.children(element).into_iter().next()
    }

    /// Lowercase tag name.
    fn tag_name(&self, element: &Self::Element) -> String;

    /// Concatenated text of all descendant text nodes.
    fn text_content(&self, element: &Self::Element) -> String;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str)
    -> Result<(), DomError>;

    /// Reads the `data-{key}` attribute.
    fn data(&self, element: &Self::Element, key: &str) -> Option<String> {
        self.attribute(element, &format!("data-{key}"))
    }

    /// Writes the `data-{key}` attribute.
    fn set_data(&self, element: &Self::Element, key: &str, value: &str) -> Result<(), DomError> {
        self.set_attribute(element, &format!("data-{key}"), value)
    }

    fn add_class(&self, element: &Self::Element, class: &str) -> Result<(), DomError>;

    fn remove_class(&self, element: &Self::Element, class: &str) -> Result<(), DomError>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Sets an inline style property (`margin-left`, `visibility`, ...).
    fn set_style(&self, element: &Self::Element, property: &str, value: &str)
    -> Result<(), DomError>;

    /// Reads an inline style property; `None` when unset.
    fn style(&self, element: &Self::Element, property: &str) -> Option<String>;

    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Height of the viewport in CSS pixels.
    fn viewport_height(&self) -> f64;

    /// Vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;

    /// Registers `handler` for `kind` events on `target`.
    ///
    /// The listener stays attached until the returned [`Subscription`] is
    /// disposed or dropped.
    fn listen(
        &self,
        target: EventTarget<Self::Element>,
        kind: EventKind,
        handler: Box<dyn FnMut()>,
    ) -> Result<Subscription, DomError>;
}
