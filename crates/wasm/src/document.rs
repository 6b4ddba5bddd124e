//! The live browser document behind the [`Document`] port.

use crate::error::DocnavError;
use docnav_traits::{Document, DomError, EventKind, EventTarget, Subscription};
use docnav_types::Rect;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

fn js_err(err: JsValue) -> DomError {
    DomError::Js(format!("{:?}", err))
}

fn html(element: &Element) -> Result<&HtmlElement, DomError> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| DomError::NotHtmlElement(element.tag_name()))
}

/// [`Document`] over `web_sys::Window` and `web_sys::Document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebDocument {
    /// Binds to the global window and its document.
    pub fn new() -> Result<Self, DocnavError> {
        let window =
            web_sys::window().ok_or_else(|| DocnavError::environment("No window object available"))?;
        let document = window
            .document()
            .ok_or_else(|| DocnavError::environment("No document available"))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &web_sys::Window {
        &self.window
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

impl Document for WebDocument {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn create_element(&self, tag: &str) -> Result<Element, DomError> {
        self.document
            .create_element(tag)
            .map_err(|e| DomError::CreateElement {
                tag: tag.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), DomError> {
        parent.append_child(child).map(|_| ()).map_err(js_err)
    }

    fn append_text(&self, parent: &Element, text: &str) -> Result<(), DomError> {
        let node = self.document.create_text_node(text);
        parent.append_child(&node).map(|_| ()).map_err(js_err)
    }

    fn children(&self, element: &Element) -> Vec<Element> {
        let collection = element.children();
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn first_element_child(&self, element: &Element) -> Option<Element> {
        element.first_element_child()
    }

    fn tag_name(&self, element: &Element) -> String {
        element.tag_name().to_ascii_lowercase()
    }

    fn text_content(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<(), DomError> {
        element.set_attribute(name, value).map_err(js_err)
    }

    fn add_class(&self, element: &Element, class: &str) -> Result<(), DomError> {
        element.class_list().add_1(class).map_err(js_err)
    }

    fn remove_class(&self, element: &Element, class: &str) -> Result<(), DomError> {
        element.class_list().remove_1(class).map_err(js_err)
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) -> Result<(), DomError> {
        html(element)?
            .style()
            .set_property(property, value)
            .map_err(js_err)
    }

    fn style(&self, element: &Element, property: &str) -> Option<String> {
        html(element)
            .ok()?
            .style()
            .get_property_value(property)
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn bounding_rect(&self, element: &Element) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn listen(
        &self,
        target: EventTarget<Element>,
        kind: EventKind,
        handler: Box<dyn FnMut()>,
    ) -> Result<Subscription, DomError> {
        let target: web_sys::EventTarget = match target {
            EventTarget::Window => self.window.clone().into(),
            EventTarget::Element(element) => element.into(),
        };
        let event = kind.as_str();
        let closure = Closure::wrap(handler);

        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| DomError::Listen {
                event: event.to_string(),
                message: format!("{:?}", e),
            })?;

        // The closure must outlive the registration; it is dropped on detach.
        Ok(Subscription::new(move || {
            target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                .ok();
            drop(closure);
        }))
    }
}
