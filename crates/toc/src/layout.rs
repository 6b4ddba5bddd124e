//! Lookups into the host page chrome (mdBook layout).

use docnav_traits::Document;
use serde::{Deserialize, Serialize};

/// Identifiers of the page elements the widgets read from.
///
/// ```text
/// #page-wrapper                 layout container, hosts the wing
///   <div> ...                   first child
///   <nav>                       second child: page navigation
///     <a class="nav-previous">  its width is kept clear of the wing
///   #content                    content container
///     <main>                    content root, holds the headings
/// .left-buttons > <button>      sidebar toggle
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub content_id: String,
    pub page_wrapper_id: String,
    pub sidebar_toggle_class: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            content_id: "content".to_string(),
            page_wrapper_id: "page-wrapper".to_string(),
            sidebar_toggle_class: "left-buttons".to_string(),
        }
    }
}

impl PageLayout {
    pub fn content<D: Document>(&self, doc: &D) -> Option<D::Element> {
        doc.element_by_id(&self.content_id)
    }

    /// The element whose direct children are the page headings.
    pub fn content_main<D: Document>(&self, doc: &D) -> Option<D::Element> {
        self.content(doc)
            .and_then(|content| doc.first_element_child(&content))
    }

    pub fn page_wrapper<D: Document>(&self, doc: &D) -> Option<D::Element> {
        doc.element_by_id(&self.page_wrapper_id)
    }

    /// Width of the "previous page" link next to the content, if any.
    pub fn nav_prev_width<D: Document>(&self, doc: &D) -> Option<f64> {
        let wrapper = self.page_wrapper(doc)?;
        let nav = doc.children(&wrapper).into_iter().nth(1)?;
        let prev = doc.first_element_child(&nav)?;
        Some(doc.bounding_rect(&prev).width)
    }

    pub fn sidebar_toggle<D: Document>(&self, doc: &D) -> Option<D::Element> {
        let buttons = doc
            .elements_by_class(&self.sidebar_toggle_class)
            .into_iter()
            .next()?;
        doc.first_element_child(&buttons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav_traits::HeadlessDocument;
    use docnav_types::Rect;

    #[test]
    fn test_lookups_on_mdbook_shape() {
        let doc = HeadlessDocument::new();
        let body = doc.body();
        let wrapper = doc.append_element(&body, "div").unwrap();
        doc.set_attribute(&wrapper, "id", "page-wrapper").unwrap();
        let _menu = doc.append_element(&wrapper, "div").unwrap();
        let nav = doc.append_element(&wrapper, "nav").unwrap();
        let prev = doc.append_element(&nav, "a").unwrap();
        doc.set_rect(&prev, Rect::with_width(56.0)).unwrap();
        let content = doc.append_element(&wrapper, "div").unwrap();
        doc.set_attribute(&content, "id", "content").unwrap();
        let main = doc.append_element(&content, "main").unwrap();
        let buttons = doc.append_element(&body, "div").unwrap();
        doc.add_class(&buttons, "left-buttons").unwrap();
        let toggle = doc.append_element(&buttons, "button").unwrap();

        let layout = PageLayout::default();
        assert_eq!(layout.content(&doc), Some(content));
        assert_eq!(layout.content_main(&doc), Some(main));
        assert_eq!(layout.page_wrapper(&doc), Some(wrapper));
        assert_eq!(layout.nav_prev_width(&doc), Some(56.0));
        assert_eq!(layout.sidebar_toggle(&doc), Some(toggle));
    }

    #[test]
    fn test_lookups_on_bare_page() {
        let doc = HeadlessDocument::new();
        let layout = PageLayout::default();
        assert_eq!(layout.content_main(&doc), None);
        assert_eq!(layout.nav_prev_width(&doc), None);
        assert_eq!(layout.sidebar_toggle(&doc), None);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let layout: PageLayout = serde_json::from_str(r#"{"content_id": "body"}"#).unwrap();
        assert_eq!(layout.content_id, "body");
        assert_eq!(layout.page_wrapper_id, "page-wrapper");
    }
}
