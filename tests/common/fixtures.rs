//! mdBook-shaped pages on a [`HeadlessDocument`].

use docnav::{Document, DomError, HeadlessDocument, NodeId, Rect};

/// A generated page with handles to the elements tests poke at.
pub struct Page {
    pub doc: HeadlessDocument,
    pub wrapper: NodeId,
    pub nav_prev: NodeId,
    pub content: NodeId,
    pub main: NodeId,
    pub toggle: NodeId,
    pub headings: Vec<NodeId>,
}

impl Page {
    /// Scripts the widths the wing placement reads.
    pub fn set_widths(&self, content: f64, main: f64, nav_prev: f64) -> Result<(), DomError> {
        self.doc
            .set_rect(&self.content, Rect::new(0.0, 0.0, content, 2000.0))?;
        self.doc
            .set_rect(&self.main, Rect::new(0.0, 0.0, main, 2000.0))?;
        self.doc
            .set_rect(&self.nav_prev, Rect::new(0.0, 0.0, nav_prev, 40.0))
    }

    /// Scripts the viewport-relative top edge of every heading.
    pub fn set_heading_tops(&self, tops: &[f64]) -> Result<(), DomError> {
        for (heading, top) in self.headings.iter().zip(tops) {
            self.doc
                .set_rect(heading, Rect::new(0.0, *top, 600.0, 32.0))?;
        }
        Ok(())
    }

    /// Adds an empty `<div id="{id}">` to the body.
    pub fn add_mount(&self, id: &str) -> Result<NodeId, DomError> {
        with_id(&self.doc, &self.doc.body(), "div", id)
    }
}

fn with_id(
    doc: &HeadlessDocument,
    parent: &NodeId,
    tag: &str,
    id: &str,
) -> Result<NodeId, DomError> {
    let element = doc.append_element(parent, tag)?;
    doc.set_attribute(&element, "id", id)?;
    Ok(element)
}

/// Builds the mdBook chrome with one heading per entry of `levels`.
///
/// Heading `i` is `<h{level} id="s{i}"><a href="#s{i}">Section {i}</a></h{level}>`,
/// followed by a paragraph.
pub fn mdbook_page(levels: &[u8]) -> Result<Page, DomError> {
    let doc = HeadlessDocument::new();
    let body = doc.body();

    let buttons = doc.append_element(&body, "div")?;
    doc.add_class(&buttons, "left-buttons")?;
    let toggle = doc.append_element(&buttons, "button")?;

    let wrapper = with_id(&doc, &body, "div", "page-wrapper")?;
    let _menu = doc.append_element(&wrapper, "div")?;
    let nav = doc.append_element(&wrapper, "nav")?;
    let nav_prev = doc.append_element(&nav, "a")?;
    doc.add_class(&nav_prev, "nav-previous")?;
    let content = with_id(&doc, &wrapper, "div", "content")?;
    let main = doc.append_element(&content, "main")?;

    let mut headings = Vec::with_capacity(levels.len());
    for (i, level) in levels.iter().enumerate() {
        let heading = with_id(&doc, &main, &format!("h{level}"), &format!("s{i}"))?;
        let link = doc.append_element(&heading, "a")?;
        doc.add_class(&link, "header")?;
        doc.set_attribute(&link, "href", &format!("#s{i}"))?;
        doc.append_text(&link, &format!("Section {i}"))?;

        let paragraph = doc.append_element(&main, "p")?;
        doc.append_text(&paragraph, "Lorem ipsum")?;
        headings.push(heading);
    }

    Ok(Page {
        doc,
        wrapper,
        nav_prev,
        content,
        main,
        toggle,
        headings,
    })
}
