#![allow(dead_code)]

pub mod fixtures;

use docnav::{Document, HeadlessDocument, NodeId};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Bars of the wing cells, in outline order.
pub fn wing_bars(doc: &HeadlessDocument) -> Vec<NodeId> {
    doc.elements_by_class("tocw-a-bar")
}

/// Titles of the wing cells, in outline order.
pub fn wing_titles(doc: &HeadlessDocument) -> Vec<NodeId> {
    doc.elements_by_class("tocw-a-title")
}

/// Indexes of the cells marked as the reading position.
pub fn current_cells(doc: &HeadlessDocument) -> Vec<usize> {
    wing_titles(doc)
        .iter()
        .enumerate()
        .filter(|(_, title)| doc.has_class(title, "tocw-a-title-cur"))
        .map(|(i, _)| i)
        .collect()
}

pub fn visibility(doc: &HeadlessDocument, element: &NodeId) -> Option<String> {
    doc.style(element, "visibility")
}
