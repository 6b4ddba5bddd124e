//! The inline ToC block.
//!
//! ```text
//! div.tock-box
//!   div.tock-cell.tock-root          {block_title}
//!   div.tock-cell.tock-each
//!     a.tock-a.tock-padl-{level}
//!       span.tock-a-num              {number}, optional
//!       span                         {title}
//! ```

use crate::markup::{element, text_span};
use crate::options::BlockConfig;
use crate::outline::OUTLINE_INDEX_KEY;
use docnav_traits::{Document, DomError};
use docnav_types::Outline;

pub const BOX_CLASS: &str = "tock-box";
pub const CELL_CLASS: &str = "tock-cell";
pub const ROOT_CLASS: &str = "tock-root";
pub const EACH_CLASS: &str = "tock-each";
pub const LINK_CLASS: &str = "tock-a";
pub const NUMBER_CLASS: &str = "tock-a-num";

/// Renders the block for `outline`, detached; the caller mounts it.
///
/// The root heading is represented by the `block_title` cell and gets no
/// link of its own.
pub fn render_block<D: Document>(
    doc: &D,
    outline: &Outline,
    config: &BlockConfig,
) -> Result<D::Element, DomError> {
    let panel = element(doc, "div", &[BOX_CLASS])?;

    let root = element(doc, "div", &[CELL_CLASS, ROOT_CLASS])?;
    doc.append_text(&root, &config.block_title)?;
    doc.append_child(&panel, &root)?;

    for entry in outline.iter().filter(|e| !e.is_root()) {
        let indent = format!("tock-padl-{}", entry.level);
        let link = element(doc, "a", &[LINK_CLASS, indent.as_str()])?;
        doc.set_attribute(&link, "href", entry.anchor.as_str())?;
        doc.set_attribute(&link, "title", &entry.title)?;
        doc.set_data(&link, OUTLINE_INDEX_KEY, &entry.index.to_string())?;

        if config.use_number {
            if let Some(number) = entry.number {
                let num = text_span(doc, &number.to_string(), &[NUMBER_CLASS])?;
                doc.append_child(&link, &num)?;
            }
        }
        let title = text_span(doc, &entry.title, &[])?;
        doc.append_child(&link, &title)?;

        let cell = element(doc, "div", &[CELL_CLASS, EACH_CLASS])?;
        doc.append_child(&cell, &link)?;
        doc.append_child(&panel, &cell)?;
    }

    Ok(panel)
}
