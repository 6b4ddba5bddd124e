//! # docnav
//!
//! Navigation widgets for statically generated documentation sites (mdBook
//! layout), run in the reader's browser after the page has loaded:
//!
//! - a **tag cloud** rendered from a precomputed `tag2posts.json` index
//! - a **table of contents** built from the headings of the page, shown as an
//!   inline block or as a floating "wing" that follows the scroll position
//!
//! The widgets reach the page only through the [`Document`] port.
//! [`HeadlessDocument`] implements it in memory; the `docnav-wasm` crate
//! implements it over `web-sys` and exposes the widgets to JavaScript.
//!
//! ```
//! use docnav::{Document, HeadlessDocument, SiteConfig, attach_toc};
//!
//! let doc = HeadlessDocument::new();
//! let body = doc.body();
//! let wrapper = doc.append_element(&body, "div").unwrap();
//! doc.set_attribute(&wrapper, "id", "page-wrapper").unwrap();
//! let content = doc.append_element(&wrapper, "div").unwrap();
//! doc.set_attribute(&content, "id", "content").unwrap();
//! let main = doc.append_element(&content, "main").unwrap();
//! let heading = doc.append_element(&main, "h1").unwrap();
//! doc.append_text(&heading, "Guide").unwrap();
//!
//! let attached = attach_toc(&doc, &SiteConfig::default());
//! assert_eq!(attached.toc.outline().len(), 1);
//! ```

pub use docnav_core::*;

pub use docnav_traits::{HeadlessDocument, NodeId};
