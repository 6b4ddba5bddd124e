//! Tag cloud for documentation pages.
//!
//! The index (`tag2posts.json`) maps every tag to the `[title, path]` pairs of
//! the posts carrying it. [`TagCloud`] renders it into a mount element, one
//! group per tag, in the key order of the document.

pub mod cloud;
pub mod error;
pub mod link;

pub use cloud::{DEFAULT_INDEX_PATH, DEFAULT_MOUNT_ID, TagCloud, parse_index};
pub use error::TagError;
pub use link::post_href;
