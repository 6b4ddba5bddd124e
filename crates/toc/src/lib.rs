//! Table-of-contents widgets for documentation pages.
//!
//! [`TocBuilder`] scans the headings of the page once, on construction, and
//! renders the resulting [`Outline`](docnav_types::Outline) either as an inline
//! block ([`TocBuilder::build_block`]) or as a floating wing that follows the
//! scroll position ([`TocBuilder::build_wing`]).
//!
//! All DOM access goes through the [`Document`](docnav_traits::Document) port.

pub mod block;
pub mod builder;
pub mod error;
pub mod layout;
mod markup;
pub mod options;
pub mod outline;
pub mod position;
pub mod wing;

pub use builder::TocBuilder;
pub use error::TocError;
pub use layout::PageLayout;
pub use options::{BlockConfig, BlockOptions, WingConfig, WingOptions};
pub use outline::{DEFAULT_MAX_LEVEL, OUTLINE_INDEX_KEY, extract_outline};
pub use position::{WingGeometry, WingPlacement, WingTracker};
pub use wing::Wing;
