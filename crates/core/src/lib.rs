//! # docnav-core
//!
//! Platform-agnostic wiring of the documentation page widgets:
//! - **config**: [`SiteConfig`], the mount ids, layout ids and widget options
//! - **page**: page-load drivers that run each widget and log its failures
//! - **error**: the unified [`NavError`]
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**. The page is reached through
//! the [`Document`] port and the tag index through a caller-supplied fetch
//! function, so everything here runs against
//! [`HeadlessDocument`](traits::HeadlessDocument) as well as the browser.

// Re-export foundation crates
pub use docnav_traits as traits;
pub use docnav_types as types;

// Re-export widget crates
pub use docnav_tags as tags;
pub use docnav_toc as toc;

pub mod config;
pub mod error;
pub mod page;

pub use config::SiteConfig;
pub use error::NavError;
pub use page::{AttachedToc, attach_tag_cloud, attach_toc};

pub use docnav_tags::{TagCloud, TagError, post_href};
pub use docnav_toc::{
    BlockOptions, PageLayout, TocBuilder, TocError, Wing, WingOptions, WingPlacement,
};
pub use docnav_traits::{Document, DomError, EventKind, EventTarget, Subscription};
pub use docnav_types::{Anchor, Outline, OutlineEntry, PostRef, Rect, TagIndex};
