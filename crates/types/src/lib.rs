pub mod document;
pub mod geometry;
pub mod ids;
pub mod tags;

pub use document::{Outline, OutlineBuilder, OutlineEntry, heading_level};
pub use geometry::Rect;
pub use ids::Anchor;
pub use tags::{PostRef, TagIndex};
