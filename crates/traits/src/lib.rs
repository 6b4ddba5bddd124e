pub mod dom;
pub mod headless;
pub mod subscription;

pub use dom::{Document, DomError, EventKind, EventTarget};
pub use headless::{HeadlessDocument, NodeId};
pub use subscription::Subscription;
