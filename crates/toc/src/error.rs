use docnav_traits::DomError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TocError {
    #[error("Content root '#{0}' (or its first child) was not found")]
    ContentRootNotFound(String),
    #[error("ToC mount element '#{0}' was not found")]
    MountNotFound(String),
    #[error("Layout container '#{0}' was not found")]
    LayoutNotFound(String),
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),
}
