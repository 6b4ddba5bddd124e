//! Defines the unified error type for all page-level operations.

use docnav_tags::TagError;
use docnav_toc::TocError;
use docnav_traits::DomError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Table of contents error: {0}")]
    Toc(#[from] TocError),
    #[error("Tag cloud error: {0}")]
    Tags(#[from] TagError),
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),
}

impl NavError {
    /// Missing mount points mean the page simply does not use a widget.
    pub fn is_missing_mount(&self) -> bool {
        matches!(
            self,
            NavError::Toc(TocError::MountNotFound(_)) | NavError::Tags(TagError::MountNotFound(_))
        )
    }
}
