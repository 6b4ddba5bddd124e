use docnav_traits::DomError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("Tag index is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Tag cloud mount element '#{0}' was not found")]
    MountNotFound(String),
    #[error("Failed to fetch the tag index '{path}': {message}")]
    Fetch { path: String, message: String },
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),
}
