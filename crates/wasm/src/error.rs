//! Error handling for WASM bindings.
//!
//! Converts docnav's error types into JavaScript-friendly errors.

use docnav_core::NavError;
use docnav_tags::TagError;
use docnav_toc::TocError;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration object
    Config,
    /// JSON serialization/deserialization error
    Json,
    /// Missing page element (mount point, content root, layout container)
    MissingElement,
    /// DOM operation failure
    Dom,
    /// Network failure while fetching the tag index
    Fetch,
    /// No browser environment (window or document missing)
    Environment,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Json => "JSON_ERROR",
            ErrorCode::MissingElement => "MISSING_ELEMENT",
            ErrorCode::Dom => "DOM_ERROR",
            ErrorCode::Fetch => "FETCH_ERROR",
            ErrorCode::Environment => "ENVIRONMENT_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because we need custom
/// conversion to JavaScript Error objects.
#[derive(Debug)]
pub struct DocnavError {
    code: ErrorCode,
    message: String,
}

impl DocnavError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn environment(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Environment, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TocError> for DocnavError {
    fn from(err: TocError) -> Self {
        let code = match &err {
            TocError::ContentRootNotFound(_)
            | TocError::MountNotFound(_)
            | TocError::LayoutNotFound(_) => ErrorCode::MissingElement,
            TocError::Dom(_) => ErrorCode::Dom,
        };
        Self::new(code, err.to_string())
    }
}

impl From<TagError> for DocnavError {
    fn from(err: TagError) -> Self {
        let code = match &err {
            TagError::Json(_) => ErrorCode::Json,
            TagError::MountNotFound(_) => ErrorCode::MissingElement,
            TagError::Fetch { .. } => ErrorCode::Fetch,
            TagError::Dom(_) => ErrorCode::Dom,
        };
        Self::new(code, err.to_string())
    }
}

impl From<NavError> for DocnavError {
    fn from(err: NavError) -> Self {
        match err {
            NavError::Config(msg) => Self::new(ErrorCode::Config, msg),
            NavError::Json(e) => Self::new(ErrorCode::Json, e.to_string()),
            NavError::Toc(e) => e.into(),
            NavError::Tags(e) => e.into(),
            NavError::Dom(e) => Self::new(ErrorCode::Dom, e.to_string()),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for DocnavError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::new(ErrorCode::Config, err.to_string())
    }
}

impl From<DocnavError> for JsValue {
    fn from(err: DocnavError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        // Add the error code as a property
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();

        js_error.into()
    }
}
