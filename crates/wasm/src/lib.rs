//! WebAssembly bindings for the docnav page widgets.
//!
//! This crate runs the tag cloud and the table-of-contents widgets in the
//! browser, after the page produced by the site generator has loaded.
//!
//! # Architecture
//!
//! The widgets themselves live in platform-agnostic crates and reach the page
//! only through the `Document` port. This crate supplies the browser side:
//!
//! - `document` - `WebDocument`, the port implemented over `web-sys`
//! - `fetch` - loading the tag index with the Fetch API
//! - `maker` - `TocMaker`, the table-of-contents class for JavaScript
//! - `error` - Error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! import init, { mountWidgets } from './docnav_wasm.js';
//!
//! await init();
//!
//! window.addEventListener("load", () => {
//!   mountWidgets({ max_level: 4, wing: { use_number: true } });
//! });
//! ```

mod document;
mod error;
mod fetch;
mod maker;

pub use document::WebDocument;
pub use error::{DocnavError, ErrorCode};
pub use maker::TocMaker;

use docnav_core::{SiteConfig, attach_tag_cloud, attach_toc};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// Initialize the WASM module.
///
/// This function sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the docnav-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn parse_config(config: JsValue) -> Result<SiteConfig, DocnavError> {
    if config.is_undefined() || config.is_null() {
        return Ok(SiteConfig::default());
    }
    let config: SiteConfig = serde_wasm_bindgen::from_value(config)?;
    config.validate()?;
    Ok(config)
}

/// Mount every enabled widget on the current page.
///
/// The ToC block and wing are rendered synchronously. The returned Promise
/// resolves to the number of rendered tags once the tag index has been
/// fetched (0 when the page has no tag cloud or the fetch failed).
///
/// Only an invalid configuration object throws; every widget failure is
/// logged and skipped.
#[wasm_bindgen(js_name = mountWidgets)]
pub fn mount_widgets(config: JsValue) -> Result<js_sys::Promise, JsValue> {
    let config = parse_config(config)?;
    Ok(mount(config)?)
}

/// Render the tag cloud into `mount_id` (default `Tags`) from the index at
/// `path` (default `tag2posts.json`).
#[wasm_bindgen(js_name = renderTagCloud)]
pub fn render_tag_cloud(
    mount_id: Option<String>,
    path: Option<String>,
) -> Result<js_sys::Promise, JsValue> {
    let mut config = SiteConfig {
        enable_block: false,
        enable_wing: false,
        ..SiteConfig::default()
    };
    if let Some(mount_id) = mount_id {
        config.tag_mount_id = mount_id;
    }
    if let Some(path) = path {
        config.tag_index_path = path;
    }
    config.validate().map_err(DocnavError::from)?;
    Ok(mount(config)?)
}

fn mount(config: SiteConfig) -> Result<js_sys::Promise, DocnavError> {
    let doc = WebDocument::new()?;

    if config.enable_block || config.enable_wing {
        let attached = attach_toc(&doc, &config);
        if let Some(wing) = attached.wing {
            wing.forget();
        }
    }

    Ok(future_to_promise(async move {
        let count = attach_tag_cloud(&doc, &config, |url| async move {
            fetch::fetch_text(&url).await
        })
        .await;
        Ok(JsValue::from(count.unwrap_or(0) as u32))
    }))
}
