//! TocMaker: the table-of-contents API for JavaScript.

use crate::document::WebDocument;
use docnav_toc::{BlockOptions, TocBuilder, WingOptions};
use wasm_bindgen::prelude::*;

/// Builds the page outline on construction and renders it on demand.
///
/// Render calls never throw: a missing mount element or layout container is
/// logged and the call returns `false`.
///
/// # Example
///
/// ```javascript
/// window.addEventListener("load", () => {
///   const toc = new TocMaker(4);
///   toc.buildBlock("tock", false, "Titles");
///   toc.buildWing("tocw", false, false, "Title", 8, 4);
/// });
/// ```
#[wasm_bindgen]
pub struct TocMaker {
    inner: TocBuilder<WebDocument>,
}

#[wasm_bindgen]
impl TocMaker {
    /// Scan the headings of the page, up to `max_level` (default 4).
    #[wasm_bindgen(constructor)]
    pub fn new(max_level: Option<u8>) -> Result<TocMaker, JsValue> {
        let doc = WebDocument::new()?;
        Ok(Self {
            inner: TocBuilder::new(doc, max_level),
        })
    }

    /// Number of headings in the outline.
    #[wasm_bindgen(getter, js_name = outlineLength)]
    pub fn outline_length(&self) -> usize {
        self.inner.outline().len()
    }

    /// Deepest heading level present on the page.
    #[wasm_bindgen(getter, js_name = curMaxLevel)]
    pub fn cur_max_level(&self) -> u8 {
        self.inner.outline().cur_max_level()
    }

    /// Render the inline block into `block_id`.
    ///
    /// Unset arguments fall back to the element's `data-use_number` and
    /// `data-block_title` attributes.
    #[wasm_bindgen(js_name = buildBlock)]
    pub fn build_block(
        &self,
        block_id: &str,
        use_number: Option<bool>,
        block_title: Option<String>,
    ) -> bool {
        let options = BlockOptions {
            use_number,
            block_title,
        };
        match self.inner.build_block(block_id, &options) {
            Ok(rendered) => rendered.is_some(),
            Err(e) => {
                log::warn!("ToC block not rendered: {e}");
                false
            }
        }
    }

    /// Render the floating wing; `wing_id` supplies `data-*` fallbacks.
    ///
    /// The wing follows resize, scroll and sidebar-toggle events for the
    /// lifetime of the page.
    #[wasm_bindgen(js_name = buildWing)]
    pub fn build_wing(
        &self,
        wing_id: &str,
        use_number: Option<bool>,
        use_title_name: Option<bool>,
        root_title: Option<String>,
        bar_unit_size: Option<u32>,
        wing_left_margin: Option<u32>,
    ) -> bool {
        let options = WingOptions {
            use_number,
            use_title_name,
            root_title,
            bar_unit_size,
            wing_left_margin,
        };
        match self.inner.build_wing(wing_id, &options) {
            Ok(Some(wing)) => {
                wing.forget();
                true
            }
            Ok(None) => false,
            Err(e) => {
                log::warn!("ToC wing not rendered: {e}");
                false
            }
        }
    }
}
