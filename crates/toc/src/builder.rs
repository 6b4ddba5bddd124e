//! TocBuilder: the entry point of the ToC widgets.

use crate::block::render_block;
use crate::error::TocError;
use crate::layout::PageLayout;
use crate::options::{BlockOptions, WingOptions};
use crate::outline::{effective_max_level, extract_outline};
use crate::wing::{Wing, render_wing, required_width};
use docnav_traits::Document;
use docnav_types::Outline;

/// Scans the page headings once and renders them on demand.
///
/// # Example
///
/// ```ignore
/// let toc = TocBuilder::new(doc, Some(4));
/// toc.build_block("tock", &BlockOptions::default())?;
/// if let Some(wing) = toc.build_wing("tocw", &WingOptions::default())? {
///     wing.forget();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TocBuilder<D: Document> {
    doc: D,
    layout: PageLayout,
    max_level: u8,
    outline: Outline,
}

impl<D: Document> TocBuilder<D> {
    /// Builds the outline of the page using the default mdBook layout.
    ///
    /// `max_level` defaults to 4 when absent or zero.
    pub fn new(doc: D, max_level: Option<u8>) -> Self {
        Self::with_layout(doc, max_level, PageLayout::default())
    }

    pub fn with_layout(doc: D, max_level: Option<u8>, layout: PageLayout) -> Self {
        let max_level = effective_max_level(max_level);
        let outline = match layout.content_main(&doc) {
            Some(main) => extract_outline(&doc, &main, max_level).unwrap_or_else(|e| {
                log::warn!("Failed to build the page outline: {e}");
                Outline::default()
            }),
            None => {
                log::warn!("{}", TocError::ContentRootNotFound(layout.content_id.clone()));
                Outline::default()
            }
        };
        log::debug!(
            "outline has {} entries, deepest level {}",
            outline.len(),
            outline.cur_max_level()
        );

        Self {
            doc,
            layout,
            max_level,
            outline,
        }
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Renders the inline block into the element `mount_id`.
    ///
    /// Returns `Ok(None)` without touching the page when the outline is empty.
    pub fn build_block(
        &self,
        mount_id: &str,
        options: &BlockOptions,
    ) -> Result<Option<D::Element>, TocError> {
        if self.outline.is_empty() {
            log::debug!("empty outline, skipping the ToC block");
            return Ok(None);
        }

        let doc = &self.doc;
        let mount = doc
            .element_by_id(mount_id)
            .ok_or_else(|| TocError::MountNotFound(mount_id.to_string()))?;

        let config = options.resolve(|key| doc.data(&mount, key));
        let panel = render_block(doc, &self.outline, &config)?;
        doc.append_child(&mount, &panel)?;
        Ok(Some(panel))
    }

    /// Renders the floating wing into the layout container and subscribes it
    /// to resize, scroll, sidebar-toggle and hover events.
    ///
    /// The element `mount_id` only supplies `data-*` configuration. Returns
    /// `Ok(None)` without touching the page when the outline is empty.
    pub fn build_wing(
        &self,
        mount_id: &str,
        options: &WingOptions,
    ) -> Result<Option<Wing<D>>, TocError> {
        if self.outline.is_empty() {
            log::debug!("empty outline, skipping the ToC wing");
            return Ok(None);
        }

        let doc = &self.doc;
        let wrapper = self
            .layout
            .page_wrapper(doc)
            .ok_or_else(|| TocError::LayoutNotFound(self.layout.page_wrapper_id.clone()))?;
        // The wing is absolutely positioned against the layout container.
        doc.set_style(&wrapper, "position", "relative")?;

        let mount = doc
            .element_by_id(mount_id)
            .ok_or_else(|| TocError::MountNotFound(mount_id.to_string()))?;

        let config = options.resolve(|key| doc.data(&mount, key));
        let rendered = render_wing(doc, &self.outline, &config)?;
        let required = required_width(self.outline.cur_max_level(), &config);

        // Mounted only once placed and subscribed; a failed attach leaves no trace.
        let wing = Wing::attach(doc, &self.layout, rendered, required)?;
        doc.append_child(&wrapper, wing.wrap())?;
        Ok(Some(wing))
    }
}
