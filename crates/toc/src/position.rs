//! Placement and focus tracking for the wing.
//!
//! Both are recomputed from the current page state on every event, so the
//! handlers can fire any number of times in any order.

use crate::error::TocError;
use crate::layout::PageLayout;
use crate::outline::OUTLINE_INDEX_KEY;
use crate::wing::{BAR_CURRENT_CLASS, HIDDEN_CLASS, TITLE_CURRENT_CLASS};
use docnav_traits::Document;

/// Page measurements the wing placement depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WingGeometry {
    /// Width of the content container.
    pub content_width: f64,
    /// Width of the content root inside it.
    pub main_width: f64,
    pub nav_prev_width: Option<f64>,
    pub scroll_y: f64,
    pub viewport_height: f64,
}

/// Where the wing goes, or whether it stays hidden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WingPlacement {
    Visible {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    },
    Hidden,
}

impl WingGeometry {
    /// Free space left of the content root, minus the previous-page link.
    pub fn gap(&self) -> f64 {
        let gap = (self.content_width - self.main_width) * 0.5;
        gap - self.nav_prev_width.unwrap_or(0.0)
    }

    /// The wing is shown only when the gap is strictly wider than `required`.
    pub fn place(&self, required: f64) -> WingPlacement {
        let gap = self.gap();
        if gap > required {
            WingPlacement::Visible {
                left: self.nav_prev_width.unwrap_or(0.0),
                top: self.scroll_y,
                width: gap,
                height: self.viewport_height,
            }
        } else {
            WingPlacement::Hidden
        }
    }
}

/// A rendered wing cell: the bar and the title of one outline entry.
#[derive(Debug, Clone, PartialEq)]
pub struct WingCell<E> {
    pub index: usize,
    pub bar: E,
    pub title: E,
}

/// Keeps a rendered wing in sync with the page.
#[derive(Debug, Clone)]
pub struct WingTracker<D: Document> {
    doc: D,
    layout: PageLayout,
    wrap: D::Element,
    cells: Vec<WingCell<D::Element>>,
    required_width: f64,
}

impl<D: Document> WingTracker<D> {
    pub fn new(
        doc: D,
        layout: PageLayout,
        wrap: D::Element,
        cells: Vec<WingCell<D::Element>>,
        required_width: f64,
    ) -> Self {
        Self {
            doc,
            layout,
            wrap,
            cells,
            required_width,
        }
    }

    pub fn wrap(&self) -> &D::Element {
        &self.wrap
    }

    pub fn cells(&self) -> &[WingCell<D::Element>] {
        &self.cells
    }

    /// Minimum gap needed to show the wing: the widest bar plus the margin.
    pub fn required_width(&self) -> f64 {
        self.required_width
    }

    pub fn measure(&self) -> Result<WingGeometry, TocError> {
        let doc = &self.doc;
        let content = self
            .layout
            .content(doc)
            .ok_or_else(|| TocError::ContentRootNotFound(self.layout.content_id.clone()))?;
        let main = doc
            .first_element_child(&content)
            .ok_or_else(|| TocError::ContentRootNotFound(self.layout.content_id.clone()))?;

        Ok(WingGeometry {
            content_width: doc.bounding_rect(&content).width,
            main_width: doc.bounding_rect(&main).width,
            nav_prev_width: self.layout.nav_prev_width(doc),
            scroll_y: doc.scroll_y(),
            viewport_height: doc.viewport_height(),
        })
    }

    /// Shows the wing in the gap beside the content, or hides it when the gap
    /// is too narrow.
    pub fn reposition(&self) -> Result<WingPlacement, TocError> {
        let placement = self.measure()?.place(self.required_width);
        let doc = &self.doc;
        match placement {
            WingPlacement::Visible {
                left,
                top,
                width,
                height,
            } => {
                doc.set_style(&self.wrap, "height", &format!("{height}px"))?;
                doc.set_style(&self.wrap, "width", &format!("{width}px"))?;
                doc.set_style(&self.wrap, "top", &format!("{top}px"))?;
                doc.set_style(&self.wrap, "left", &format!("{left}px"))?;
                doc.set_style(&self.wrap, "visibility", "visible")?;
            }
            WingPlacement::Hidden => {
                doc.set_style(&self.wrap, "visibility", "hidden")?;
            }
        }
        Ok(placement)
    }

    /// Index of the first outlined heading whose top edge is still below the
    /// top of the viewport.
    pub fn current_index(&self) -> Option<usize> {
        let doc = &self.doc;
        let Some(main) = self.layout.content_main(doc) else {
            log::debug!("content root not found, no current heading");
            return None;
        };
        doc.children(&main)
            .into_iter()
            .filter(|part| doc.bounding_rect(part).top > 0.0)
            .find_map(|part| {
                doc.data(&part, OUTLINE_INDEX_KEY)
                    .and_then(|i| i.parse::<usize>().ok())
            })
    }

    /// Marks the cell of the current heading and clears every other cell.
    pub fn focus_current(&self) -> Result<Option<usize>, TocError> {
        let current = self.current_index();
        let doc = &self.doc;
        for cell in &self.cells {
            if Some(cell.index) == current {
                doc.add_class(&cell.title, TITLE_CURRENT_CLASS)?;
                doc.add_class(&cell.bar, BAR_CURRENT_CLASS)?;
            } else {
                doc.remove_class(&cell.title, TITLE_CURRENT_CLASS)?;
                doc.remove_class(&cell.bar, BAR_CURRENT_CLASS)?;
            }
        }
        Ok(current)
    }

    /// Hover state: full titles visible, bars hidden.
    pub fn show_titles(&self) -> Result<(), TocError> {
        for cell in &self.cells {
            self.doc.remove_class(&cell.title, HIDDEN_CLASS)?;
            self.doc.add_class(&cell.bar, HIDDEN_CLASS)?;
        }
        Ok(())
    }

    /// Resting state: bars visible, titles hidden.
    pub fn show_bars(&self) -> Result<(), TocError> {
        for cell in &self.cells {
            self.doc.add_class(&cell.title, HIDDEN_CLASS)?;
            self.doc.remove_class(&cell.bar, HIDDEN_CLASS)?;
        }
        Ok(())
    }

    pub(crate) fn on_resize(&self) {
        if let Err(e) = self.reposition() {
            log::warn!("Failed to reposition the ToC wing: {e}");
        }
    }

    pub(crate) fn on_scroll(&self) {
        self.on_resize();
        if let Err(e) = self.focus_current() {
            log::warn!("Failed to focus the current heading: {e}");
        }
    }

    pub(crate) fn on_enter(&self) {
        if let Err(e) = self.show_titles() {
            log::warn!("Failed to reveal ToC wing titles: {e}");
        }
    }

    pub(crate) fn on_leave(&self) {
        if let Err(e) = self.show_bars() {
            log::warn!("Failed to restore ToC wing bars: {e}");
        }
    }
}
