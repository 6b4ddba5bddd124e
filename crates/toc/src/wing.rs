//! The floating ToC wing.
//!
//! ```text
//! div.tocw-wrap                              appended to the layout container
//!   div.tocw-box
//!     div.tocw-cell.tocw-each
//!       a.tocw-a
//!         div.tocw-a-bar                     width shrinks with depth
//!         div.opacity0.tocw-a-title.tocw-padl-{level}
//!           span.tocw-a-num                  {number}, optional
//!           span                             {title}
//! ```
//!
//! At rest only the bars show; hovering the panel swaps them for the titles.

use crate::error::TocError;
use crate::layout::PageLayout;
use crate::markup::{element, text_span};
use crate::options::WingConfig;
use crate::outline::OUTLINE_INDEX_KEY;
use crate::position::{WingCell, WingTracker};
use docnav_traits::{Document, DomError, EventKind, EventTarget, Subscription};
use docnav_types::Outline;

pub const WRAP_CLASS: &str = "tocw-wrap";
pub const BOX_CLASS: &str = "tocw-box";
pub const CELL_CLASS: &str = "tocw-cell";
pub const EACH_CLASS: &str = "tocw-each";
pub const LINK_CLASS: &str = "tocw-a";
pub const BAR_CLASS: &str = "tocw-a-bar";
pub const TITLE_CLASS: &str = "tocw-a-title";
pub const NUMBER_CLASS: &str = "tocw-a-num";
pub const HIDDEN_CLASS: &str = "opacity0";
pub const BAR_CURRENT_CLASS: &str = "tocw-a-bar-cur";
pub const TITLE_CURRENT_CLASS: &str = "tocw-a-title-cur";

/// A detached, freshly rendered wing.
#[derive(Debug, Clone)]
pub struct RenderedWing<E> {
    pub wrap: E,
    pub panel: E,
    pub cells: Vec<WingCell<E>>,
}

/// Width of the bar of a heading at `level`: the root level gets the widest.
pub fn bar_width(cur_max_level: u8, level: u8, bar_unit_size: u32) -> u32 {
    u32::from(cur_max_level.saturating_sub(level) + 1).saturating_mul(bar_unit_size)
}

/// Gap needed beside the content before the wing is shown.
pub fn required_width(cur_max_level: u8, config: &WingConfig) -> f64 {
    let bars = f64::from(cur_max_level) * f64::from(config.bar_unit_size);
    bars + f64::from(config.wing_left_margin)
}

pub fn render_wing<D: Document>(
    doc: &D,
    outline: &Outline,
    config: &WingConfig,
) -> Result<RenderedWing<D::Element>, DomError> {
    let panel = element(doc, "div", &[BOX_CLASS])?;
    let mut cells = Vec::with_capacity(outline.len());

    for entry in outline {
        let index = entry.index.to_string();

        let link = element(doc, "a", &[LINK_CLASS])?;
        doc.set_attribute(&link, "href", entry.anchor.as_str())?;
        doc.set_attribute(&link, "title", &entry.title)?;
        doc.set_data(&link, OUTLINE_INDEX_KEY, &index)?;

        let indent = format!("tocw-padl-{}", entry.level);
        let title = element(doc, "div", &[HIDDEN_CLASS, TITLE_CLASS, indent.as_str()])?;
        doc.set_data(&title, OUTLINE_INDEX_KEY, &index)?;
        if config.use_number && !entry.is_root() {
            if let Some(number) = entry.number {
                let num = text_span(doc, &number.to_string(), &[NUMBER_CLASS])?;
                doc.append_child(&title, &num)?;
            }
        }
        let name = match (&config.root_title, entry.is_root()) {
            (Some(root_title), true) => root_title.as_str(),
            _ => entry.title.as_str(),
        };
        let name = text_span(doc, name, &[])?;
        doc.append_child(&title, &name)?;

        let bar = element(doc, "div", &[BAR_CLASS])?;
        doc.set_data(&bar, OUTLINE_INDEX_KEY, &index)?;
        let width = bar_width(outline.cur_max_level(), entry.level, config.bar_unit_size);
        doc.set_style(&bar, "width", &format!("{width}px"))?;

        doc.append_child(&link, &bar)?;
        doc.append_child(&link, &title)?;

        let cell = element(doc, "div", &[CELL_CLASS, EACH_CLASS])?;
        doc.append_child(&cell, &link)?;
        doc.append_child(&panel, &cell)?;

        cells.push(WingCell {
            index: entry.index,
            bar,
            title,
        });
    }

    let wrap = element(doc, "div", &[WRAP_CLASS])?;
    doc.set_style(
        &wrap,
        "margin-left",
        &format!("{}px", config.wing_left_margin),
    )?;
    doc.append_child(&wrap, &panel)?;

    Ok(RenderedWing { wrap, panel, cells })
}

/// A mounted wing and its event listeners.
///
/// The listeners are detached when the handle is disposed or dropped; call
/// [`Wing::forget`] to keep them for the lifetime of the page.
#[derive(Debug)]
#[must_use = "dropping a Wing detaches its event listeners"]
pub struct Wing<D: Document> {
    tracker: WingTracker<D>,
    panel: D::Element,
    subscriptions: Vec<Subscription>,
}

impl<D: Document> Wing<D> {
    /// Places and focuses the wing once, then subscribes it to page events.
    pub(crate) fn attach(
        doc: &D,
        layout: &PageLayout,
        rendered: RenderedWing<D::Element>,
        required_width: f64,
    ) -> Result<Self, TocError> {
        let RenderedWing { wrap, panel, cells } = rendered;
        let tracker = WingTracker::new(doc.clone(), layout.clone(), wrap, cells, required_width);

        tracker.reposition()?;
        tracker.focus_current()?;

        let mut subscriptions = Vec::with_capacity(5);

        let t = tracker.clone();
        subscriptions.push(doc.listen(
            EventTarget::Window,
            EventKind::Resize,
            Box::new(move || t.on_resize()),
        )?);

        let t = tracker.clone();
        subscriptions.push(doc.listen(
            EventTarget::Window,
            EventKind::Scroll,
            Box::new(move || t.on_scroll()),
        )?);

        // Opening or closing the sidebar changes the content width.
        match layout.sidebar_toggle(doc) {
            Some(toggle) => {
                let t = tracker.clone();
                subscriptions.push(doc.listen(
                    EventTarget::Element(toggle),
                    EventKind::Click,
                    Box::new(move || t.on_resize()),
                )?);
            }
            None => log::debug!(
                "no .{} toggle found, the wing will not follow the sidebar",
                layout.sidebar_toggle_class
            ),
        }

        let t = tracker.clone();
        subscriptions.push(doc.listen(
            EventTarget::Element(panel.clone()),
            EventKind::MouseEnter,
            Box::new(move || t.on_enter()),
        )?);

        let t = tracker.clone();
        subscriptions.push(doc.listen(
            EventTarget::Element(panel.clone()),
            EventKind::MouseLeave,
            Box::new(move || t.on_leave()),
        )?);

        Ok(Self {
            tracker,
            panel,
            subscriptions,
        })
    }

    pub fn tracker(&self) -> &WingTracker<D> {
        &self.tracker
    }

    /// The positioned outer element.
    pub fn wrap(&self) -> &D::Element {
        self.tracker.wrap()
    }

    /// The hoverable panel holding the cells.
    pub fn panel(&self) -> &D::Element {
        &self.panel
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Detaches every listener. The rendered markup stays in place.
    pub fn dispose(self) {
        for subscription in self.subscriptions {
            subscription.dispose();
        }
    }

    /// Keeps the listeners attached for the lifetime of the page.
    pub fn forget(self) {
        for subscription in self.subscriptions {
            subscription.forget();
        }
    }
}
