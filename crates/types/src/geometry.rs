/// A bounding box in CSS pixels, relative to the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A zero-height rect of the given width, placed at the origin.
    pub fn with_width(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// A zero-sized rect whose top edge sits at `top`.
    pub fn at_top(top: f64) -> Self {
        Self {
            top,
            ..Self::default()
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}
