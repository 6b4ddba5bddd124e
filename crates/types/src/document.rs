//! The page outline: an ordered summary of the headings of a page.

use crate::ids::Anchor;

/// Deepest heading level HTML knows about.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Maps an element tag name (`h1`..`h6`, any case) to its heading level.
pub fn heading_level(tag_name: &str) -> Option<u8> {
    match tag_name.to_ascii_lowercase().as_str() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// One heading of the page outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// 0-based position among the outlined headings, in document order.
    pub index: usize,
    /// Heading level (1 = h1, 2 = h2, etc.)
    pub level: u8,
    /// Position among the siblings of the same level. `None` for the first entry.
    pub number: Option<u32>,
    /// The in-page link to the heading.
    pub anchor: Anchor,
    /// The visible text of the heading.
    pub title: String,
}

impl OutlineEntry {
    /// The first heading of a page is its root title.
    pub fn is_root(&self) -> bool {
        self.index == 0
    }
}

/// The ordered headings of a page.
///
/// Built once through [`OutlineBuilder`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    entries: Vec<OutlineEntry>,
    cur_max_level: u8,
}

impl Default for Outline {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            cur_max_level: 1,
        }
    }
}

impl Outline {
    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutlineEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&OutlineEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The deepest level actually present (at least 1).
    pub fn cur_max_level(&self) -> u8 {
        self.cur_max_level
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a OutlineEntry;
    type IntoIter = std::slice::Iter<'a, OutlineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Accumulates headings in document order and assigns their numbers.
///
/// Every level keeps its own sibling counter. A heading bumps the counter of
/// its level and clears the counters of all deeper levels, so a sub-section
/// always starts at 1 while a section resumes its count after a sub-section.
#[derive(Debug, Default)]
pub struct OutlineBuilder {
    outline: Outline,
    counters: [u32; MAX_HEADING_LEVEL as usize + 1],
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a heading and returns the entry that was recorded.
    ///
    /// Levels outside `1..=6` are clamped into that range.
    pub fn push(&mut self, level: u8, anchor: Anchor, title: impl Into<String>) -> &OutlineEntry {
        let level = level.clamp(1, MAX_HEADING_LEVEL);
        let slot = usize::from(level);
        let index = self.outline.entries.len();

        let number = if index == 0 {
            None
        } else {
            self.counters[slot] += 1;
            Some(self.counters[slot])
        };
        for counter in &mut self.counters[slot + 1..] {
            *counter = 0;
        }

        if level > self.outline.cur_max_level {
            self.outline.cur_max_level = level;
        }

        self.outline.entries.push(OutlineEntry {
            index,
            level,
            number,
            anchor,
            title: title.into(),
        });
        &self.outline.entries[index]
    }

    pub fn len(&self) -> usize {
        self.outline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    pub fn finish(self) -> Outline {
        self.outline
    }
}
