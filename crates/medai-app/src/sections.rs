//! Section registry and scroll controller state
//!
//! The registry is the fixed, ordered list of narrative panels. The
//! controller half tracks which panel is "current" and converts a
//! navigation request into exactly one scroll request; it never reads the
//! viewport back.

use medai_core::{Error, Result, Section, SECTIONS};

/// Ordered, immutable list of sections
#[derive(Debug, Clone, Copy)]
pub struct SectionRegistry {
    sections: &'static [Section],
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::new(&SECTIONS)
    }
}

impl SectionRegistry {
    pub const fn new(sections: &'static [Section]) -> Self {
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static Section> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Section> {
        self.sections.iter()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.title).collect()
    }

    /// Validate a navigation target
    pub fn check(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::index_out_of_range(index, self.len()))
        }
    }

    /// Next index, clamped at the last section
    pub fn next_index(&self, current: usize) -> usize {
        (current + 1).min(self.len().saturating_sub(1))
    }

    /// Previous index, clamped at the first section
    pub fn previous_index(&self, current: usize) -> usize {
        current.saturating_sub(1)
    }

    /// Reading progress as a percentage: `current / (N - 1) * 100`
    pub fn progress_percent(&self, current: usize) -> f64 {
        if self.len() <= 1 {
            return 100.0;
        }
        let last = (self.len() - 1) as f64;
        (current.min(self.len() - 1) as f64 / last) * 100.0
    }
}

/// Well-known section indices used by shortcuts
pub mod well_known {
    pub const HERO: usize = 0;
    pub const PROBLEM: usize = 1;
    pub const PIPELINE: usize = 2;
    pub const PLAYGROUND: usize = 3;
    pub const RESULTS: usize = 4;
    pub const ETHICS: usize = 5;
}

/// Viewport over the stacked section document
///
/// The renderer reports the panel heights and viewport size every frame; a
/// scroll request stores a target that the tick handler eases toward. Manual
/// scrolling moves the offset only and cancels any pending target.
#[derive(Debug, Clone, Default)]
pub struct DocumentViewState {
    /// First visible row of the document
    pub offset: u16,
    /// Section the viewport is travelling to
    target_section: Option<usize>,
    /// Panel heights in section order, as last laid out
    section_heights: Vec<u16>,
    /// Visible rows, as last laid out
    viewport_height: u16,
}

impl DocumentViewState {
    /// Record geometry from the last render
    pub fn set_layout(&mut self, section_heights: Vec<u16>, viewport_height: u16) {
        self.section_heights = section_heights;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn section_heights(&self) -> &[u16] {
        &self.section_heights
    }

    pub fn target_section(&self) -> Option<usize> {
        self.target_section
    }

    pub fn content_height(&self) -> u16 {
        self.section_heights
            .iter()
            .fold(0u16, |acc, h| acc.saturating_add(*h))
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height().saturating_sub(self.viewport_height)
    }

    /// Document row at which a section begins
    pub fn section_top(&self, index: usize) -> u16 {
        self.section_heights
            .iter()
            .take(index)
            .fold(0u16, |acc, h| acc.saturating_add(*h))
    }

    /// Bring a section into view; `smooth` eases over ticks, otherwise jumps
    pub fn scroll_to_section(&mut self, index: usize, smooth: bool) {
        if smooth && !self.section_heights.is_empty() {
            self.target_section = Some(index);
        } else if self.section_heights.is_empty() {
            // geometry unknown until the first frame; resolve on tick
            self.target_section = Some(index);
        } else {
            self.offset = self.section_top(index).min(self.max_offset());
            self.target_section = None;
        }
    }

    /// Advance a pending smooth scroll by one tick
    ///
    /// Returns true while the viewport is still moving.
    pub fn tick(&mut self) -> bool {
        let Some(index) = self.target_section else {
            return false;
        };
        if self.section_heights.is_empty() {
            return true;
        }

        let target = self.section_top(index).min(self.max_offset());
        if self.offset == target {
            self.target_section = None;
            return false;
        }

        // close a third of the distance per tick, at least one row
        let distance = self.offset.abs_diff(target);
        let step = (distance / 3).max(1);
        if self.offset < target {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        true
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.target_section = None;
        let next = (self.offset as i32 + delta).clamp(0, self.max_offset() as i32);
        self.offset = next as u16;
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.page_size() as i32));
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page_size() as i32);
    }

    pub fn scroll_to_top(&mut self) {
        self.target_section = None;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.target_section = None;
        self.offset = self.max_offset();
    }

    fn page_size(&self) -> u16 {
        self.viewport_height.saturating_sub(2).max(1)
    }
}
