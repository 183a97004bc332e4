//! Slide navigation state
//!
//! A bounded page index. Every operation keeps `0 <= current < page_count`.

/// Tracks which of a fixed number of pages is active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideController {
    current: usize,
    page_count: usize,
}

impl SlideController {
    /// Create a controller positioned on the first page
    ///
    /// A page count of zero is treated as one.
    pub fn new(page_count: usize) -> Self {
        Self {
            current: 0,
            page_count: page_count.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == self.page_count - 1
    }

    pub fn go_to_first(&mut self) {
        self.current = 0;
    }

    /// Move forward one page; no-op on the last page
    pub fn advance(&mut self) {
        if self.current < self.page_count - 1 {
            self.current += 1;
        }
    }

    /// Move back one page; no-op on the first page
    pub fn retreat(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Jump directly to `index`
    ///
    /// Out-of-range indices are rejected: the position is left unchanged and
    /// `false` is returned. They are never clamped.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.page_count {
            return false;
        }
        self.current = index;
        true
    }
}
