//! Cyclic index over the reasons list

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonCarousel {
    current: usize,
    len: usize,
}

impl ReasonCarousel {
    /// An empty list is treated as a single entry
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len: len.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Advance, wrapping to the first reason after the last
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    /// Human-facing counter, e.g. "3 of 12"
    pub fn position_label(&self) -> String {
        format!("{} of {}", self.current + 1, self.len)
    }
}
