pub const DEFAULT_HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Sticky header "scrolled" flag: set once the page has moved past a small offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderState {
    threshold: f64,
    scrolled: bool,
}

impl HeaderState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Returns `true` when the flag flipped.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        let next = scroll_y > self.threshold;
        let changed = next != self.scrolled;
        self.scrolled = next;
        changed
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_SCROLL_THRESHOLD)
    }
}
