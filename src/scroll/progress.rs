//! Scroll-progress mapping for pinned regions.
//!
//! A pinned region is a span of the document over which an element stays visually fixed while
//! the user keeps scrolling. [`scroll_progress`] turns the raw scroll offset into a normalized
//! value in `[0, 1]` describing how far through that span the user is.

use crate::foundation::{
    core::{Viewport, ensure_finite},
    error::{LandkitError, LandkitResult},
};

/// Document-relative span owned by the host layout.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PinnedRegion {
    pub start: f64,  // px from document top
    pub height: f64, // total region height, including the viewport-sized sticky part
}

impl PinnedRegion {
    pub fn new(start: f64, height: f64) -> LandkitResult<Self> {
        let region = Self { start, height };
        region.validate()?;
        Ok(region)
    }

    pub fn validate(&self) -> LandkitResult<()> {
        ensure_finite("pinned region start", self.start)?;
        ensure_finite("pinned region height", self.height)?;
        if self.height < 0.0 {
            return Err(LandkitError::validation(
                "pinned region height must be >= 0",
            ));
        }
        Ok(())
    }

    /// Scroll distance over which progress runs from 0 to 1 (never below 1px).
    pub fn scrollable(&self, viewport_height: f64) -> f64 {
        (self.height - viewport_height).max(1.0)
    }

    /// Offset at which progress first reaches 1.
    pub fn end_offset(&self, viewport_height: f64) -> f64 {
        self.start + self.scrollable(viewport_height)
    }

    pub fn progress(&self, viewport: &Viewport) -> f64 {
        scroll_progress(viewport.scroll_y, self.start, self.height, viewport.height)
    }
}

/// Maps a scroll offset onto `[0, 1]` across a pinned region.
///
/// Pure and unchecked: callers must reject non-finite inputs first. When the region is no
/// taller than the viewport the scrollable span floors at 1px, so progress saturates one pixel
/// past `region_start`.
pub fn scroll_progress(
    scroll_offset: f64,
    region_start: f64,
    region_height: f64,
    viewport_height: f64,
) -> f64 {
    let scrollable = (region_height - viewport_height).max(1.0);
    let scrolled = (scroll_offset - region_start).max(0.0);
    (scrolled / scrollable).min(1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/progress.rs"]
mod tests;
