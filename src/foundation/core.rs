use crate::foundation::error::{LandkitError, LandkitResult};

pub use kurbo::{Point, Rect, Size};

/// Current viewport metrics, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub scroll_y: f64, // px from document top
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Negative offsets (elastic overscroll) are clamped to the document top.
    pub fn new(scroll_y: f64, width: f64, height: f64) -> LandkitResult<Self> {
        let mut vp = Self {
            scroll_y,
            width,
            height,
        };
        vp.validate()?;
        vp.scroll_y = vp.scroll_y.max(0.0);
        Ok(vp)
    }

    pub fn validate(&self) -> LandkitResult<()> {
        ensure_finite("scroll_y", self.scroll_y)?;
        ensure_finite("viewport width", self.width)?;
        ensure_finite("viewport height", self.height)?;
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LandkitError::validation(
                "viewport width/height must be > 0",
            ));
        }
        Ok(())
    }

    /// Visible document-space rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.width, self.scroll_y + self.height)
    }
}

pub fn ensure_finite(what: &str, v: f64) -> LandkitResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(LandkitError::validation(format!("{what} must be finite")))
    }
}

pub(crate) fn ensure_finite_rect(what: &str, r: Rect) -> LandkitResult<()> {
    for v in [r.x0, r.y0, r.x1, r.y1] {
        ensure_finite(what, v)?;
    }
    if r.x0 > r.x1 || r.y0 > r.y1 {
        return Err(LandkitError::validation(format!(
            "{what} rect is inverted (min > max)"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
