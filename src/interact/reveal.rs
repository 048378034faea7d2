//! One-shot "reveal on view" tracking.
//!
//! Targets are document-space rectangles measured by the host. Each update intersects them with
//! the (margin-adjusted) viewport; a target whose visible fraction reaches the threshold is
//! reported once and then dropped from observation.

use crate::foundation::{
    core::{Rect, Viewport, ensure_finite, ensure_finite_rect},
    error::{LandkitError, LandkitResult},
};

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.12;
pub const DEFAULT_COUNTER_THRESHOLD: f64 = 0.5;

/// Margins added to the viewport before intersecting. Negative values shrink it.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub fn bottom(px: f64) -> Self {
        Self {
            bottom: px,
            ..Self::default()
        }
    }

    pub fn apply(&self, root: Rect) -> Rect {
        Rect::new(
            root.x0 - self.left,
            root.y0 - self.top,
            root.x1 + self.right,
            root.y1 + self.bottom,
        )
    }

    fn validate(&self) -> LandkitResult<()> {
        for v in [self.top, self.right, self.bottom, self.left] {
            ensure_finite("root margin", v)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl ObserverOptions {
    pub fn reveal() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            root_margin: RootMargin::bottom(-40.0),
        }
    }

    pub fn counters() -> Self {
        Self {
            threshold: DEFAULT_COUNTER_THRESHOLD,
            root_margin: RootMargin::default(),
        }
    }

    pub fn validate(&self) -> LandkitResult<()> {
        ensure_finite("observer threshold", self.threshold)?;
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(LandkitError::validation(
                "observer threshold must be in [0, 1]",
            ));
        }
        self.root_margin.validate()
    }
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::reveal()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealTarget {
    pub id: String,
    pub rect: Rect,
    #[serde(default)]
    pub delay_ms: u32,
}

impl RevealTarget {
    pub fn validate(&self) -> LandkitResult<()> {
        if self.id.trim().is_empty() {
            return Err(LandkitError::layout("reveal target id must be non-empty"));
        }
        ensure_finite_rect(&format!("reveal target '{}'", self.id), self.rect)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Revealed {
    pub id: String,
    pub delay_ms: u32,
}

/// Fraction of `target` inside `root`, `0.0` when they do not touch.
///
/// Edge-adjacent rectangles count as touching; a zero-area target that touches `root` is fully
/// visible.
pub fn intersection_ratio(target: Rect, root: Rect) -> f64 {
    if !touches(target, root) {
        return 0.0;
    }
    let area = target.area();
    if area <= 0.0 {
        return 1.0;
    }
    (target.intersect(root).area() / area).clamp(0.0, 1.0)
}

#[derive(Clone, Debug)]
pub struct RevealObserver {
    options: ObserverOptions,
    pending: Vec<RevealTarget>,
    revealed: Vec<Revealed>,
}

impl RevealObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            pending: Vec::new(),
            revealed: Vec::new(),
        }
    }

    pub fn observe(&mut self, target: RevealTarget) {
        self.pending.push(target);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn revealed(&self) -> &[Revealed] {
        &self.revealed
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.iter().any(|r| r.id == id)
    }

    /// Returns targets revealed by this update, in observation order.
    pub fn update(&mut self, viewport: &Viewport) -> Vec<Revealed> {
        let root = self.options.root_margin.apply(viewport.rect());
        let threshold = self.options.threshold;

        let mut newly = Vec::new();
        self.pending.retain(|t| {
            if touches(t.rect, root) && intersection_ratio(t.rect, root) >= threshold {
                newly.push(Revealed {
                    id: t.id.clone(),
                    delay_ms: t.delay_ms,
                });
                false
            } else {
                true
            }
        });

        self.revealed.extend(newly.iter().cloned());
        newly
    }
}

fn touches(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

#[cfg(test)]
#[path = "../../tests/unit/interact/reveal.rs"]
mod tests;
