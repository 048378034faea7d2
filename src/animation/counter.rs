use crate::{
    animation::ease::Ease,
    foundation::{
        core::ensure_finite,
        error::{LandkitError, LandkitResult},
    },
};

pub const DEFAULT_COUNTER_DURATION_MS: f64 = 1400.0;

/// Count-up animation for a numeric stat, eased with [`Ease::OutCubic`].
///
/// Counters are idle until [`CounterAnimation::start`] is called (typically when the stat first
/// scrolls into view) and show `0` plus the suffix until then.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CounterAnimation {
    target: u64,
    suffix: String,
    duration_ms: f64,
    started_at_ms: Option<f64>,
}

impl CounterAnimation {
    pub fn new(target: u64, suffix: impl Into<String>, duration_ms: f64) -> LandkitResult<Self> {
        ensure_finite("counter duration", duration_ms)?;
        if duration_ms <= 0.0 {
            return Err(LandkitError::validation("counter duration must be > 0 ms"));
        }
        Ok(Self {
            target,
            suffix: suffix.into(),
            duration_ms,
            started_at_ms: None,
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn is_started(&self) -> bool {
        self.started_at_ms.is_some()
    }

    /// Starting twice keeps the first start time.
    pub fn start(&mut self, now_ms: f64) {
        if self.started_at_ms.is_none() {
            self.started_at_ms = Some(now_ms);
        }
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        match self.started_at_ms {
            None => 0.0,
            Some(start) => ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0),
        }
    }

    pub fn value_at(&self, now_ms: f64) -> u64 {
        let eased = Ease::OutCubic.apply(self.progress(now_ms));
        (eased * self.target as f64).round() as u64
    }

    pub fn text_at(&self, now_ms: f64) -> String {
        format!("{}{}", self.value_at(now_ms), self.suffix)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.is_started() && self.progress(now_ms) >= 1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/counter.rs"]
mod tests;
