use crate::{
    animation::ease::{Ease, lerp},
    foundation::{
        core::ensure_finite,
        error::{LandkitError, LandkitResult},
    },
};

/// Tuning for the pinned hero cross-fade.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Vertical distance the phase-one copy travels upward over the full region.
    pub travel_px: f64,
    /// Raw progress above which the region counts as entered.
    pub boundary_threshold: f64,
    pub ease: Ease,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            travel_px: 80.0,
            boundary_threshold: 0.05,
            ease: Ease::Linear,
        }
    }
}

impl HeroConfig {
    pub fn validate(&self) -> LandkitResult<()> {
        ensure_finite("hero travel_px", self.travel_px)?;
        ensure_finite("hero boundary_threshold", self.boundary_threshold)?;
        if !(0.0..1.0).contains(&self.boundary_threshold) {
            return Err(LandkitError::validation(
                "hero boundary_threshold must be in [0, 1)",
            ));
        }
        Ok(())
    }
}

/// Presentation values for one hero progress sample.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HeroFrame {
    pub progress: f64,
    pub phase_one_opacity: f64,
    pub phase_two_opacity: f64,
    pub shift_px: f64,
    pub past_start: bool,
}

pub fn hero_frame(progress: f64, config: &HeroConfig) -> HeroFrame {
    let p = progress.clamp(0.0, 1.0);
    let eased = config.ease.apply(p);
    HeroFrame {
        progress: p,
        phase_one_opacity: 1.0 - eased,
        phase_two_opacity: eased,
        shift_px: lerp(0.0, -config.travel_px, eased),
        past_start: p > config.boundary_threshold,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/hero.rs"]
mod tests;
