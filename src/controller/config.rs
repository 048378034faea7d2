use crate::{
    animation::counter::DEFAULT_COUNTER_DURATION_MS,
    foundation::{
        core::ensure_finite,
        error::{LandkitError, LandkitResult},
    },
    interact::{
        anchor::DEFAULT_ANCHOR_HEADER_OFFSET, header::DEFAULT_HEADER_SCROLL_THRESHOLD,
        hero::HeroConfig, menu::DEFAULT_MENU_BREAKPOINT, reveal::ObserverOptions,
    },
};

/// Tunables for [`PageController`](crate::PageController). Every field has a default, so a
/// config file only needs the values it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub header_scroll_threshold: f64,
    pub reveal: ObserverOptions,
    pub counters: ObserverOptions,
    pub counter_duration_ms: f64,
    pub hero: HeroConfig,
    pub menu_breakpoint: f64,
    pub anchor_header_offset: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            header_scroll_threshold: DEFAULT_HEADER_SCROLL_THRESHOLD,
            reveal: ObserverOptions::reveal(),
            counters: ObserverOptions::counters(),
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            hero: HeroConfig::default(),
            menu_breakpoint: DEFAULT_MENU_BREAKPOINT,
            anchor_header_offset: DEFAULT_ANCHOR_HEADER_OFFSET,
        }
    }
}

impl ControllerConfig {
    pub fn from_json(s: &str) -> LandkitResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn validate(&self) -> LandkitResult<()> {
        ensure_finite("header_scroll_threshold", self.header_scroll_threshold)?;
        ensure_finite("counter_duration_ms", self.counter_duration_ms)?;
        ensure_finite("menu_breakpoint", self.menu_breakpoint)?;
        ensure_finite("anchor_header_offset", self.anchor_header_offset)?;
        if self.counter_duration_ms <= 0.0 {
            return Err(LandkitError::validation("counter_duration_ms must be > 0"));
        }
        if self.menu_breakpoint <= 0.0 {
            return Err(LandkitError::validation("menu_breakpoint must be > 0"));
        }
        self.reveal.validate()?;
        self.counters.validate()?;
        self.hero.validate()
    }
}
