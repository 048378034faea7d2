//! Page-lifetime owner of all interactive state.
//!
//! The host constructs one [`PageController`] once layout is known, forwards scroll, resize,
//! click and animation-frame events to it, and reads back a [`PresentationState`] to apply.
//! Inputs are validated here, so the pure helpers underneath never see non-finite values.

use std::collections::BTreeMap;

use crate::{
    animation::counter::CounterAnimation,
    controller::config::ControllerConfig,
    foundation::{
        core::{Viewport, ensure_finite},
        error::LandkitResult,
    },
    interact::{
        anchor::anchor_scroll_target,
        header::HeaderState,
        hero::{HeroFrame, hero_frame},
        menu::MobileMenu,
        reveal::{RevealObserver, RevealTarget, Revealed},
        theme::{Theme, ThemeStore, ThemeSwitch},
    },
    layout::model::PageLayout,
};

/// Everything the presentation layer needs to paint the current frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PresentationState {
    pub scroll_y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub hero: HeroFrame,
    pub header_scrolled: bool,
    pub menu_open: bool,
    pub theme: Theme,
    pub revealed: Vec<Revealed>,
    pub counters: BTreeMap<String, String>, // id -> current text
    pub animating: bool,
}

#[derive(Debug)]
pub struct PageController {
    config: ControllerConfig,
    layout: PageLayout,
    viewport: Viewport,
    now_ms: f64,
    hero: HeroFrame,
    header: HeaderState,
    menu: MobileMenu,
    theme: ThemeSwitch,
    reveal: RevealObserver,
    counter_observer: RevealObserver,
    counters: BTreeMap<String, CounterAnimation>,
    awaiting_start: Vec<String>, // seen, started by the next tick
}

impl PageController {
    /// Builds the controller and settles every piece of state against the initial viewport.
    pub fn new(
        layout: PageLayout,
        config: ControllerConfig,
        mut viewport: Viewport,
        store: Box<dyn ThemeStore>,
        system_theme: Option<Theme>,
    ) -> LandkitResult<Self> {
        layout.validate()?;
        config.validate()?;
        viewport.validate()?;
        viewport.scroll_y = viewport.scroll_y.max(0.0);

        let mut reveal = RevealObserver::new(config.reveal);
        for t in &layout.reveal {
            reveal.observe(t.clone());
        }

        let mut counter_observer = RevealObserver::new(config.counters);
        let mut counters = BTreeMap::new();
        for c in &layout.counters {
            counter_observer.observe(RevealTarget {
                id: c.id.clone(),
                rect: c.rect,
                delay_ms: 0,
            });
            counters.insert(
                c.id.clone(),
                CounterAnimation::new(c.target, c.suffix.clone(), config.counter_duration_ms)?,
            );
        }

        let mut this = Self {
            header: HeaderState::new(config.header_scroll_threshold),
            menu: MobileMenu::new(config.menu_breakpoint),
            hero: hero_frame(0.0, &config.hero),
            theme: ThemeSwitch::new(store, system_theme)?,
            config,
            layout,
            viewport,
            now_ms: 0.0,
            reveal,
            counter_observer,
            counters,
            awaiting_start: Vec::new(),
        };
        this.menu.on_viewport_width(viewport.width);
        this.recompute();

        tracing::debug!(
            theme = %this.theme.current(),
            reveal_targets = this.layout.reveal.len(),
            counters = this.counters.len(),
            "page controller ready"
        );
        Ok(this)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn progress(&self) -> f64 {
        self.hero.progress
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Negative offsets (elastic overscroll) are treated as the document top.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_scroll(&mut self, scroll_y: f64) -> LandkitResult<()> {
        ensure_finite("scroll_y", scroll_y)?;
        self.viewport.scroll_y = scroll_y.max(0.0);
        self.recompute();
        Ok(())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_resize(&mut self, width: f64, height: f64) -> LandkitResult<()> {
        let next = Viewport::new(self.viewport.scroll_y, width, height)?;
        self.viewport = next;
        if self.menu.on_viewport_width(width) {
            tracing::debug!(width, "viewport past menu breakpoint, menu closed");
        }
        self.recompute();
        Ok(())
    }

    /// Returns whether the menu is now open.
    pub fn on_hamburger(&mut self) -> bool {
        let open = self.menu.toggle();
        tracing::debug!(open, "menu toggled");
        open
    }

    pub fn on_nav_link(&mut self) {
        if self.menu.close() {
            tracing::debug!("menu closed by navigation");
        }
    }

    /// Scroll destination for an in-page link, or `None` to let the click through.
    pub fn on_anchor_click(&self, href: &str) -> Option<f64> {
        anchor_scroll_target(href, &self.layout.sections, self.config.anchor_header_offset)
    }

    pub fn toggle_theme(&mut self) -> LandkitResult<Theme> {
        let theme = self.theme.toggle()?;
        tracing::debug!(%theme, "theme toggled");
        Ok(theme)
    }

    /// Advances the animation clock. Time never runs backwards.
    ///
    /// Counters that came into view since the previous tick start on this tick's clock.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn tick(&mut self, now_ms: f64) -> LandkitResult<()> {
        ensure_finite("now_ms", now_ms)?;
        self.now_ms = self.now_ms.max(now_ms);
        for id in self.awaiting_start.drain(..) {
            if let Some(c) = self.counters.get_mut(&id) {
                c.start(self.now_ms);
                tracing::debug!(%id, at_ms = self.now_ms, "counter started");
            }
        }
        Ok(())
    }

    /// True while any counter is waiting for its first tick or has not reached its target.
    pub fn is_animating(&self) -> bool {
        !self.awaiting_start.is_empty()
            || self
                .counters
                .values()
                .any(|c| c.is_started() && !c.is_finished(self.now_ms))
    }

    pub fn snapshot(&self) -> PresentationState {
        PresentationState {
            scroll_y: self.viewport.scroll_y,
            viewport_width: self.viewport.width,
            viewport_height: self.viewport.height,
            hero: self.hero,
            header_scrolled: self.header.is_scrolled(),
            menu_open: self.menu.is_open(),
            theme: self.theme.current(),
            revealed: self.reveal.revealed().to_vec(),
            counters: self
                .counters
                .iter()
                .map(|(id, c)| (id.clone(), c.text_at(self.now_ms)))
                .collect(),
            animating: self.is_animating(),
        }
    }

    fn recompute(&mut self) {
        let progress = self.layout.pinned.progress(&self.viewport);
        let next = hero_frame(progress, &self.config.hero);
        if next.past_start != self.hero.past_start {
            tracing::debug!(past_start = next.past_start, progress, "pinned region boundary");
        }
        self.hero = next;

        if self.header.update(self.viewport.scroll_y) {
            tracing::debug!(scrolled = self.header.is_scrolled(), "header state changed");
        }

        for r in self.reveal.update(&self.viewport) {
            tracing::debug!(id = %r.id, delay_ms = r.delay_ms, "revealed");
        }

        for r in self.counter_observer.update(&self.viewport) {
            if self.counters.contains_key(&r.id) {
                tracing::debug!(id = %r.id, "counter in view");
                self.awaiting_start.push(r.id);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/page.rs"]
mod tests;
