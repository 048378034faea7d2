//! landkit renders a marketing landing page from a content document and tracks the page's
//! scroll-driven presentation state.
//!
//! # Overview
//!
//! 1. **Render**: `PageContent -> HTML` through pure view functions over a small node tree
//!    ([`render_page`]). Output is static and deterministic.
//! 2. **Interact**: the host measures the rendered page into a [`PageLayout`] and forwards scroll,
//!    resize, click and animation-frame events to a [`PageController`].
//! 3. **Present**: [`PageController::snapshot`] returns a serializable [`PresentationState`]
//!    (hero cross-fade, header flag, reveals, counters, menu, theme) for the host to apply.
//!
//! The scroll-progress mapping at the heart of the pinned hero is exposed on its own as
//! [`scroll_progress`].
#![forbid(unsafe_code)]

mod animation;
mod content;
mod controller;
mod foundation;
mod interact;
mod layout;
mod markup;
mod scroll;
mod view;

pub use animation::counter::{CounterAnimation, DEFAULT_COUNTER_DURATION_MS};
pub use animation::ease::{Ease, lerp};
pub use content::model::{
    Ai, Cta, Feature, Footer, FooterLinks, Header, Hero, IconLabel, Intro, Link, LogoSources,
    Meta, Ontology, PageContent, PainPoint, Product, Products, Reason, Stat, Why,
};
pub use controller::config::ControllerConfig;
pub use controller::page::{PageController, PresentationState};
pub use foundation::core::{Point, Rect, Size, Viewport};
pub use foundation::error::{LandkitError, LandkitResult};
pub use interact::anchor::{DEFAULT_ANCHOR_HEADER_OFFSET, anchor_scroll_target};
pub use interact::header::HeaderState;
pub use interact::hero::{HeroConfig, HeroFrame, hero_frame};
pub use interact::menu::MobileMenu;
pub use interact::reveal::{
    ObserverOptions, RevealObserver, RevealTarget, Revealed, RootMargin, intersection_ratio,
};
pub use interact::theme::{FileThemeStore, MemoryThemeStore, Theme, ThemeStore, ThemeSwitch};
pub use layout::model::{CounterTarget, PageLayout};
pub use markup::icon::icon;
pub use markup::node::{Element, Node, el, escape_attr, escape_text, fragment, text};
pub use scroll::progress::{PinnedRegion, scroll_progress};
pub use view::page::{RenderOptions, render_page};
pub use view::sections;
