//! One pure view function per page section: `&content -> Element`.
//!
//! Element ids and classes are the hooks the stylesheet and the host script bind to; keep them
//! stable. Staggered cards carry `data-reveal` plus a `data-delay` in milliseconds.

use crate::{
    content::model::{
        Ai, Cta, Footer, Header, Hero, Intro, Link, Ontology, PageContent, PainPoint, Products,
        Stat, Why,
    },
    interact::theme::Theme,
    markup::{
        icon::icon,
        node::{Element, Node, el, fragment, text},
    },
};

pub const HIERARCHY_STAGGER_MS: u32 = 80;
pub const PRODUCT_STAGGER_MS: u32 = 150;
pub const AI_STAGGER_MS: u32 = 120;
pub const PAIN_STAGGER_MS: u32 = 120;
pub const WHY_STAGGER_MS: u32 = 100;

fn revealed(e: Element, index: usize, stagger_ms: u32) -> Element {
    e.flag("data-reveal")
        .attr("data-delay", index as u32 * stagger_ms)
}

fn nav_links(links: &[Link]) -> Vec<Element> {
    links
        .iter()
        .map(|l| el("a").attr("href", &l.href).class("nav-link").text(&l.label))
        .collect()
}

fn link_items(links: &[Link]) -> Vec<Element> {
    links
        .iter()
        .map(|l| el("li").child(el("a").attr("href", &l.href).text(&l.label)))
        .collect()
}

pub fn header(h: &Header, theme: Theme) -> Element {
    let logo = el("img")
        .id("logo-img")
        .attr("src", theme.logo_src(&h.logo))
        .attr("alt", &h.logo_text)
        .attr("data-light", &h.logo.light)
        .attr("data-dark", &h.logo.dark);

    let toggle_icon = match theme {
        Theme::Light => "dark_mode",
        Theme::Dark => "light_mode",
    };

    el("header").id("site-header").class("site-header").child(
        el("div")
            .class("header-inner")
            .child(el("a").attr("href", "#hero").class("logo").child(logo))
            .child(el("nav").id("nav-links").class("nav-links").children(nav_links(&h.nav)))
            .child(
                el("div")
                    .class("header-actions")
                    .child(
                        el("button")
                            .id("theme-toggle")
                            .class("theme-toggle")
                            .attr("type", "button")
                            .attr("aria-label", "Toggle theme")
                            .child(icon(toggle_icon, "")),
                    )
                    .child(
                        el("a")
                            .attr("href", "#cta")
                            .class("btn btn-primary header-cta")
                            .text(&h.cta_text),
                    )
                    .child(
                        el("button")
                            .id("hamburger")
                            .class("hamburger")
                            .attr("type", "button")
                            .attr("aria-label", "Open menu")
                            .children((0..3).map(|_| el("span"))),
                    ),
            )
            .child(
                el("div").id("mobile-menu").class("mobile-menu").child(
                    el("nav")
                        .id("mobile-nav")
                        .class("mobile-nav")
                        .children(nav_links(&h.nav)),
                ),
            ),
    )
}

/// Two-line headline: plain first line, accented second line when present.
pub fn headline(lines: &[String]) -> Node {
    match lines {
        [one] => text(one.as_str()),
        [one, two, ..] => fragment([
            text(one.as_str()),
            el("br").into(),
            el("span").class("line-accent").text(two.as_str()).into(),
        ]),
        [] => fragment([]),
    }
}

pub fn hero(h: &Hero) -> Element {
    let mut bg = el("div").class("hero-bg-img");
    if let Some(image) = &h.image {
        bg = bg.attr("style", format!("background-image: url('{image}')"));
    }

    el("section")
        .id("hero")
        .class("hero")
        .child(bg)
        .child(el("div").class("hero-overlay"))
        .child(
            el("div")
                .class("hero-content")
                .child(el("h1").id("hero-headline").class("hero-headline").child(headline(&h.headline)))
                .child(el("p").id("hero-sub").class("hero-sub").text(&h.sub)),
        )
}

/// Pinned region: the sticky stage cross-fades `line1` into `line2` as scroll progress runs.
pub fn intro(i: &Intro) -> Element {
    el("section")
        .id("intro")
        .class("intro pinned-region")
        .flag("data-pinned")
        .child(
            el("div")
                .class("intro-sticky")
                .child(
                    el("p")
                        .id("intro-line1")
                        .class("intro-line phase-one")
                        .attr("style", "opacity: 1")
                        .text(&i.line1),
                )
                .child(
                    el("p")
                        .id("intro-line2")
                        .class("intro-line phase-two")
                        .attr("style", "opacity: 0")
                        .text(&i.line2),
                )
                .child(el("p").id("intro-para").class("intro-para").text(&i.para)),
        )
}

fn stat_item(s: &Stat) -> Element {
    el("div")
        .class("stat-item")
        .child(
            el("div")
                .class("stat-number")
                .attr("data-target", s.number.trim())
                .attr("data-suffix", &s.suffix)
                .text(format!("0{}", s.suffix)),
        )
        .child(el("div").class("stat-label").text(&s.label))
}

pub fn stats_strip(stats: &[Stat]) -> Element {
    el("section")
        .class("stats-strip")
        .child(el("div").id("hero-stats").class("hero-stats").children(stats.iter().map(stat_item)))
}

pub fn ontology(o: &Ontology) -> Element {
    let last = o.hierarchy.len().saturating_sub(1);
    let nodes = o.hierarchy.iter().enumerate().map(|(i, item)| {
        let mut node = revealed(el("div").class("hierarchy-node"), i, HIERARCHY_STAGGER_MS).child(
            el("div")
                .class("hierarchy-item")
                .child(el("div").class("h-icon").child(icon(&item.icon, "")))
                .child(el("span").class("h-label").text(&item.label)),
        );
        if i < last {
            node = node.child(
                el("span")
                    .class("hierarchy-arrow")
                    .child(icon("chevron_right", "")),
            );
        }
        node
    });

    el("section")
        .id("platform")
        .class("ontology")
        .child(el("p").id("ontology-desc").class("ontology-desc").text(&o.description))
        .child(el("div").id("ontology-flow").class("ontology-flow").children(nodes))
}

pub fn products(p: &Products) -> Element {
    let cards = p.items.iter().enumerate().map(|(i, item)| {
        let mut visual = el("div").class("product-card-visual").child(
            el("div")
                .class("product-card-visual-placeholder")
                .child(icon(&item.icon, ""))
                .child(el("span").class("product-card-name").text(&item.name)),
        );
        if let Some(image) = &item.image {
            visual = visual.child(
                el("img")
                    .attr("src", image)
                    .attr("alt", &item.full_name)
                    .attr("loading", "lazy"),
            );
        }
        visual = visual.child(el("span").class("product-phase-badge").text(&item.phase));

        revealed(el("div").class("product-card"), i, PRODUCT_STAGGER_MS)
            .child(visual)
            .child(
                el("div")
                    .class("product-card-body")
                    .child(el("span").class("product-name-tag").text(&item.name))
                    .child(el("h3").class("product-full-name").text(&item.full_name))
                    .child(el("p").class("product-desc").text(&item.description))
                    .child(
                        el("span")
                            .class("product-link")
                            .text("Learn more ")
                            .child(icon("arrow_forward", "")),
                    ),
            )
    });

    el("section")
        .id("products")
        .class("products")
        .child(el("p").id("products-intro").class("products-intro").text(&p.intro))
        .child(el("div").id("products-grid").class("products-grid").children(cards))
}

pub fn ai(a: &Ai) -> Element {
    let cards = a.features.iter().enumerate().map(|(i, f)| {
        revealed(el("div").class("ai-card"), i, AI_STAGGER_MS)
            .child(el("div").class("ai-card-icon").child(icon(&f.icon, "")))
            .child(el("h3").class("ai-card-title").text(&f.title))
            .child(el("p").class("ai-card-desc").text(&f.description))
    });
    el("section")
        .id("ai")
        .class("ai")
        .child(el("div").id("ai-grid").class("ai-grid").children(cards))
}

pub fn pain_points(points: &[PainPoint]) -> Element {
    let cards = points.iter().enumerate().map(|(i, p)| {
        revealed(el("div").class("pain-card"), i, PAIN_STAGGER_MS)
            .child(el("div").class("pain-icon").child(icon(&p.icon, "")))
            .child(
                el("div")
                    .class("pain-body")
                    .child(el("h3").class("pain-title").text(&p.title))
                    .child(el("p").class("pain-solution").text(&p.solution)),
            )
    });
    el("section")
        .id("solutions")
        .class("pain-points")
        .child(el("div").id("pain-grid").class("pain-grid").children(cards))
}

pub fn why(w: &Why) -> Element {
    let reasons = w.reasons.iter().enumerate().map(|(i, r)| {
        revealed(el("div").class("why-reason"), i, WHY_STAGGER_MS)
            .child(el("div").class("why-check").child(icon("check", "icon-fill")))
            .child(
                el("p")
                    .class("why-reason-text")
                    .child(el("strong").text(&r.strong))
                    .text(&r.text),
            )
    });
    el("section")
        .id("why")
        .class("why")
        .child(el("div").id("why-reasons").class("why-reasons").children(reasons))
}

pub fn cta(c: Option<&Cta>, button_text: &str) -> Element {
    let mut inner = el("div").class("cta-inner");
    if let Some(c) = c {
        inner = inner.child(el("h2").class("cta-heading").text(&c.heading));
        if !c.sub.trim().is_empty() {
            inner = inner.child(el("p").class("cta-sub").text(&c.sub));
        }
    }
    inner = inner.child(
        el("a")
            .attr("href", "#cta")
            .class("btn btn-primary cta-button")
            .text(button_text),
    );
    el("section").id("cta").class("cta").child(inner)
}

pub fn footer(f: &Footer) -> Element {
    el("footer").id("site-footer").class("site-footer").child(
        el("div")
            .class("footer-inner")
            .child(el("p").id("footer-tagline").class("footer-tagline").text(&f.tagline))
            .child(
                el("ul")
                    .id("footer-product-links")
                    .class("footer-links")
                    .children(link_items(&f.links.product)),
            )
            .child(
                el("ul")
                    .id("footer-legal-links")
                    .class("footer-links")
                    .children(link_items(&f.links.legal)),
            )
            .child(el("p").id("footer-copy").class("footer-copy").text(f.copyright())),
    )
}

/// Every section of `<main>`, in page order.
pub fn main_sections(c: &PageContent) -> Element {
    el("main")
        .child(hero(&c.hero))
        .child(intro(&c.intro))
        .child(stats_strip(&c.hero.stats))
        .child(ontology(&c.ontology))
        .child(products(&c.products))
        .child(ai(&c.ai))
        .child(pain_points(&c.pain_points))
        .child(why(&c.why))
        .child(cta(c.cta.as_ref(), &c.header.cta_text))
}

#[cfg(test)]
#[path = "../../tests/unit/view/sections.rs"]
mod tests;
