use crate::{
    content::model::PageContent,
    foundation::error::LandkitResult,
    interact::theme::Theme,
    markup::node::{Node, el},
    view::sections,
};

#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    pub theme: Theme,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
    /// Trusted markup appended to `<head>` verbatim (analytics, font preloads).
    pub head_html: Option<String>,
}

/// Renders the complete HTML5 document for `content`.
#[tracing::instrument(skip(content, opts), fields(theme = %opts.theme))]
pub fn render_page(content: &PageContent, opts: &RenderOptions) -> LandkitResult<String> {
    content.validate()?;

    let mut head = el("head")
        .child(el("meta").attr("charset", "utf-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(el("title").text(&content.meta.title))
        .child(
            el("meta")
                .attr("name", "description")
                .attr("content", &content.meta.description),
        );
    for href in &opts.stylesheets {
        head = head.child(el("link").attr("rel", "stylesheet").attr("href", href));
    }
    if let Some(extra) = &opts.head_html {
        head = head.child(Node::Raw(extra.clone()));
    }

    let mut body = el("body")
        .child(sections::header(&content.header, opts.theme))
        .child(sections::main_sections(content))
        .child(sections::footer(&content.footer));
    for src in &opts.scripts {
        body = body.child(el("script").attr("src", src).flag("defer"));
    }

    let html = el("html")
        .attr("lang", "en")
        .attr("data-theme", opts.theme)
        .child(head)
        .child(body);

    let out = format!("<!DOCTYPE html>\n{}\n", html.render());
    tracing::debug!(bytes = out.len(), "rendered page");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/view/page.rs"]
mod tests;
