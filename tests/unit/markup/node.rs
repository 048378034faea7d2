use super::*;

#[test]
fn nested_elements_render_in_order() {
    let html = el("ul")
        .class("links")
        .child(el("li").child(el("a").attr("href", "#a").text("A")))
        .child(el("li").text("B"))
        .render();
    assert_eq!(
        html,
        r##"<ul class="links"><li><a href="#a">A</a></li><li>B</li></ul>"##
    );
}

#[test]
fn text_and_attrs_are_escaped() {
    let html = el("p")
        .attr("title", r#"say "hi" & 'bye'"#)
        .text("<script>alert(1)</script> & co")
        .render();
    assert_eq!(
        html,
        r#"<p title="say &quot;hi&quot; &amp; &#39;bye&#39;">&lt;script&gt;alert(1)&lt;/script&gt; &amp; co</p>"#
    );
}

#[test]
fn void_elements_have_no_closing_tag() {
    let html = el("img").attr("src", "a.png").attr("alt", "").render();
    assert_eq!(html, r#"<img src="a.png" alt="">"#);
    assert_eq!(el("br").render(), "<br>");
}

#[test]
fn boolean_attributes_render_bare() {
    let html = el("div").flag("data-reveal").attr("data-delay", 80).render();
    assert_eq!(html, r#"<div data-reveal data-delay="80"></div>"#);
}

#[test]
fn raw_bypasses_escaping_but_text_does_not() {
    let html = fragment([Node::Raw("<b>ok</b>".into()), text("<b>no</b>")]).render();
    assert_eq!(html, "<b>ok</b>&lt;b&gt;no&lt;/b&gt;");
}

#[test]
fn attribute_lookup() {
    let e = el("div").id("hero").class("x");
    assert_eq!(e.get_attr("id"), Some("hero"));
    assert_eq!(e.get_attr("missing"), None);
    assert_eq!(e.tag(), "div");
}
