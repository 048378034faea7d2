use crate::markup::node::{Element, el};

/// Material Symbols ligature icon.
pub fn icon(name: &str, extra_class: &str) -> Element {
    let class = if extra_class.trim().is_empty() {
        "material-symbols-outlined".to_string()
    } else {
        format!("material-symbols-outlined {}", extra_class.trim())
    };
    el("span").attr("class", class).text(name)
}
