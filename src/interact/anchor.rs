use std::collections::BTreeMap;

pub const DEFAULT_ANCHOR_HEADER_OFFSET: f64 = 90.0;

/// Resolves an in-page anchor (`#section`) to a scroll destination below the fixed header.
///
/// Returns `None` for non-fragment links, the bare `#` placeholder, and unknown targets; the
/// host should then let the click through unchanged.
pub fn anchor_scroll_target(
    href: &str,
    sections: &BTreeMap<String, f64>,
    header_offset: f64,
) -> Option<f64> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    let top = sections.get(id)?;
    Some((top - header_offset).max(0.0))
}

#[cfg(test)]
#[path = "../../tests/unit/interact/anchor.rs"]
mod tests;
