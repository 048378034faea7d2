use super::*;

fn fixture() -> PageContent {
    PageContent::from_json(include_str!("../../data/page.json")).unwrap()
}

#[test]
fn fixture_parses_and_validates() {
    let page = fixture();
    page.validate().unwrap();
    assert_eq!(page.header.nav.len(), 4);
    assert_eq!(page.ontology.hierarchy.len(), 7);
    assert_eq!(page.products.items[2].image, None);
}

#[test]
fn stat_targets_parse() {
    let page = fixture();
    let targets: Vec<u64> = page
        .hero
        .stats
        .iter()
        .map(|s| s.target().unwrap())
        .collect();
    assert_eq!(targets, vec![3, 100, 1]);
}

#[test]
fn rejects_non_numeric_stat() {
    let mut page = fixture();
    page.hero.stats[0].number = "3.5".to_string();
    assert!(page.validate().is_err());
}

#[test]
fn rejects_bad_headline_lengths() {
    let mut page = fixture();
    page.hero.headline.clear();
    assert!(page.validate().is_err());
    page.hero.headline = vec!["a".into(), "b".into(), "c".into()];
    assert!(page.validate().is_err());
    page.hero.headline = vec!["only".into()];
    assert!(page.validate().is_ok());
}

#[test]
fn rejects_empty_links() {
    let mut page = fixture();
    page.footer.links.legal[0].href = " ".to_string();
    assert!(page.validate().is_err());
}

#[test]
fn copyright_line() {
    assert_eq!(
        fixture().footer.copyright(),
        "© 2025 Indus Technology Solutions. All rights reserved."
    );
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = PageContent::from_json("{").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}
