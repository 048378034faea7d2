use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LandkitError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LandkitError::content("x")
            .to_string()
            .contains("content error:")
    );
    assert!(LandkitError::layout("x").to_string().contains("layout error:"));
    assert!(
        LandkitError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LandkitError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: LandkitError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, LandkitError::Serde(_)));
}
