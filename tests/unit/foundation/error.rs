use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FrameplayError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FrameplayError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        FrameplayError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert_eq!(
        FrameplayError::unknown_action("walk").to_string(),
        "unknown action \"walk\""
    );
}

#[test]
fn incompatible_version_names_both_sides() {
    let err = FrameplayError::IncompatibleVersion {
        found: "2.0.0".to_owned(),
        supported: 1,
    };
    let s = err.to_string();
    assert!(s.contains("\"2.0.0\""));
    assert!(s.contains("supported major version: 1"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FrameplayError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
