use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LayerstackError::not_found("x")
            .to_string()
            .contains("not found:")
    );
    assert!(
        LayerstackError::invalid_metadata("x")
            .to_string()
            .contains("invalid metadata:")
    );
    assert!(
        LayerstackError::render("x")
            .to_string()
            .contains("render failure:")
    );
    assert!(
        LayerstackError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LayerstackError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.kind(), ErrorKind::Other);
}

#[test]
fn kind_matches_variant() {
    assert_eq!(LayerstackError::not_found("p").kind(), ErrorKind::NotFound);
    assert_eq!(
        LayerstackError::invalid_metadata("p").kind(),
        ErrorKind::InvalidMetadata
    );
    assert_eq!(LayerstackError::render("p").kind(), ErrorKind::Render);
}

#[test]
fn json_errors_map_to_serde() {
    let err: LayerstackError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::Serde);
}
