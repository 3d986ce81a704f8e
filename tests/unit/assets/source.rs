use super::*;

#[test]
fn normalize_rel_path_cleans_separators() {
    assert_eq!(
        normalize_rel_path("./decorations\\badge.png").unwrap(),
        "decorations/badge.png"
    );
    assert_eq!(normalize_rel_path("a//b/./c.png").unwrap(), "a/b/c.png");
}

#[test]
fn normalize_rel_path_rejects_escapes() {
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("../secret.png").is_err());
    assert!(normalize_rel_path("a/../../b.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn missing_file_is_not_found() {
    let src = FsAssetSource::new(std::env::temp_dir().join("layerstack_no_such_root"));
    let err = src.read("products/none.png").unwrap_err();
    assert!(matches!(err, LayerstackError::NotFound(_)));
}

#[test]
fn reads_relative_to_root() {
    let root = std::env::temp_dir().join(format!(
        "layerstack_source_read_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(root.join("products")).unwrap();
    std::fs::write(root.join("products").join("p.bin"), b"abc").unwrap();

    let src = FsAssetSource::new(&root);
    assert_eq!(src.root(), root.as_path());
    assert_eq!(src.read("products/p.bin").unwrap(), b"abc");
    assert!(matches!(
        src.read("../p.bin").unwrap_err(),
        LayerstackError::InvalidMetadata(_)
    ));
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn memory_source_normalizes_keys() {
    let mut src = MemoryAssetSource::new();
    src.insert("./a\\b.png", vec![7]).unwrap();
    assert_eq!(src.read("a/b.png").unwrap(), vec![7]);
    assert!(matches!(
        src.read("a/c.png").unwrap_err(),
        LayerstackError::NotFound(_)
    ));
    assert!(src.insert("../x.png", vec![]).is_err());
}
