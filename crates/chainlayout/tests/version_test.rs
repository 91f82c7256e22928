#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(chainlayout::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!chainlayout::VERSION.is_empty());
}
