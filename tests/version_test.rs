// tests/version_test.rs
use tagver::{parse_all, sort_ascending, sort_descending, Component, Version, VersionError};

#[test]
fn test_new_version_from_empty_string() {
    let version = Version::parse("").expect("empty input is the zero version");
    assert_eq!(version.to_string(), "0.0.0");
}

#[test]
fn test_parse_basic_version() {
    let version: Version = "1.2.3".parse().expect("Should parse version");
    assert_eq!(version.to_string(), "1.2.3");
}

#[test]
fn test_invalid_version_input() {
    for input in ["42", "a.b.c", "1.b.c", "1.2.c"] {
        let err = Version::parse(input).unwrap_err();
        assert!(
            matches!(err, VersionError::InvalidFormat { .. }),
            "{input} should be an invalid version number"
        );
    }
}

#[test]
fn test_invalid_version_names_component() {
    assert_eq!(Version::parse("a.b.c").unwrap_err().component(), Some(Component::Major));
    assert_eq!(Version::parse("1.b.c").unwrap_err().component(), Some(Component::Minor));
    assert_eq!(Version::parse("1.2.c").unwrap_err().component(), Some(Component::Patch));
    assert_eq!(Version::parse("42").unwrap_err().component(), None);
}

#[test]
fn test_bump_sequence() {
    let mut version = Version::parse("").unwrap();

    version.bump(false, false);
    assert_eq!(version.to_string(), "0.0.1");

    version.bump(false, true);
    assert_eq!(version.to_string(), "0.1.0");

    version.bump(false, false);
    version.bump(true, true);
    assert_eq!(version.to_string(), "1.0.0");
}

#[test]
fn test_tagging_a_release() {
    let mut version = Version::parse("2.4.1").unwrap();
    version.bump(false, true);
    version.alpha();
    assert_eq!(version.to_string(), "2.5.0-alpha");

    version.beta();
    version.add_metadata("20240101.abcdef");
    assert_eq!(version.to_string(), "2.5.0-beta+20240101.abcdef");
}

#[test]
fn test_sort_round_trip() {
    let mut versions = parse_all(["5.4.3", "1.2.4", "1.3.3", "0.1.2"]).expect("Should parse versions");

    sort_ascending(&mut versions);
    let expected = parse_all(["0.1.2", "1.2.4", "1.3.3", "5.4.3"]).unwrap();
    for (got, want) in versions.iter().zip(&expected) {
        assert!(got.equal(want), "Expected {want} got {got}");
    }

    sort_descending(&mut versions);
    let expected = parse_all(["5.4.3", "1.3.3", "1.2.4", "0.1.2"]).unwrap();
    for (got, want) in versions.iter().zip(&expected) {
        assert!(got.equal(want), "Expected {want} got {got}");
    }
}

#[test]
fn test_parse_all_discards_partial_results() {
    let result = parse_all(["1.0.0", "2.0.0", "3.0"]);
    let err = result.unwrap_err();
    assert_eq!(err.input(), "3.0");
}

#[test]
fn test_versions_in_ordered_collections() {
    use std::collections::BTreeSet;

    let set: BTreeSet<Version> = parse_all(["1.0.0", "0.9.9", "1.0.0", "1.0.1"])
        .unwrap()
        .into_iter()
        .collect();
    let rendered: Vec<String> = set.iter().map(|v| v.to_string()).collect();
    assert_eq!(rendered, vec!["0.9.9", "1.0.0", "1.0.1"]);
}
