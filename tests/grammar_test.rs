// tests/grammar_test.rs
use semver_compat::{parse, Parser, Version};

#[test]
fn test_strict_grammar_acceptance() {
    for input in [
        "1.0.0",
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0+build.1",
        "1.0.0-rc.1+build.5",
    ] {
        let v = parse(input).unwrap_or_else(|e| panic!("{} should parse: {}", input, e));
        assert_eq!(v.original(), input);
        assert_eq!(v.to_string(), input);
    }
}

#[test]
fn test_compatibility_grammar_acceptance() {
    let cases = [
        ("1.0.1b", (1, 0, 1), Some("b")),
        ("1.0.10rc3", (1, 0, 10), Some("rc-3")),
        ("2.3.4", (2, 3, 4), None),
    ];

    for (input, core, prerelease) in cases {
        let v = parse(input).unwrap();
        assert_eq!(v.core(), core, "core of {}", input);
        assert_eq!(v.prerelease(), prerelease, "pre-release of {}", input);
        assert_eq!(v.build(), None);
    }
}

#[test]
fn test_rejection() {
    for input in ["01.0.0", "1.0", "1.0.0-", "", "abc"] {
        let err = parse(input).unwrap_err();
        assert!(err.is_invalid_version(), "{:?} should be invalid", input);
        assert!(err.to_string().contains(&format!("'{}'", input)));
    }
}

#[test]
fn test_normalization_matches_strict_spelling() {
    let shorthand = parse("1.0.1b2").unwrap();
    let strict = parse("1.0.1-b-2").unwrap();
    assert_eq!(shorthand.prerelease(), strict.prerelease());
    assert_eq!(shorthand, strict);
    assert_ne!(shorthand.original(), strict.original());
}

#[test]
fn test_normalization_drops_leading_zeros() {
    assert_eq!(parse("1.0.0rc007").unwrap(), parse("1.0.0-rc-7").unwrap());
}

#[test]
fn test_accessors_round_trip() {
    let v = parse("10.200.3000-x.7+meta").unwrap();
    assert_eq!((v.major(), v.minor(), v.patch()), (10, 200, 3000));
    assert_eq!(v.prerelease(), Some("x.7"));
    assert_eq!(v.build(), Some("meta"));
    assert_eq!(v.original(), "10.200.3000-x.7+meta");
}

#[test]
fn test_zero_components() {
    let v = parse("0.0.0").unwrap();
    assert_eq!(v.core(), (0, 0, 0));
}

#[test]
fn test_strict_parser_has_no_fallback() {
    let parser = Parser::strict();
    assert!(parser.parse("1.0.10rc3").is_err());
    assert!(parser.parse("2.3.4").is_ok());
}

#[test]
fn test_version_parse_matches_free_function() {
    let a = Version::parse("1.0.1b2").unwrap();
    let b = parse("1.0.1b2").unwrap();
    assert_eq!(a.to_string(), b.to_string());
}
