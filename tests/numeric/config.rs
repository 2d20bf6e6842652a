use qlnum::{BinaryOp, DEFAULT_SCALE, Error, NumericConfig, ROUNDING_MODE, Scalar};
use qlnum_test_utils::{assert_error_contains, big};

#[test]
fn test_defaults() {
    let config = NumericConfig::default();
    assert_eq!(config.default_scale, DEFAULT_SCALE);
    assert_eq!(config.rounding_mode(), ROUNDING_MODE);
}

#[test]
fn test_toml_numeric_table() {
    let config = NumericConfig::from_toml_str("[numeric]\ndefault_scale = 4\n").unwrap();
    assert_eq!(config.default_scale, 4);
    let q = big("1").binary(BinaryOp::Divide, &Scalar::Int32(3), &config).unwrap();
    assert_eq!(q.to_string(), "0.3333");
}

#[test]
fn test_toml_missing_keys_keep_defaults() {
    assert_eq!(NumericConfig::from_toml_str("").unwrap(), NumericConfig::default());
    assert_eq!(NumericConfig::from_toml_str("[numeric]\n").unwrap(), NumericConfig::default());
    assert_eq!(
        NumericConfig::from_toml_str("[other]\nkey = 1\n").unwrap(),
        NumericConfig::default()
    );
}

#[test]
fn test_toml_rejects_bad_values() {
    assert_error_contains(
        NumericConfig::from_toml_str("[numeric]\ndefault_scale = -2\n"),
        &["non-negative"],
    );
    assert_error_contains(
        NumericConfig::from_toml_str("[numeric]\ndefault_scale = \"eight\"\n"),
        &["invalid numeric configuration"],
    );
}

#[test]
fn test_lookup_resolution() {
    let config = NumericConfig::from_lookup(|key| {
        (key == "QLNUM_DEFAULT_SCALE").then(|| " 12 ".to_string())
    })
    .unwrap();
    assert_eq!(config.default_scale, 12);
    assert_eq!(NumericConfig::from_lookup(|_| None).unwrap(), NumericConfig::default());
}

#[test]
fn test_lookup_rejects_garbage() {
    let err = NumericConfig::from_lookup(|_| Some("lots".to_string())).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert_error_contains(NumericConfig::from_lookup(|_| Some("-1".to_string())), &["non-negative"]);
}

#[test]
fn test_with_default_scale() {
    assert_eq!(NumericConfig::with_default_scale(0).unwrap().default_scale, 0);
    assert!(matches!(NumericConfig::with_default_scale(-1), Err(Error::Config(_))));
}
