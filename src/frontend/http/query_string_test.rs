use super::query_string::{DecodeError, percent_decode, query_param};

#[test]
fn decodes_percent_escapes() {
    assert_eq!(percent_decode("Organic-Low", false).unwrap(), "Organic-Low");
    assert_eq!(percent_decode("Low%20Retention", false).unwrap(), "Low Retention");
    assert_eq!(percent_decode("%C2%B5L", false).unwrap(), "µL");
}

#[test]
fn plus_is_space_only_in_queries() {
    assert_eq!(percent_decode("a+b", true).unwrap(), "a b");
    assert_eq!(percent_decode("a+b", false).unwrap(), "a+b");
    assert_eq!(percent_decode("a%2Bb", true).unwrap(), "a+b");
}

#[test]
fn rejects_truncated_or_bad_escapes() {
    assert!(matches!(
        percent_decode("abc%2", false),
        Err(DecodeError::InvalidEscape(_))
    ));
    assert!(matches!(
        percent_decode("%zz", false),
        Err(DecodeError::InvalidEscape(_))
    ));
    assert!(matches!(
        percent_decode("%+1", false),
        Err(DecodeError::InvalidEscape(_))
    ));
}

#[test]
fn rejects_invalid_utf8() {
    assert_eq!(percent_decode("%FF", false), Err(DecodeError::InvalidUtf8));
}

#[test]
fn finds_first_matching_param() {
    let query = Some("foo=1&liquid_class=Viscous&liquid_class=Serum");

    assert_eq!(
        query_param(query, "liquid_class").unwrap(),
        Some("Viscous".to_string())
    );
}

#[test]
fn missing_param_or_query_is_none() {
    assert_eq!(query_param(None, "liquid_class").unwrap(), None);
    assert_eq!(query_param(Some("foo=bar"), "liquid_class").unwrap(), None);
    assert_eq!(query_param(Some(""), "liquid_class").unwrap(), None);
}

#[test]
fn param_without_value_is_empty_string() {
    assert_eq!(
        query_param(Some("liquid_class"), "liquid_class").unwrap(),
        Some(String::new())
    );
    assert_eq!(
        query_param(Some("liquid_class="), "liquid_class").unwrap(),
        Some(String::new())
    );
}

#[test]
fn decodes_param_values() {
    assert_eq!(
        query_param(Some("liquid_class=Organic%2DLow"), "liquid_class").unwrap(),
        Some("Organic-Low".to_string())
    );
    assert_eq!(
        query_param(Some("liquid_class=Low+Retention"), "liquid_class").unwrap(),
        Some("Low Retention".to_string())
    );
}

#[test]
fn malformed_other_keys_are_skipped() {
    assert_eq!(
        query_param(Some("%zz=1&liquid_class=Aqueous"), "liquid_class").unwrap(),
        Some("Aqueous".to_string())
    );
    assert_eq!(query_param(Some("%zz=1"), "liquid_class").unwrap(), None);
}

#[test]
fn malformed_value_for_key_is_an_error() {
    assert!(matches!(
        query_param(Some("other=1&liquid_class=%zz"), "liquid_class"),
        Err(DecodeError::InvalidEscape(_))
    ));
}
