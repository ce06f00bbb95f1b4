//! Integration tests for the attribute adapter.

use post_blocks::attributes::{AttributeLookup, BlockAttributes};
use rstest::rstest;

#[rstest]
#[case(r#"{"mediaId":"local-1"}"#, true)]
#[case(r#"{"mediaId":"local-10"}"#, false)]
#[case(r#"{"mediaId":" local-1"}"#, false)]
#[case(r#"{"mediaId":null}"#, false)]
#[case(r#"{"mediaId":{"id":"local-1"}}"#, false)]
#[case(r#"{}"#, false)]
fn test_matches_is_exact_string_equality(#[case] header: &str, #[case] expected: bool) {
    let attrs = BlockAttributes::parse(header).unwrap();
    assert_eq!(attrs.lookup("mediaId").matches("local-1"), expected);
}

#[rstest]
#[case("")]
#[case("null")]
#[case("\"mediaId\"")]
#[case("{\"mediaId\":")]
fn test_non_objects_do_not_parse(#[case] header: &str) {
    assert!(BlockAttributes::parse(header).is_none());
}

#[test]
fn test_boolean_lookup_is_scalar() {
    let attrs = BlockAttributes::parse(r#"{"isStackedOnMobile":true}"#).unwrap();
    assert_eq!(
        attrs.lookup("isStackedOnMobile"),
        AttributeLookup::Scalar("true".into())
    );
}

#[test]
fn test_set_string_inserts_missing_key_at_end() {
    let mut attrs = BlockAttributes::parse(r#"{"id":1}"#).unwrap();
    assert!(attrs.set_string("href", "https://example.com/a.pdf"));
    assert_eq!(
        attrs.serialize().unwrap(),
        r#"{"id":1,"href":"https://example.com/a.pdf"}"#
    );
}

#[test]
fn test_new_serializes_as_empty_object() {
    let attrs = BlockAttributes::new();
    assert_eq!(attrs.serialize().unwrap(), "{}");
}
