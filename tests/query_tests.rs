use apigw_bridge::utils::query::{encode_component, encode_query};
use indexmap::IndexMap;

#[test]
fn test_empty_params_give_empty_query() {
    assert_eq!(encode_query(&IndexMap::new()), "");
}

#[test]
fn test_reserved_characters_are_escaped() {
    assert_eq!(encode_component("a/b?c#d"), "a%2Fb%3Fc%23d");
    assert_eq!(encode_component("100%"), "100%25");
    assert_eq!(encode_component("safe-_.~"), "safe-_.~");
}

#[test]
fn test_literal_percent_twenty_is_not_a_space() {
    assert_eq!(encode_component("%20 "), "%2520+");
}

#[test]
fn test_non_ascii_is_utf8_escaped() {
    assert_eq!(encode_component("é"), "%C3%A9");
}

#[test]
fn test_query_joins_pairs() {
    let params = IndexMap::from([
        ("tags".to_string(), "a,b".to_string()),
        ("name".to_string(), "Ada Lovelace".to_string()),
    ]);
    assert_eq!(encode_query(&params), "tags=a,b&name=Ada+Lovelace");
}
