use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left literal in form-encoded query components. Commas stay readable.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b',');

/// Form-encodes a single key or value, spaces become `+`.
///
/// # Examples
///
/// ```
/// use apigw_bridge::utils::query::encode_component;
///
/// assert_eq!(encode_component("a b,c"), "a+b,c");
/// assert_eq!(encode_component("x&y=z"), "x%26y%3Dz");
/// ```
#[must_use]
pub fn encode_component(input: &str) -> String {
    // A literal '%' is always escaped, so every "%20" here came from a space.
    utf8_percent_encode(input, QUERY_COMPONENT)
        .to_string()
        .replace("%20", "+")
}

/// Joins query parameters into `k=v&k=v` form, in the order given.
#[must_use]
pub fn encode_query(params: &IndexMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}
