//! Query-string splitting and percent-decoding.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

use super::ParseError;

/// Splits `key=value&key=value` into a map.
///
/// - The value runs from the first `=` to the next `&`, so it may itself contain `=`, `:` or `/`
/// - Keys that appear more than once keep their last value
/// - An empty query yields an empty map; empty pairs (`a=1&&b=2`, trailing `&`) are rejected
pub(super) fn parse_query(query: &str) -> Result<HashMap<String, String>, ParseError> {
    let mut params = HashMap::new();
    if query.is_empty() {
        return Ok(params);
    }

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) if !k.is_empty() => (k, v),
            _ => {
                return Err(ParseError::MalformedQueryPair {
                    pair: pair.to_string(),
                })
            }
        };
        params.insert(decode_component(key), decode_component(value));
    }

    Ok(params)
}

/// Form-urlencoded decode: `+` becomes a space, `%XX` the byte. Invalid UTF-8 is replaced
/// lossily and malformed escapes are kept literally.
pub(super) fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
