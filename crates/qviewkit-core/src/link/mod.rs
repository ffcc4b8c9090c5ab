//! `qviewkit://` deep links.
//!
//! A deep link names one measurement run by its identifier and carries an open set of
//! `key=value` parameters:
//!
//! ```text
//! qviewkit://<id>[/][?<key>=<value>[&<key>=<value>...]]
//! ```
//!
//! Unknown keys are kept rather than rejected so new parameters can be added without
//! touching the parser. Parsing is a pure function of the input string.

mod error;
mod query;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use error::{ParseError, ParseErrorKind};

/// Scheme token of a deep link (case-sensitive).
pub const SCHEME: &str = "qviewkit";

const SCHEME_PREFIX: &str = "qviewkit://";

/// A successfully parsed deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLink {
    id: String,
    params: HashMap<String, String>,
}

/// Parses a `qviewkit://` deep link.
///
/// # Examples
///
/// - `parse("qviewkit://ABCDEF/")` → id `"ABCDEF"`, no params
/// - `parse("qviewkit://ABCDEF?repo=https://measurements.phi.kit.edu")` → id `"ABCDEF"`,
///   `repo` = `"https://measurements.phi.kit.edu"`
pub fn parse(text: &str) -> Result<ParsedLink, ParseError> {
    let result = parse_link(text);
    match &result {
        Ok(link) => tracing::trace!(id = %link.id, params = link.params.len(), "parsed deep link"),
        Err(e) => tracing::debug!(link = text, "rejected deep link: {}", e),
    }
    result
}

fn parse_link(text: &str) -> Result<ParsedLink, ParseError> {
    let rest = text
        .strip_prefix(SCHEME_PREFIX)
        .ok_or(ParseError::MalformedScheme)?;

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let id = path.strip_suffix('/').unwrap_or(path);
    validate_id(id)?;

    let params = match query {
        Some(q) => query::parse_query(q)?,
        None => HashMap::new(),
    };

    Ok(ParsedLink {
        id: id.to_string(),
        params,
    })
}

fn validate_id(id: &str) -> Result<(), ParseError> {
    if id.is_empty() {
        return Err(ParseError::MissingIdentifier);
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ParseError::InvalidIdentifier { id: id.to_string() });
    }
    Ok(())
}

impl ParsedLink {
    /// Link for `id` with no parameters.
    pub fn new(id: impl Into<String>) -> Result<Self, ParseError> {
        let id = id.into();
        validate_id(&id)?;
        Ok(Self {
            id,
            params: HashMap::new(),
        })
    }

    /// Returns the link with `key` set to `value`, replacing any previous value.
    pub fn with_param(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ParseError> {
        let key = key.into();
        let value = value.into();
        if key.is_empty() {
            return Err(ParseError::MalformedQueryPair {
                pair: format!("={}", value),
            });
        }
        self.params.insert(key, value);
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Unix timestamp encoded in the identifier, if it is a qkit measurement id.
    pub fn timestamp(&self) -> Option<u64> {
        crate::uuid::decode_uuid(&self.id).ok()
    }

    pub fn into_parts(self) -> (String, HashMap<String, String>) {
        (self.id, self.params)
    }
}

impl FromStr for ParsedLink {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Renders the canonical link: keys sorted, keys and values form-urlencoded.
impl fmt::Display for ParsedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SCHEME_PREFIX, self.id)?;

        let mut pairs: Vec<(&String, &String)> = self.params.iter().collect();
        pairs.sort();
        for (i, (key, value)) in pairs.into_iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, encode_component(key), encode_component(value))?;
        }
        Ok(())
    }
}

fn encode_component(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_identifier() {
        let link = parse("qviewkit://ABCDEF").unwrap();
        assert_eq!(link.id(), "ABCDEF");
        assert!(link.params().is_empty());
    }

    #[test]
    fn trailing_slash_ignored() {
        assert_eq!(
            parse("qviewkit://ABCDEF/").unwrap(),
            parse("qviewkit://ABCDEF").unwrap()
        );
        let link = parse("qviewkit://ABCDEF/?orig=10.0.0.1").unwrap();
        assert_eq!(link.id(), "ABCDEF");
        assert_eq!(link.get("orig"), Some("10.0.0.1"));
    }

    #[test]
    fn scheme_is_exact() {
        for bad in [
            "http://ABCDEF",
            "QVIEWKIT://ABCDEF",
            "qviewkit:ABCDEF",
            "qviewkit:/ABCDEF",
            " qviewkit://ABCDEF",
            "",
        ] {
            assert_eq!(parse(bad).unwrap_err(), ParseError::MalformedScheme, "{bad:?}");
        }
    }

    #[test]
    fn empty_identifier() {
        for bad in [
            "qviewkit://",
            "qviewkit:///",
            "qviewkit://?repo=x",
            "qviewkit:///?repo=x",
        ] {
            assert_eq!(parse(bad).unwrap_err(), ParseError::MissingIdentifier, "{bad:?}");
        }
    }

    #[test]
    fn identifier_must_be_alphanumeric() {
        for bad in [
            "qviewkit://AB-CD",
            "qviewkit://ABC/extra",
            "qviewkit://ABC//",
            "qviewkit://AB%20",
        ] {
            assert_eq!(
                parse(bad).unwrap_err().kind(),
                ParseErrorKind::InvalidIdentifier,
                "{bad:?}"
            );
        }
    }

    #[test]
    fn question_mark_without_pairs() {
        let link = parse("qviewkit://ABCDEF?").unwrap();
        assert!(link.params().is_empty());
    }

    #[test]
    fn malformed_pair() {
        assert_eq!(
            parse("qviewkit://ABCDEF?repo").unwrap_err().kind(),
            ParseErrorKind::MalformedQueryPair
        );
        assert_eq!(
            parse("qviewkit://ABCDEF?=x").unwrap_err().kind(),
            ParseErrorKind::MalformedQueryPair
        );
    }

    #[test]
    fn from_str_delegates() {
        let link: ParsedLink = "qviewkit://XYZ?a=1".parse().unwrap();
        assert_eq!(link.get("a"), Some("1"));
        assert!("nope".parse::<ParsedLink>().is_err());
    }

    #[test]
    fn display_is_canonical() {
        let link = ParsedLink::new("ABCDEF")
            .unwrap()
            .with_param("repo", "https://measurements.phi.kit.edu")
            .unwrap()
            .with_param("orig", "10.0.0.1")
            .unwrap();
        assert_eq!(
            link.to_string(),
            "qviewkit://ABCDEF?orig=10.0.0.1&repo=https%3A%2F%2Fmeasurements.phi.kit.edu"
        );
        assert_eq!(parse(&link.to_string()).unwrap(), link);
    }

    #[test]
    fn display_escapes_separators() {
        let link = ParsedLink::new("A1")
            .unwrap()
            .with_param("note", "a&b=c d")
            .unwrap();
        let text = link.to_string();
        assert_eq!(text, "qviewkit://A1?note=a%26b%3Dc+d");
        assert_eq!(parse(&text).unwrap().get("note"), Some("a&b=c d"));
    }

    #[test]
    fn new_validates_identifier() {
        assert_eq!(ParsedLink::new("").unwrap_err(), ParseError::MissingIdentifier);
        assert!(ParsedLink::new("a/b").is_err());
        assert!(ParsedLink::new("A1").unwrap().with_param("", "x").is_err());
    }

    #[test]
    fn timestamp_from_qkit_identifier() {
        let link = parse("qviewkit://RFSTU8").unwrap();
        let expected = crate::uuid::decode_uuid("RFSTU8").unwrap();
        assert_eq!(link.timestamp(), Some(expected));
    }

    #[test]
    fn into_parts() {
        let (id, params) = parse("qviewkit://ID?k=v").unwrap().into_parts();
        assert_eq!(id, "ID");
        assert_eq!(params.get("k").map(String::as_str), Some("v"));
    }
}
