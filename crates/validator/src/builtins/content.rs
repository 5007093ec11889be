//! Content rule: `email`.

use std::sync::LazyLock;

use serde_json::Value;

/// Local part from the RFC 5322 `atext` set plus dots, then a domain of DNS
/// labels with at least one dot.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).unwrap()
});

/// Returns true if `input` is a syntactically valid email address.
#[must_use]
pub fn is_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

/// `email`: value is a string holding a valid address.
#[must_use]
pub fn email(value: Option<&Value>) -> bool {
    value.and_then(Value::as_str).is_some_and(is_email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("user@example.com")]
    #[case("first.last+tag@mail.example.co.uk")]
    #[case("o'brien@example.ie")]
    #[case("x@a-b.io")]
    fn test_valid(#[case] input: &str) {
        assert!(is_email(input), "{input}");
    }

    #[rstest]
    #[case("invalid-email")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@localhost")]
    #[case("user@-example.com")]
    #[case("user@example.")]
    #[case("user name@example.com")]
    #[case("")]
    fn test_invalid(#[case] input: &str) {
        assert!(!is_email(input), "{input}");
    }

    #[test]
    fn test_non_string_values_fail() {
        assert!(!email(None));
        assert!(!email(Some(&json!(null))));
        assert!(!email(Some(&json!(42))));
        assert!(email(Some(&json!("user@example.com"))));
    }
}
