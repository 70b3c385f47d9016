//! HTTP response types for the ShipStation API client.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! values parsed from ShipStation's rate-limit headers.

use std::collections::HashMap;

/// Rate-limit information parsed from response headers.
///
/// ShipStation reports the remaining request quota and the seconds until
/// the quota window resets on every response:
///
/// - `X-Rate-Limit-Remaining`: requests left in the current window
/// - `X-Rate-Limit-Reset`: seconds until the window resets
///
/// # Example
///
/// ```rust
/// use shipstation_api::clients::RateLimit;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-rate-limit-remaining".to_string(), vec!["39".to_string()]);
/// headers.insert("x-rate-limit-reset".to_string(), vec!["52".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.remaining, 39);
/// assert_eq!(limit.reset_seconds, 52);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests remaining in the current quota window.
    pub remaining: u32,
    /// Seconds until the quota window resets.
    pub reset_seconds: u64,
}

impl RateLimit {
    /// Parses rate-limit values from a lowercased header map.
    ///
    /// Returns `None` unless both headers are present and numeric.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let first = |name: &str| headers.get(name).and_then(|values| values.first());

        let remaining = first("x-rate-limit-remaining")?.trim().parse().ok()?;
        let reset_seconds = first("x-rate-limit-reset")?.trim().parse().ok()?;

        Some(Self {
            remaining,
            reset_seconds,
        })
    }
}

/// An HTTP response from the ShipStation API.
///
/// Contains the response status code, headers (lowercased names, so lookups
/// are effectively case-insensitive), the decoded JSON body, and the raw
/// body text retained for error reporting.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body, `Null` when empty or not valid JSON.
    pub body: serde_json::Value,
    /// The raw response body text.
    pub raw_body: String,
    /// Rate-limit information, when the headers carried it.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, decoding the body and parsing the
    /// rate-limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, raw_body: String) -> Self {
        let body = serde_json::from_str(&raw_body).unwrap_or(serde_json::Value::Null);
        let rate_limit = RateLimit::from_headers(&headers);

        Self {
            code,
            headers,
            body,
            raw_body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is exactly 200.
    ///
    /// ShipStation signals success with 200 only; every other code carries
    /// an application-level error message in the body.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rate_headers(remaining: &str, reset: &str) -> HashMap<String, Vec<String>> {
        let mut headers = HashMap::new();
        headers.insert(
            "x-rate-limit-remaining".to_string(),
            vec![remaining.to_string()],
        );
        headers.insert("x-rate-limit-reset".to_string(), vec![reset.to_string()]);
        headers
    }

    #[test]
    fn test_is_ok_only_for_200() {
        let ok = HttpResponse::new(200, HashMap::new(), String::new());
        assert!(ok.is_ok());

        for code in [201, 204, 400, 404, 422, 429, 500] {
            let response = HttpResponse::new(code, HashMap::new(), String::new());
            assert!(!response.is_ok(), "expected is_ok() to be false for {code}");
        }
    }

    #[test]
    fn test_body_decoding() {
        let response = HttpResponse::new(200, HashMap::new(), r#"{"id": 7}"#.to_string());
        assert_eq!(response.body, json!({"id": 7}));
        assert_eq!(response.raw_body, r#"{"id": 7}"#);
    }

    #[test]
    fn test_unparseable_body_decodes_to_null() {
        let response = HttpResponse::new(200, HashMap::new(), "not json".to_string());
        assert_eq!(response.body, serde_json::Value::Null);
        assert_eq!(response.raw_body, "not json");
    }

    #[test]
    fn test_rate_limit_parsing() {
        let response = HttpResponse::new(200, rate_headers("39", "52"), String::new());
        let limit = response.rate_limit.unwrap();
        assert_eq!(limit.remaining, 39);
        assert_eq!(limit.reset_seconds, 52);
    }

    #[test]
    fn test_rate_limit_requires_both_headers() {
        let mut headers = HashMap::new();
        headers.insert("x-rate-limit-remaining".to_string(), vec!["5".to_string()]);

        assert!(RateLimit::from_headers(&headers).is_none());
        assert!(RateLimit::from_headers(&HashMap::new()).is_none());
    }

    #[test]
    fn test_rate_limit_rejects_non_numeric_values() {
        assert!(RateLimit::from_headers(&rate_headers("many", "52")).is_none());
        assert!(RateLimit::from_headers(&rate_headers("39", "soon")).is_none());
    }

    #[test]
    fn test_rate_limit_parsed_on_error_responses_too() {
        let response = HttpResponse::new(422, rate_headers("12", "30"), String::new());
        assert_eq!(
            response.rate_limit,
            Some(RateLimit {
                remaining: 12,
                reset_seconds: 30
            })
        );
    }
}
