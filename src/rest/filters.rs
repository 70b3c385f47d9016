//! Filter sets for list operations.
//!
//! ShipStation rejects query parameters with empty values, so every filter
//! set is sanitized before a request is built: entries whose value is empty
//! are dropped, and the rest are rendered as query parameters in insertion
//! order. Values are passed through without type validation — the remote
//! service is the authority on what each filter accepts.
//!
//! The same rule applies to serialized request bodies, with one documented
//! asymmetry: [`strip_empty_members`] removes empty members from the top
//! level of an object only, leaving nested objects untouched even when
//! their fields are empty. The remote service tolerates nested empties but
//! not top-level ones.

use std::fmt;

/// A single filter value: one of a small closed set of scalar types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// A string value.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A boolean value.
    Bool(bool),
}

impl FilterValue {
    /// Returns `true` if the value is empty and must not reach the wire.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Str(value) if value.is_empty())
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An insertion-ordered set of filters for a list operation.
///
/// Keys keep the order they were first inserted in; assigning to an
/// existing key replaces its value in place. Sanitation happens when the
/// request is built, not on insertion, so a filter set can be constructed
/// freely and reused.
///
/// # Example
///
/// ```rust
/// use shipstation_api::Filters;
///
/// let filters = Filters::new()
///     .with("orderStatus", "awaiting_shipment")
///     .with("storeId", 12345)
///     .with("customerName", ""); // dropped at request time
///
/// assert_eq!(
///     filters.sanitized(),
///     vec![
///         ("orderStatus".to_string(), "awaiting_shipment".to_string()),
///         ("storeId".to_string(), "12345".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    entries: Vec<(String, FilterValue)>,
}

impl Filters {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no filters have been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of filters set, including empty-valued ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sets a filter, replacing the value in place if the key exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        let key = key.into();
        let value = value.into();

        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Sets a filter, consuming and returning the set for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets the page number used by paged list operations.
    pub fn set_page(&mut self, page: u32) {
        self.insert("page", page);
    }

    /// Renders the sanitized filter set as ordered query parameters.
    ///
    /// Empty-valued entries are absent; non-empty entries appear unmodified
    /// in insertion order.
    #[must_use]
    pub fn sanitized(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect()
    }
}

/// Removes empty members from the top level of a serialized object.
///
/// A member is empty when it is `null`, an empty string, an empty array,
/// or an empty object. Nested objects are passed through unmodified even
/// when individual fields inside them are empty; only the top level is
/// stripped. Non-object values are returned unchanged.
#[must_use]
pub(crate) fn strip_empty_members(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(members) => serde_json::Value::Object(
            members
                .into_iter()
                .filter(|(_, member)| !is_empty_member(member))
                .collect(),
        ),
        other => other,
    }
}

fn is_empty_member(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(a) => a.is_empty(),
        serde_json::Value::Object(o) => o.is_empty(),
        serde_json::Value::Bool(_) | serde_json::Value::Number(_) => false,
    }
}
