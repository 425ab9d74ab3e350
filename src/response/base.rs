use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Field access helpers
// ============================================================================

/// Missing keys and explicit `null`s both read as `None`.
pub(crate) fn field<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.get(key).filter(|value| !value.is_null())
}

pub(crate) fn str_field<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    field(data, key).and_then(Value::as_str)
}

/// Integers arrive both as JSON numbers and as numeric strings.
pub(crate) fn int_field(data: &Value, key: &str) -> Option<i64> {
    field(data, key).and_then(|value| match value {
        Value::String(s) => s.trim().parse().ok(),
        other => other.as_i64(),
    })
}

/// Epoch seconds, either as a string (`"1581990232"`) or a number.
pub(crate) fn epoch_field(data: &Value, key: &str) -> Option<DateTime<Utc>> {
    int_field(data, key).and_then(|secs| DateTime::from_timestamp(secs, 0))
}

/// Wrap each element of a list field, or `None` when the list is absent or empty.
pub(crate) fn map_list<'a, T>(
    list: Option<&'a Value>,
    wrap: fn(&'a Value) -> T,
) -> Option<Vec<T>> {
    match list {
        Some(Value::Array(items)) if !items.is_empty() => Some(items.iter().map(wrap).collect()),
        _ => None,
    }
}

// ============================================================================
// View traits
// ============================================================================

/// A read-only view borrowing a JSON node from a parsed response.
pub trait JsonView<'a> {
    fn value(&self) -> &'a Value;

    /// The stored value for `key`, `null` included.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.value().get(key)
    }

    fn contains_key(&self, key: &str) -> bool {
        self.value().get(key).is_some()
    }
}

/// Fields shared by every match-shaped record (results, upcoming events).
pub trait ResultFields<'a>: JsonView<'a> {
    fn id(&self) -> Option<&'a str> {
        str_field(self.value(), "id")
    }

    fn sport_id(&self) -> Option<&'a str> {
        str_field(self.value(), "sport_id")
    }

    fn time(&self) -> Option<&'a str> {
        str_field(self.value(), "time")
    }

    fn time_utc(&self) -> Option<DateTime<Utc>> {
        epoch_field(self.value(), "time")
    }

    fn time_status(&self) -> Option<&'a str> {
        str_field(self.value(), "time_status")
    }

    fn league(&self) -> Option<Meta<'a>> {
        field(self.value(), "league").map(Meta::new)
    }

    fn home(&self) -> Option<Meta<'a>> {
        field(self.value(), "home").map(Meta::new)
    }

    fn away(&self) -> Option<Meta<'a>> {
        field(self.value(), "away").map(Meta::new)
    }

    /// Score summary such as `"2-1"`.
    fn ss(&self) -> Option<&'a str> {
        str_field(self.value(), "ss")
    }
}

// ============================================================================
// Generic envelope
// ============================================================================

/// The `{ "success": .., "results": [..] }` envelope every endpoint answers with.
///
/// Owns the parsed body; all nested views borrow from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bet365Response {
    data: Value,
}

impl Bet365Response {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    pub fn as_value(&self) -> &Value {
        &self.data
    }

    pub fn into_inner(self) -> Value {
        self.data
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

impl From<Value> for Bet365Response {
    fn from(data: Value) -> Self {
        Self::new(data)
    }
}

/// Shared accessors for every top-level response facade.
pub trait Envelope {
    fn envelope(&self) -> &Bet365Response;

    /// `1` on a well-formed payload. Not enforced.
    fn success(&self) -> Option<i64> {
        int_field(self.envelope().as_value(), "success")
    }

    /// The untyped `results` list, for facades to re-wrap element-wise.
    fn raw_results(&self) -> Option<&[Value]> {
        field(self.envelope().as_value(), "results")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}

impl Envelope for Bet365Response {
    fn envelope(&self) -> &Bet365Response {
        self
    }
}

// ============================================================================
// Nested views
// ============================================================================

/// A named entity: team, league, country.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Meta<'a> {
    data: &'a Value,
}

impl<'a> Meta<'a> {
    pub fn new(data: &'a Value) -> Self {
        Self { data }
    }

    pub fn id(&self) -> Option<&'a str> {
        str_field(self.data, "id")
    }

    pub fn name(&self) -> Option<&'a str> {
        str_field(self.data, "name")
    }

    pub fn image_id(&self) -> Option<&'a str> {
        str_field(self.data, "image_id")
    }

    pub fn cc(&self) -> Option<&'a str> {
        str_field(self.data, "cc")
    }
}

impl<'a> JsonView<'a> for Meta<'a> {
    fn value(&self) -> &'a Value {
        self.data
    }
}

/// Pagination block on list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Pager<'a> {
    data: &'a Value,
}

impl<'a> Pager<'a> {
    pub fn new(data: &'a Value) -> Self {
        Self { data }
    }

    pub fn page(&self) -> Option<i64> {
        int_field(self.data, "page")
    }

    pub fn per_page(&self) -> Option<i64> {
        int_field(self.data, "per_page")
    }

    pub fn total(&self) -> Option<i64> {
        int_field(self.data, "total")
    }
}

impl<'a> JsonView<'a> for Pager<'a> {
    fn value(&self) -> &'a Value {
        self.data
    }
}

/// The bare common result shape, for records that carry nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultBase<'a> {
    data: &'a Value,
}

impl<'a> ResultBase<'a> {
    pub fn new(data: &'a Value) -> Self {
        Self { data }
    }
}

impl<'a> JsonView<'a> for ResultBase<'a> {
    fn value(&self) -> &'a Value {
        self.data
    }
}

impl<'a> ResultFields<'a> for ResultBase<'a> {}

/// Stats stamp attached to in-play responses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Stats<'a> {
    data: &'a Value,
}

impl<'a> Stats<'a> {
    pub fn new(data: &'a Value) -> Self {
        Self { data }
    }

    pub fn event_id(&self) -> Option<&'a str> {
        str_field(self.data, "event_id")
    }

    pub fn update_at(&self) -> Option<&'a str> {
        str_field(self.data, "update_at")
    }

    pub fn update_at_utc(&self) -> Option<DateTime<Utc>> {
        epoch_field(self.data, "update_at")
    }

    /// Human-readable timestamp, e.g. `"2020-02-18 01:54:13"`.
    pub fn update_dt(&self) -> Option<&'a str> {
        str_field(self.data, "update_dt")
    }
}

impl<'a> JsonView<'a> for Stats<'a> {
    fn value(&self) -> &'a Value {
        self.data
    }
}

/// A record keyed by the provider's fixture identifier (`FI`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FiResult<'a> {
    data: &'a Value,
}

impl<'a> FiResult<'a> {
    pub fn new(data: &'a Value) -> Self {
        Self { data }
    }

    pub fn fi(&self) -> Option<&'a str> {
        str_field(self.data, "FI")
    }

    pub fn event_id(&self) -> Option<&'a str> {
        str_field(self.data, "event_id")
    }

    /// The main market block, passed through untouched.
    pub fn main(&self) -> Option<&'a Value> {
        field(self.data, "main")
    }
}

impl<'a> JsonView<'a> for FiResult<'a> {
    fn value(&self) -> &'a Value {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_int_field_accepts_strings_and_numbers() {
        let data = json!({"a": 3, "b": "17", "c": "x", "d": null});
        assert_eq!(int_field(&data, "a"), Some(3));
        assert_eq!(int_field(&data, "b"), Some(17));
        assert_eq!(int_field(&data, "c"), None);
        assert_eq!(int_field(&data, "d"), None);
        assert_eq!(int_field(&data, "e"), None);
    }

    #[test]
    fn test_epoch_field() {
        let data = json!({"updated_at": "1581990232"});
        let parsed = epoch_field(&data, "updated_at").unwrap();
        assert_eq!(parsed.timestamp(), 1581990232);
        assert_eq!(parsed.format("%Y-%m-%d").to_string(), "2020-02-18");
    }

    #[test]
    fn test_map_list_distinguishes_empty() {
        let empty = json!([]);
        let full = json!([1, 2]);
        assert!(map_list(Some(&empty), |v| v).is_none());
        assert!(map_list(None, |v: &Value| v).is_none());
        assert_eq!(map_list(Some(&full), |v| v).map(|v| v.len()), Some(2));
    }
}
