use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::base::{
    epoch_field, field, map_list, str_field, Bet365Response, Envelope, JsonView, Meta,
    ResultFields,
};

/// One line of the match timeline, e.g. `"1' - 1st Goal - (Estudiantes Rio Cuarto) -"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultEvent<'a> {
    data: &'a Value,
}

impl<'a> ResultEvent<'a> {
    pub fn new(data: &'a Value) -> Self {
        Self { data }
    }

    pub fn id(&self) -> Option<&'a str> {
        str_field(self.data, "id")
    }

    pub fn text(&self) -> Option<&'a str> {
        str_field(self.data, "text")
    }
}

impl<'a> JsonView<'a> for ResultEvent<'a> {
    fn value(&self) -> &'a Value {
        self.data
    }
}

/// A settled (or settling) match from the `result` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MatchResult<'a> {
    data: &'a Value,
}

impl<'a> MatchResult<'a> {
    pub fn new(data: &'a Value) -> Self {
        Self { data }
    }

    pub fn o_away(&self) -> Option<Meta<'a>> {
        field(self.data, "o_away").map(Meta::new)
    }

    pub fn timer(&self) -> Option<&'a Value> {
        field(self.data, "timer")
    }

    /// Per-period scores keyed by period number: `{"1": {"home": "1", "away": "2"}}`.
    pub fn scores(&self) -> Option<&'a Value> {
        field(self.data, "scores")
    }

    pub fn stats(&self) -> Option<&'a Value> {
        field(self.data, "stats")
    }

    pub fn extra(&self) -> Option<&'a Value> {
        field(self.data, "extra")
    }

    /// `None` when the match has no timeline, never an empty `Vec`.
    pub fn events(&self) -> Option<Vec<ResultEvent<'a>>> {
        map_list(field(self.data, "events"), ResultEvent::new)
    }

    pub fn has_lineup(&self) -> Option<&'a str> {
        str_field(self.data, "has_lineup")
    }

    pub fn inplay_created_at(&self) -> Option<&'a str> {
        str_field(self.data, "inplay_created_at")
    }

    pub fn inplay_created_at_utc(&self) -> Option<DateTime<Utc>> {
        epoch_field(self.data, "inplay_created_at")
    }

    pub fn inplay_updated_at(&self) -> Option<&'a str> {
        str_field(self.data, "inplay_updated_at")
    }

    pub fn inplay_updated_at_utc(&self) -> Option<DateTime<Utc>> {
        epoch_field(self.data, "inplay_updated_at")
    }

    pub fn confirmed_at(&self) -> Option<&'a str> {
        str_field(self.data, "confirmed_at")
    }

    pub fn confirmed_at_utc(&self) -> Option<DateTime<Utc>> {
        epoch_field(self.data, "confirmed_at")
    }
}

impl<'a> JsonView<'a> for MatchResult<'a> {
    fn value(&self) -> &'a Value {
        self.data
    }
}

impl<'a> ResultFields<'a> for MatchResult<'a> {}

/// Facade for the `result` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultResponse {
    envelope: Bet365Response,
}

impl ResultResponse {
    pub fn new(data: Value) -> Self {
        Self {
            envelope: Bet365Response::new(data),
        }
    }

    pub fn results(&self) -> Option<Vec<MatchResult<'_>>> {
        map_list(field(self.envelope.as_value(), "results"), MatchResult::new)
    }

    pub fn into_inner(self) -> Value {
        self.envelope.into_inner()
    }
}

impl Envelope for ResultResponse {
    fn envelope(&self) -> &Bet365Response {
        &self.envelope
    }
}

impl From<Value> for ResultResponse {
    fn from(data: Value) -> Self {
        Self::new(data)
    }
}
