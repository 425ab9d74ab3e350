use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::base::{
    epoch_field, field, map_list, str_field, Bet365Response, Envelope, JsonView, Pager,
    ResultFields,
};

/// A scheduled fixture from the `upcoming` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UpcomingEvent<'a> {
    data: &'a Value,
}

impl<'a> UpcomingEvent<'a> {
    pub fn new(data: &'a Value) -> Self {
        Self { data }
    }

    pub fn our_event_id(&self) -> Option<&'a str> {
        str_field(self.data, "our_event_id")
    }

    pub fn updated_at(&self) -> Option<&'a str> {
        str_field(self.data, "updated_at")
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        epoch_field(self.data, "updated_at")
    }
}

impl<'a> JsonView<'a> for UpcomingEvent<'a> {
    fn value(&self) -> &'a Value {
        self.data
    }
}

impl<'a> ResultFields<'a> for UpcomingEvent<'a> {}

/// Facade for the `upcoming` endpoint: results plus a `pager` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpcomingEventsResponse {
    envelope: Bet365Response,
}

impl UpcomingEventsResponse {
    pub fn new(data: Value) -> Self {
        Self {
            envelope: Bet365Response::new(data),
        }
    }

    pub fn results(&self) -> Option<Vec<UpcomingEvent<'_>>> {
        map_list(field(self.envelope.as_value(), "results"), UpcomingEvent::new)
    }

    pub fn pager(&self) -> Option<Pager<'_>> {
        field(self.envelope.as_value(), "pager").map(Pager::new)
    }

    /// Whether the pager reports pages past the current one.
    pub fn has_next_page(&self) -> bool {
        let Some(pager) = self.pager() else {
            return false;
        };
        match (pager.page(), pager.per_page(), pager.total()) {
            (Some(page), Some(per_page), Some(total)) => {
                page.checked_mul(per_page).is_some_and(|seen| seen < total)
            }
            _ => false,
        }
    }

    pub fn into_inner(self) -> Value {
        self.envelope.into_inner()
    }
}

impl Envelope for UpcomingEventsResponse {
    fn envelope(&self) -> &Bet365Response {
        &self.envelope
    }
}

impl From<Value> for UpcomingEventsResponse {
    fn from(data: Value) -> Self {
        Self::new(data)
    }
}
