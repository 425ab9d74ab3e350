use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::base::{field, map_list, str_field, Bet365Response, Envelope, JsonView, Stats};
use crate::mnemonic;

/// A raw provider record whose keys are two-letter field codes.
///
/// The `type` field tells what the record describes (`EV` event, `MA` market,
/// `PA` participant, `CL` classification, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InPlayRecord<'a> {
    data: &'a Value,
}

impl<'a> InPlayRecord<'a> {
    pub fn new(data: &'a Value) -> Self {
        Self { data }
    }

    pub fn record_type(&self) -> Option<&'a str> {
        str_field(self.data, "type")
    }

    /// Mnemonic name of the record type, e.g. `"MARKET"` for `MA`.
    pub fn type_name(&self) -> Option<&'static str> {
        self.record_type().and_then(mnemonic::describe)
    }

    /// String value stored under a field code such as `"NA"` or `"OD"`.
    pub fn code(&self, code: &str) -> Option<&'a str> {
        str_field(self.data, code)
    }

    /// Every field paired with the mnemonic for its code, in document order.
    pub fn labelled_fields(
        &self,
    ) -> impl Iterator<Item = (&'a str, Option<&'static str>, &'a Value)> + 'a {
        let data = self.data;
        data.as_object()
            .into_iter()
            .flat_map(|map| map.iter())
            .map(|(key, value)| (key.as_str(), mnemonic::describe(key), value))
    }
}

impl<'a> JsonView<'a> for InPlayRecord<'a> {
    fn value(&self) -> &'a Value {
        self.data
    }
}

/// Facade shared by the `inplay` and `event` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InPlayEventsResponse {
    envelope: Bet365Response,
}

impl InPlayEventsResponse {
    pub fn new(data: Value) -> Self {
        Self {
            envelope: Bet365Response::new(data),
        }
    }

    /// One record per top-level `results` element, in order.
    ///
    /// The live `inplay` and `event` payloads nest records as `[[...], [...]]`,
    /// so each element here wraps a whole group and `record_type()`/`code()`
    /// read `None`. Use [`records`](Self::records) to reach the individual records.
    pub fn results(&self) -> Option<Vec<InPlayRecord<'_>>> {
        map_list(field(self.envelope.as_value(), "results"), InPlayRecord::new)
    }

    /// All records with the provider's nested `[[...], [...]]` grouping flattened away.
    pub fn records(&self) -> Vec<InPlayRecord<'_>> {
        self.raw_results()
            .unwrap_or(&[])
            .iter()
            .flat_map(|item| match item {
                Value::Array(group) => group.iter().collect::<Vec<_>>(),
                other => vec![other],
            })
            .map(InPlayRecord::new)
            .collect()
    }

    /// The stats stamp: a nested `stats` object when the payload has one,
    /// the top-level `event_id`/`update_at`/`update_dt` fields otherwise.
    pub fn stats(&self) -> Stats<'_> {
        let data = self.envelope.as_value();
        match field(data, "stats") {
            Some(stats) if stats.is_object() => Stats::new(stats),
            _ => Stats::new(data),
        }
    }

    pub fn into_inner(self) -> Value {
        self.envelope.into_inner()
    }
}

impl Envelope for InPlayEventsResponse {
    fn envelope(&self) -> &Bet365Response {
        &self.envelope
    }
}

impl From<Value> for InPlayEventsResponse {
    fn from(data: Value) -> Self {
        Self::new(data)
    }
}
