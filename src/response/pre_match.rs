use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::base::{field, map_list, Bet365Response, Envelope, FiResult};

/// Facade for the v2 `prematch` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreMatchOddsResponse {
    envelope: Bet365Response,
}

impl PreMatchOddsResponse {
    pub fn new(data: Value) -> Self {
        Self {
            envelope: Bet365Response::new(data),
        }
    }

    pub fn results(&self) -> Option<Vec<FiResult<'_>>> {
        map_list(field(self.envelope.as_value(), "results"), FiResult::new)
    }

    pub fn into_inner(self) -> Value {
        self.envelope.into_inner()
    }
}

impl Envelope for PreMatchOddsResponse {
    fn envelope(&self) -> &Bet365Response {
        &self.envelope
    }
}

impl From<Value> for PreMatchOddsResponse {
    fn from(data: Value) -> Self {
        Self::new(data)
    }
}
