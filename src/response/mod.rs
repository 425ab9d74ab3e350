//! Read-only facades over the JSON bodies the API returns.
//!
//! Top-level responses own the parsed document. Everything reachable from
//! them (`results` elements, `league`, `pager`, ...) is a borrowed view that
//! wraps the underlying node without copying it. Accessors never fail on a
//! missing key: absent and `null` fields both read as `None`, and list
//! accessors return `None` rather than an empty `Vec` when there is nothing
//! to wrap.

pub mod base;
pub mod in_play;
pub mod pre_match;
pub mod result;
pub mod upcoming;

pub use base::{
    Bet365Response, Envelope, FiResult, JsonView, Meta, Pager, ResultBase, ResultFields, Stats,
};
pub use in_play::{InPlayEventsResponse, InPlayRecord};
pub use pre_match::PreMatchOddsResponse;
pub use result::{MatchResult, ResultEvent, ResultResponse};
pub use upcoming::{UpcomingEvent, UpcomingEventsResponse};

use crate::endpoint::Endpoint;
use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::Value;

/// A parsed body wrapped in the facade registered for its endpoint.
///
/// Serializes back to the exact JSON it wraps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Result(ResultResponse),
    InPlayFilter(Bet365Response),
    InPlayOdds(InPlayEventsResponse),
    PreMatchOdds(PreMatchOddsResponse),
    InPlayEvents(InPlayEventsResponse),
    UpcomingEvents(UpcomingEventsResponse),
    /// Body from a path with no registered facade, returned as parsed.
    Raw(Value),
}

impl Response {
    /// Look up the facade for an endpoint path. Unknown paths pass the body through.
    pub fn from_endpoint(path: &str, body: Value) -> Self {
        match Endpoint::from_path(path) {
            Some(endpoint) => Self::for_endpoint(endpoint, body),
            None => Response::Raw(body),
        }
    }

    pub fn for_endpoint(endpoint: Endpoint, body: Value) -> Self {
        match endpoint {
            Endpoint::Result => Response::Result(ResultResponse::new(body)),
            Endpoint::InPlayFilter => Response::InPlayFilter(Bet365Response::new(body)),
            Endpoint::InPlayOdds => Response::InPlayOdds(InPlayEventsResponse::new(body)),
            Endpoint::PreMatchOdds => Response::PreMatchOdds(PreMatchOddsResponse::new(body)),
            Endpoint::InPlayEvents => Response::InPlayEvents(InPlayEventsResponse::new(body)),
            Endpoint::UpcomingEvents => {
                Response::UpcomingEvents(UpcomingEventsResponse::new(body))
            }
        }
    }

    /// The endpoint whose facade this is; `None` for raw bodies.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Response::Result(_) => Some(Endpoint::Result),
            Response::InPlayFilter(_) => Some(Endpoint::InPlayFilter),
            Response::InPlayOdds(_) => Some(Endpoint::InPlayOdds),
            Response::PreMatchOdds(_) => Some(Endpoint::PreMatchOdds),
            Response::InPlayEvents(_) => Some(Endpoint::InPlayEvents),
            Response::UpcomingEvents(_) => Some(Endpoint::UpcomingEvents),
            Response::Raw(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Response::Raw(_))
    }

    pub fn as_value(&self) -> &Value {
        match self {
            Response::Result(r) => r.envelope().as_value(),
            Response::InPlayFilter(r) => r.as_value(),
            Response::InPlayOdds(r) | Response::InPlayEvents(r) => r.envelope().as_value(),
            Response::PreMatchOdds(r) => r.envelope().as_value(),
            Response::UpcomingEvents(r) => r.envelope().as_value(),
            Response::Raw(value) => value,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Response::Result(r) => r.into_inner(),
            Response::InPlayFilter(r) => r.into_inner(),
            Response::InPlayOdds(r) | Response::InPlayEvents(r) => r.into_inner(),
            Response::PreMatchOdds(r) => r.into_inner(),
            Response::UpcomingEvents(r) => r.into_inner(),
            Response::Raw(value) => value,
        }
    }

    fn unexpected(self, wanted: &str) -> anyhow::Error {
        match self.endpoint() {
            Some(endpoint) => anyhow!("expected a {wanted} response, got one for `{endpoint}`"),
            None => anyhow!("expected a {wanted} response, got an unmapped body"),
        }
    }
}

impl TryFrom<Response> for ResultResponse {
    type Error = anyhow::Error;

    fn try_from(response: Response) -> Result<Self> {
        match response {
            Response::Result(r) => Ok(r),
            other => Err(other.unexpected("result")),
        }
    }
}

impl TryFrom<Response> for Bet365Response {
    type Error = anyhow::Error;

    fn try_from(response: Response) -> Result<Self> {
        match response {
            Response::InPlayFilter(r) => Ok(r),
            other => Err(other.unexpected("in-play filter")),
        }
    }
}

impl TryFrom<Response> for InPlayEventsResponse {
    type Error = anyhow::Error;

    fn try_from(response: Response) -> Result<Self> {
        match response {
            Response::InPlayOdds(r) | Response::InPlayEvents(r) => Ok(r),
            other => Err(other.unexpected("in-play")),
        }
    }
}

impl TryFrom<Response> for PreMatchOddsResponse {
    type Error = anyhow::Error;

    fn try_from(response: Response) -> Result<Self> {
        match response {
            Response::PreMatchOdds(r) => Ok(r),
            other => Err(other.unexpected("pre-match odds")),
        }
    }
}

impl TryFrom<Response> for UpcomingEventsResponse {
    type Error = anyhow::Error;

    fn try_from(response: Response) -> Result<Self> {
        match response {
            Response::UpcomingEvents(r) => Ok(r),
            other => Err(other.unexpected("upcoming events")),
        }
    }
}
