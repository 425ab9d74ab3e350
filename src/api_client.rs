use crate::config::{Bet365Config, Config};
use crate::endpoint::{ApiVersion, Endpoint};
use crate::error::TransportError;
use crate::response::*;
use anyhow::Result;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

const HOST_HEADER: &str = "x-rapidapi-host";
const KEY_HEADER: &str = "x-rapidapi-key";

/// Blocking client for the six Bet365 endpoints.
///
/// One GET per call; no retries, no caching. A non-2xx status fails with a
/// [`TransportError`].
#[derive(Debug, Clone)]
pub struct Bet365ApiClient {
    client: Client,
    config: Arc<Config>,
}

impl Bet365ApiClient {
    /// Create a new API client with the RapidAPI auth headers baked in
    pub fn new(config: Config) -> Result<Self> {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(HOST_HEADER, config.bet365.api_host.parse()?);
        let mut api_key: HeaderValue = config.bet365.api_key.parse()?;
        api_key.set_sensitive(true);
        headers.insert(KEY_HEADER, api_key);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn with_credentials(api_host: &str, api_key: &str) -> Result<Self> {
        Self::new(Config {
            bet365: Bet365Config::new(api_host, api_key),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `{base}/{version}/bet365/{path}`
    pub fn url(&self, path: &str, version: ApiVersion) -> String {
        format!("{}/{}/bet365/{}", self.config.bet365.base_url(), version, path)
    }

    /// Issue a GET for `path` and wrap the body in the facade registered for it.
    ///
    /// Parameters with no value (or an empty one) are left off the query string.
    /// Paths without a registered facade come back as [`Response::Raw`].
    pub fn get(
        &self,
        path: &str,
        params: &[(&str, Option<&str>)],
        version: ApiVersion,
    ) -> Result<Response> {
        let url = self.url(path, version);
        let query = prune_params(params);
        debug!("API request: GET {} {:?}", url, query);

        let response = self.client.get(&url).query(&query).send()?;

        let status = response.status();
        debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(TransportError { status, url }.into());
        }

        let body: Value = response.json()?;
        Ok(Response::from_endpoint(path, body))
    }

    fn call(&self, endpoint: Endpoint, params: &[(&str, Option<&str>)]) -> Result<Response> {
        self.get(endpoint.path(), params, endpoint.version())
    }

    // ========================================================================
    // Endpoints
    // ========================================================================

    /// Final or current result for one event
    pub fn result(&self, event_id: &str) -> Result<ResultResponse> {
        self.call(Endpoint::Result, &[("event_id", Some(event_id))])?
            .try_into()
    }

    /// Events currently in play, optionally narrowed to a sport or league
    pub fn in_play_filter(
        &self,
        sport_id: Option<&str>,
        league_id: Option<&str>,
    ) -> Result<Bet365Response> {
        self.call(
            Endpoint::InPlayFilter,
            &[("sport_id", sport_id), ("league_id", league_id)],
        )?
        .try_into()
    }

    /// In-play odds for one fixture.
    ///
    /// `lineup` is only honoured for cricket; `stats` for soccer, basketball,
    /// cricket, baseball and tennis.
    pub fn in_play_odds(
        &self,
        fi: &str,
        raw: Option<&str>,
        lineup: Option<&str>,
        stats: Option<&str>,
    ) -> Result<InPlayEventsResponse> {
        self.call(
            Endpoint::InPlayOdds,
            &[
                ("FI", Some(fi)),
                ("raw", raw),
                ("lineup", lineup),
                ("stats", stats),
            ],
        )?
        .try_into()
    }

    /// Pre-match odds for one fixture (v2 API)
    pub fn pre_match_odds(&self, fi: &str, raw: Option<&str>) -> Result<PreMatchOddsResponse> {
        self.call(Endpoint::PreMatchOdds, &[("FI", Some(fi)), ("raw", raw)])?
            .try_into()
    }

    /// Full in-play tree
    pub fn in_play_events(&self, raw: Option<&str>) -> Result<InPlayEventsResponse> {
        self.call(Endpoint::InPlayEvents, &[("raw", raw)])?
            .try_into()
    }

    /// Upcoming fixtures for a sport.
    ///
    /// `day` is a forward-only date such as `20201124`; pages hold 50 events.
    pub fn upcoming_events(
        &self,
        sport_id: &str,
        page: Option<&str>,
        lng_id: Option<&str>,
        day: Option<&str>,
        league_id: Option<&str>,
    ) -> Result<UpcomingEventsResponse> {
        self.call(
            Endpoint::UpcomingEvents,
            &[
                ("sport_id", Some(sport_id)),
                ("page", page),
                ("LNG_ID", lng_id),
                ("day", day),
                ("league_id", league_id),
            ],
        )?
        .try_into()
    }
}

/// Drop parameters whose value is missing or empty, keeping the order of the rest.
pub fn prune_params<'a>(params: &[(&'a str, Option<&'a str>)]) -> Vec<(&'a str, &'a str)> {
    params
        .iter()
        .filter_map(|&(key, value)| match value {
            Some(value) if !value.is_empty() => Some((key, value)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_params_drops_missing_and_empty() {
        let pruned = prune_params(&[
            ("sport_id", Some("19")),
            ("LNG_ID", None),
            ("day", Some("")),
            ("page", Some("2")),
        ]);
        assert_eq!(pruned, vec![("sport_id", "19"), ("page", "2")]);
    }

    #[test]
    fn test_prune_params_empty_input() {
        assert!(prune_params(&[]).is_empty());
        assert!(prune_params(&[("raw", None)]).is_empty());
    }

    #[test]
    fn test_url_uses_version_segment() {
        let client = Bet365ApiClient::with_credentials("host", "key").unwrap();
        assert_eq!(
            client.url("prematch", ApiVersion::V2),
            "https://bet365-sports-odds.p.rapidapi.com/v2/bet365/prematch"
        );
        assert_eq!(
            client.url("upcoming", ApiVersion::default()),
            "https://bet365-sports-odds.p.rapidapi.com/v1/bet365/upcoming"
        );
    }
}
