//! # bet365-rs
//!
//! A client for the Bet365 sports odds API served through RapidAPI. Each of
//! the six read-only endpoints is one blocking GET whose JSON body comes back
//! wrapped in a lenient, typed facade.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bet365_rs::{Bet365ApiClient, Config, Envelope, ResultFields, SportId};
//!
//! # fn example() -> anyhow::Result<()> {
//! // Load configuration from config.toml (or BET365_* environment variables)
//! let config = Config::load()?;
//! let client = Bet365ApiClient::new(config)?;
//!
//! let upcoming = client.upcoming_events(SportId::TableTennis.code(), None, None, None, None)?;
//! println!("success: {:?}", upcoming.success());
//!
//! // `None` when the provider sent no results at all
//! for event in upcoming.results().unwrap_or_default() {
//!     let home = event.home().and_then(|team| team.name());
//!     let away = event.away().and_then(|team| team.name());
//!     println!("{:?}: {:?} v {:?}", event.our_event_id(), home, away);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Response facades
//!
//! | Endpoint | Method | Facade |
//! |---|---|---|
//! | `result` | [`Bet365ApiClient::result`] | [`ResultResponse`] |
//! | `inplay_filter` | [`Bet365ApiClient::in_play_filter`] | [`Bet365Response`] |
//! | `event` | [`Bet365ApiClient::in_play_odds`] | [`InPlayEventsResponse`] |
//! | `prematch` (v2) | [`Bet365ApiClient::pre_match_odds`] | [`PreMatchOddsResponse`] |
//! | `inplay` | [`Bet365ApiClient::in_play_events`] | [`InPlayEventsResponse`] |
//! | `upcoming` | [`Bet365ApiClient::upcoming_events`] | [`UpcomingEventsResponse`] |
//!
//! Missing and `null` fields read as `None`; list accessors return `None`
//! instead of an empty `Vec`.
//!
//! ## Configuration
//!
//! Create a `config.toml` file with your RapidAPI credentials:
//!
//! ```toml
//! [bet365]
//! api_host = "bet365-sports-odds.p.rapidapi.com"
//! api_key = "your_api_key"
//! ```
//!
//! or export `BET365_API_HOST` and `BET365_API_KEY` (a `.env` file works too).

pub mod api_client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod mnemonic;
pub mod response;
pub mod sport;

// Re-export commonly used types at the crate root
pub use api_client::Bet365ApiClient;
pub use config::Config;
pub use endpoint::{ApiVersion, Endpoint};
pub use error::TransportError;
pub use response::{
    Bet365Response, Envelope, FiResult, InPlayEventsResponse, InPlayRecord, JsonView, MatchResult,
    Meta, Pager, PreMatchOddsResponse, Response, ResultBase, ResultEvent, ResultFields,
    ResultResponse, Stats, UpcomingEvent, UpcomingEventsResponse,
};
pub use sport::SportId;
