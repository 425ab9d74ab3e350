use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    #[default]
    V1,
    V2,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six read-only endpoints exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Result,
    InPlayFilter,
    InPlayOdds,
    PreMatchOdds,
    InPlayEvents,
    UpcomingEvents,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::Result,
        Endpoint::InPlayFilter,
        Endpoint::InPlayOdds,
        Endpoint::PreMatchOdds,
        Endpoint::InPlayEvents,
        Endpoint::UpcomingEvents,
    ];

    /// Path segment appended after `/{version}/bet365/`.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Result => "result",
            Endpoint::InPlayFilter => "inplay_filter",
            Endpoint::InPlayOdds => "event",
            Endpoint::PreMatchOdds => "prematch",
            Endpoint::InPlayEvents => "inplay",
            Endpoint::UpcomingEvents => "upcoming",
        }
    }

    pub fn version(&self) -> ApiVersion {
        match self {
            Endpoint::PreMatchOdds => ApiVersion::V2,
            _ => ApiVersion::V1,
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|endpoint| endpoint.path() == path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_prematch_uses_v2() {
        for endpoint in Endpoint::ALL {
            let expected = if endpoint == Endpoint::PreMatchOdds {
                ApiVersion::V2
            } else {
                ApiVersion::V1
            };
            assert_eq!(endpoint.version(), expected, "{endpoint}");
        }
    }

    #[test]
    fn test_from_path_round_trips() {
        for endpoint in Endpoint::ALL {
            assert_eq!(Endpoint::from_path(endpoint.path()), Some(endpoint));
        }
        assert_eq!(Endpoint::from_path("failure"), None);
    }
}
