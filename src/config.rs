use std::fmt::{self, Display};
use std::time::Duration;

/// Root of the EA NHL pro clubs API.
pub const BASE_URL: &str = "https://proclubs.ea.com/api/nhl";

/// Platform family token required by the API.
pub const PLATFORM: &str = "common-gen5";

/// Upstream timeout for the whole request.
pub const TIMEOUT: Duration = Duration::from_secs(10);

/// Headers sent with every request.
///
/// `br` is left out of `Accept-Encoding` because only gzip and deflate bodies can be decoded.
/// There is no `Connection` entry: the client always sends `Connection: close`.
pub const HEADERS: &[(&str, &str)] = &[
    (
        "user-agent",
        "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/119.0",
    ),
    ("accept", "application/json"),
    ("accept-language", "en-US,en"),
    ("referer", "https://proclubs.ea.com/"),
    ("accept-encoding", "gzip, deflate"),
    ("content-type", "application/json"),
];

/// Category of games returned by the matches endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Private games between clubs.
    ClubPrivate,
    /// 6v6 league games.
    GameType5,
    /// 3v3 drop-in games.
    GameType10,
}

impl MatchType {
    /// The token the API expects in the `matchType` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::ClubPrivate => "club_private",
            MatchType::GameType5 => "gameType5",
            MatchType::GameType10 => "gameType10",
        }
    }
}

impl Default for MatchType {
    fn default() -> Self {
        MatchType::ClubPrivate
    }
}

impl Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request configuration.
///
/// The default value points at the production API. Everything is fixed at compile time;
/// library callers may swap the base URL, e.g. to target a local server.
#[derive(Clone, Debug)]
pub struct Settings {
    pub(crate) base_url: String,
    pub(crate) platform: &'static str,
    pub(crate) match_type: MatchType,
    pub(crate) timeout: Duration,
    pub(crate) headers: &'static [(&'static str, &'static str)],
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: BASE_URL.to_string(),
            platform: PLATFORM,
            match_type: MatchType::default(),
            timeout: TIMEOUT,
            headers: HEADERS,
        }
    }
}

impl Settings {
    /// Default settings with another base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Settings {
            base_url: base_url.into(),
            ..Settings::default()
        }
    }

    /// Select the category of games to query.
    pub fn match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = match_type;
        self
    }

    /// Set the total request timeout.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn platform(&self) -> &str {
        self.platform
    }

    pub fn headers(&self) -> &'static [(&'static str, &'static str)] {
        self.headers
    }
}
