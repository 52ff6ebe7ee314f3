use serde_json::Value;
use url::Url;

use crate::club::ClubId;
use crate::config::Settings;
use crate::error::{ErrorKind, Result};

/// Fetches the match history of a club from the pro clubs API.
///
/// Every call issues exactly one blocking GET. There are no retries.
#[derive(Clone, Debug, Default)]
pub struct Fetcher {
    settings: Settings,
}

impl Fetcher {
    pub fn new(settings: Settings) -> Fetcher {
        Fetcher { settings }
    }

    /// Build `<base>/clubs/matches?clubIds=..&platform=..&matchType=..` for the given club.
    pub fn matches_url(&self, club_id: &ClubId) -> Result<Url> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{}/clubs/matches", base))?;
        url.query_pairs_mut()
            .append_pair("clubIds", club_id.as_str())
            .append_pair("platform", self.settings.platform)
            .append_pair("matchType", self.settings.match_type.as_str());
        Ok(url)
    }

    /// Fetch the matches of a club and return the body as an opaque JSON value.
    ///
    /// A 4xx or 5xx status, a transport failure, a timeout or a body that is not JSON all
    /// produce an error.
    pub fn fetch(&self, club_id: &ClubId) -> Result<Value> {
        let url = self.matches_url(club_id)?;
        debug!("fetching matches for club {} from {}", club_id, url);

        let mut request = attohttpc::get(url.as_str()).timeout(self.settings.timeout);
        for &(name, value) in self.settings.headers {
            request = request.try_header(name, value)?;
        }

        let response = request.send()?;
        let status = response.status();
        debug!("upstream answered {}", status);

        if status.is_client_error() || status.is_server_error() {
            warn!("rejecting response with status {}", status);
            return Err(ErrorKind::Status(status, url).into());
        }

        let body = response.bytes()?;
        trace!("read {} bytes of body", body.len());
        Ok(serde_json::from_slice(&body)?)
    }
}
