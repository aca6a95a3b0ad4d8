use const_format::formatcp;
use tracing::debug;

use crate::{errors::ApiError, objects::RecentRatings, SeriesRateClient, API_BASE, RUNTIME};

const API_RECENT: &str = formatcp!("{API_BASE}/recent");

pub struct RecentApi {
    client: SeriesRateClient,
}

impl RecentApi {
    pub(crate) fn new(client: SeriesRateClient) -> Self {
        Self { client }
    }

    pub fn get(&self) -> RecentGet {
        RecentGet {
            client: self.client.clone(),
        }
    }
}

/// Fetches the latest accepted ratings, most recent first. The backend caps
/// the list; the client never truncates it.
pub struct RecentGet {
    client: SeriesRateClient,
}

impl RecentGet {
    pub async fn send(self) -> Result<RecentRatings, ApiError> {
        let url = format!("{}{API_RECENT}", self.client.origin);

        let response = self.client.http.get(url).send().await?;

        let status = response.status();
        let is_err = status.is_client_error() || status.is_server_error();

        let text = response.text().await?;

        debug!(status = status.as_u16(), response = %text);

        if is_err {
            return Err(ApiError::Api {
                status,
                error: text,
            });
        }

        let ratings: RecentRatings = serde_json::from_str(&text)?;

        Ok(ratings)
    }

    pub fn send_blocking(self) -> Result<RecentRatings, ApiError> {
        RUNTIME.block_on(self.send())
    }
}
