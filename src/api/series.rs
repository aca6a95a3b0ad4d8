use const_format::formatcp;
use tracing::debug;

use crate::{errors::ApiError, objects::SeriesStats, SeriesRateClient, API_BASE, RUNTIME};

const API_SERIES_STATS: &str = formatcp!("{API_BASE}/series/{{seriesName}}/stats");

pub struct SeriesApi {
    client: SeriesRateClient,
}

impl SeriesApi {
    pub(crate) fn new(client: SeriesRateClient) -> Self {
        Self { client }
    }

    pub fn stats(&self) -> SeriesStatsGet {
        SeriesStatsGet {
            client: self.client.clone(),
            name: None,
        }
    }
}

/// Fetches aggregate stats for one series
pub struct SeriesStatsGet {
    client: SeriesRateClient,
    name: Option<String>,
}

impl SeriesStatsGet {
    /// The series name. The backend matches it case-insensitively; the
    /// client sends it trimmed and lowercased.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    pub async fn send(self) -> Result<SeriesStats, ApiError> {
        let Some(name) = self.name else {
            return Err(ApiError::SeriesName);
        };

        let name = name.trim().to_lowercase();

        if name.is_empty() {
            return Err(ApiError::SeriesName);
        }

        let url = format!(
            "{}{}",
            self.client.origin,
            API_SERIES_STATS.replace("{seriesName}", &name)
        );

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

        let stats: SeriesStats = serde_json::from_str(&text)?;

        Ok(stats)
    }

    pub fn send_blocking(self) -> Result<SeriesStats, ApiError> {
        RUNTIME.block_on(self.send())
    }
}
