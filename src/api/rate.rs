use const_format::formatcp;
use reqwest::StatusCode;
use tracing::debug;

use crate::{
    errors::ApiError, objects::RatingSubmission, SeriesRateClient, API_BASE, RUNTIME,
};

const API_RATE: &str = formatcp!("{API_BASE}/rate");

pub struct RateApi {
    client: SeriesRateClient,
}

impl RateApi {
    pub(crate) fn new(client: SeriesRateClient) -> Self {
        Self { client }
    }

    pub fn post(&self) -> RatePost {
        RatePost {
            client: self.client.clone(),
            username: None,
            series_name: None,
            rating: None,
        }
    }
}

/// Submits one rating. All three fields are required; nothing is sent until
/// they pass the local checks.
pub struct RatePost {
    client: SeriesRateClient,
    username: Option<String>,
    series_name: Option<String>,
    rating: Option<f64>,
}

impl RatePost {
    /// Who is submitting the rating.
    pub fn username(mut self, username: &str) -> Self {
        self.username = Some(username.to_owned());
        self
    }

    /// The series being rated.
    pub fn series_name(mut self, series_name: &str) -> Self {
        self.series_name = Some(series_name.to_owned());
        self
    }

    /// The score, from 0 to 5 inclusive.
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Submit the rating. The response body carries nothing the caller
    /// needs, so success is just `()`.
    pub async fn send(self) -> Result<(), ApiError> {
        let Some(username) = self.username.filter(|u| !u.is_empty()) else {
            return Err(ApiError::Username);
        };

        let Some(series_name) = self.series_name.filter(|s| !s.is_empty()) else {
            return Err(ApiError::SeriesName);
        };

        let Some(rating) = self.rating else {
            return Err(ApiError::Rating);
        };

        if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
            return Err(ApiError::Rating);
        }

        let body = RatingSubmission {
            username,
            series_name,
            rating,
        };

        let url = format!("{}{API_RATE}", self.client.origin);

        let response = self.client.http.post(url).json(&body).send().await?;

        let status = response.status();
        let text = response.text().await?;

        debug!(status = status.as_u16(), response = %text);

        // 422 means the backend's own validation refused the body; callers
        // word that differently from other failures
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            return Err(ApiError::Rejected(text));
        }

        if status.is_client_error() || status.is_server_error() {
            return Err(ApiError::Api {
                status,
                error: text,
            });
        }

        Ok(())
    }

    pub fn send_blocking(self) -> Result<(), ApiError> {
        RUNTIME.block_on(self.send())
    }
}
