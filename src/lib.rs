pub mod api;
pub mod app;
pub mod errors;
pub mod objects;

use std::sync::LazyLock;

use reqwest::ClientBuilder;
use tokio::runtime::Runtime;

use crate::api::{rate::RateApi, recent::RecentApi, series::SeriesApi};

/// Prefix every backend route lives under, relative to the serving origin
pub(crate) const API_BASE: &str = "/api";

// drives the send_blocking variants
pub(crate) static RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
});

#[derive(Clone)]
pub struct SeriesRateClient {
    pub(crate) http: reqwest::Client,
    pub(crate) origin: String,
}

impl SeriesRateClient {
    /// Create client against the origin serving the api, e.g. `http://localhost:8000`
    pub fn new(origin: &str) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .build()
            .unwrap();

        Self {
            http,
            origin: origin.trim_end_matches('/').to_owned(),
        }
    }

    /// Create client with custom reqwest settings (user agent for example)
    pub fn new_with_client(
        origin: &str,
        builder_cb: impl FnOnce(ClientBuilder) -> ClientBuilder,
    ) -> Self {
        let http = builder_cb(reqwest::Client::builder()).build().unwrap();

        Self {
            http,
            origin: origin.trim_end_matches('/').to_owned(),
        }
    }

    /// Submit ratings
    pub fn rate(&self) -> RateApi {
        RateApi::new(self.clone())
    }

    /// Fetch the latest accepted ratings
    pub fn recent(&self) -> RecentApi {
        RecentApi::new(self.clone())
    }

    /// Fetch per-series aggregate stats
    pub fn series(&self) -> SeriesApi {
        SeriesApi::new(self.clone())
    }
}
