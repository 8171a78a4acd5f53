use crate::core::http::send;
use crate::domain::model::{Coordinates, PassRecord};
use crate::domain::ports::PassLookup;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PassResponse {
    response: Vec<PassRecord>,
}

/// Queries a pass-prediction service for upcoming ISS flyovers.
#[derive(Debug, Clone)]
pub struct HttpPassResolver {
    client: Client,
    endpoint: String,
}

impl HttpPassResolver {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PassLookup for HttpPassResolver {
    async fn fetch_flyover_times(&self, coords: &Coordinates) -> Result<Vec<PassRecord>> {
        tracing::debug!(
            "Fetching pass times from: {} (lat={}, lon={})",
            self.endpoint,
            coords.latitude,
            coords.longitude
        );
        let request = self
            .client
            .get(&self.endpoint)
            .query(&[("lat", coords.latitude), ("lon", coords.longitude)]);

        let response = send(request).await?.require_ok("ISS pass times")?;
        let parsed: PassResponse = response.json()?;
        Ok(parsed.response)
    }
}
