use crate::core::http::send;
use crate::domain::model::Coordinates;
use crate::domain::ports::GeoLookup;
use crate::utils::error::{FlyoverError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
struct GeoResponse {
    success: bool,
    latitude: Option<f64>,
    longitude: Option<f64>,
    message: Option<String>,
    ip: Option<String>,
}

/// Resolves an IP to coordinates through an ipwho.is-style service.
///
/// This service reports failure inside a 200 body (`"success": false`), so
/// the HTTP status is never consulted here.
#[derive(Debug, Clone)]
pub struct HttpGeoResolver {
    client: Client,
    endpoint: String,
}

impl HttpGeoResolver {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Appends the IP as one percent-encoded path segment, keeping any query.
    fn url_for(&self, ip: &str) -> Result<Url> {
        let invalid = |reason: String| FlyoverError::InvalidConfigValueError {
            field: "geo_endpoint".to_string(),
            value: self.endpoint.clone(),
            reason,
        };

        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .push(ip);
        Ok(url)
    }
}

#[async_trait]
impl GeoLookup for HttpGeoResolver {
    async fn fetch_coords_by_ip(&self, ip: &str) -> Result<Coordinates> {
        let url = self.url_for(ip)?;
        tracing::debug!("Fetching coordinates from: {}", url);

        let response = send(self.client.get(url)).await?;
        let parsed: GeoResponse = response.json()?;

        if !parsed.success {
            return Err(FlyoverError::ServiceReported {
                success: parsed.success,
                message: parsed.message.unwrap_or_else(|| "no message".to_string()),
                ip: parsed.ip.unwrap_or_else(|| ip.to_string()),
            });
        }

        match (parsed.latitude, parsed.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
            }),
            _ => Err(FlyoverError::MalformedResponse {
                context: "geolocation".to_string(),
                reason: format!("latitude/longitude missing for IP {}", ip),
            }),
        }
    }
}
