use crate::core::http::send;
use crate::domain::ports::IpLookup;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// Asks a "what is my IP" service (ipify-style) for the caller's address.
#[derive(Debug, Clone)]
pub struct HttpIpResolver {
    client: Client,
    endpoint: String,
}

impl HttpIpResolver {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl IpLookup for HttpIpResolver {
    async fn fetch_my_ip(&self) -> Result<String> {
        tracing::debug!("Fetching public IP from: {}", self.endpoint);
        let request = self.client.get(&self.endpoint).query(&[("format", "json")]);

        let response = send(request).await?.require_ok("IP")?;
        let parsed: IpResponse = response.json()?;
        Ok(parsed.ip)
    }
}
