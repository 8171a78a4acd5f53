use crate::domain::model::{Coordinates, PassRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn ip_endpoint(&self) -> &str;
    fn geo_endpoint(&self) -> &str;
    fn pass_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
}

/// Stage 1: the caller's public IP address.
#[async_trait]
pub trait IpLookup: Send + Sync {
    async fn fetch_my_ip(&self) -> Result<String>;
}

/// Stage 2: coordinates for an IP address.
#[async_trait]
pub trait GeoLookup: Send + Sync {
    async fn fetch_coords_by_ip(&self, ip: &str) -> Result<Coordinates>;
}

/// Stage 3: upcoming passes over a location, in upstream order.
#[async_trait]
pub trait PassLookup: Send + Sync {
    async fn fetch_flyover_times(&self, coords: &Coordinates) -> Result<Vec<PassRecord>>;
}
