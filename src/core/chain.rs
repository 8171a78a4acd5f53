use crate::core::geo::HttpGeoResolver;
use crate::core::http::build_client;
use crate::core::ip::HttpIpResolver;
use crate::core::passes::HttpPassResolver;
use crate::domain::model::PassRecord;
use crate::domain::ports::{ConfigProvider, GeoLookup, IpLookup, PassLookup};
use crate::utils::error::{FlyoverError, Result};
use std::fmt;

/// The lookup stages, in the order the chain runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStage {
    Ip,
    Geolocation,
    PassTimes,
}

impl fmt::Display for ChainStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChainStage::Ip => "ip",
            ChainStage::Geolocation => "geolocation",
            ChainStage::PassTimes => "pass-times",
        };
        f.write_str(name)
    }
}

/// Runs IP -> coordinates -> pass times, one request at a time.
///
/// The first failing stage ends the run and its error is returned untouched.
/// The chain holds no per-run state, so one instance can serve concurrent runs.
pub struct FlyoverChain<I: IpLookup, G: GeoLookup, P: PassLookup> {
    ip: I,
    geo: G,
    passes: P,
}

impl<I: IpLookup, G: GeoLookup, P: PassLookup> FlyoverChain<I, G, P> {
    pub fn new(ip: I, geo: G, passes: P) -> Self {
        Self { ip, geo, passes }
    }

    pub async fn next_passes_for_my_location(&self) -> Result<Vec<PassRecord>> {
        let ip = self
            .ip
            .fetch_my_ip()
            .await
            .inspect_err(|e| log_failure(ChainStage::Ip, e))?;
        tracing::info!("IP resolved: {}", ip);

        let coords = self
            .geo
            .fetch_coords_by_ip(&ip)
            .await
            .inspect_err(|e| log_failure(ChainStage::Geolocation, e))?;
        tracing::info!(
            "Coordinates resolved: lat={}, lon={}",
            coords.latitude,
            coords.longitude
        );

        let passes = self
            .passes
            .fetch_flyover_times(&coords)
            .await
            .inspect_err(|e| log_failure(ChainStage::PassTimes, e))?;
        tracing::info!("Pass times resolved: {} passes", passes.len());

        Ok(passes)
    }
}

impl FlyoverChain<HttpIpResolver, HttpGeoResolver, HttpPassResolver> {
    /// Wires the HTTP resolvers around one shared client.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = build_client(config.request_timeout(), config.user_agent())?;

        Ok(Self::new(
            HttpIpResolver::new(client.clone(), config.ip_endpoint()),
            HttpGeoResolver::new(client.clone(), config.geo_endpoint()),
            HttpPassResolver::new(client, config.pass_endpoint()),
        ))
    }
}

fn log_failure(stage: ChainStage, error: &FlyoverError) {
    tracing::warn!(
        "Stage '{}' failed ({:?}): {}",
        stage,
        error.category(),
        error
    );
}
