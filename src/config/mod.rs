pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url};

pub const DEFAULT_IP_ENDPOINT: &str = "https://api.ipify.org";
pub const DEFAULT_GEO_ENDPOINT: &str = "http://ipwho.is";
pub const DEFAULT_PASS_ENDPOINT: &str = "https://iss-flyover.herokuapp.com/json/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("iss-flyover/", env!("CARGO_PKG_VERSION"));
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Checks shared by every config source.
pub(crate) fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("ip_endpoint", config.ip_endpoint())?;
    validate_url("geo_endpoint", config.geo_endpoint())?;
    validate_url("pass_endpoint", config.pass_endpoint())?;
    validate_range(
        "timeout_seconds",
        config.request_timeout().as_secs(),
        1,
        MAX_TIMEOUT_SECONDS,
    )?;
    validate_non_empty_string("user_agent", config.user_agent())
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use crate::utils::validation::Validate;
    use clap::Parser;
    use std::time::Duration;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "iss-flyover")]
    #[command(about = "Print the next ISS passes over your current location")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_IP_ENDPOINT)]
        pub ip_endpoint: String,

        #[arg(long, default_value = DEFAULT_GEO_ENDPOINT)]
        pub geo_endpoint: String,

        #[arg(long, default_value = DEFAULT_PASS_ENDPOINT)]
        pub pass_endpoint: String,

        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        pub timeout_seconds: u64,

        #[arg(long, default_value = DEFAULT_USER_AGENT)]
        pub user_agent: String,

        #[arg(long, help = "Load endpoints and HTTP settings from a TOML file")]
        pub config: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn ip_endpoint(&self) -> &str {
            &self.ip_endpoint
        }

        fn geo_endpoint(&self) -> &str {
            &self.geo_endpoint
        }

        fn pass_endpoint(&self) -> &str {
            &self.pass_endpoint
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(self.timeout_seconds)
        }

        fn user_agent(&self) -> &str {
            &self.user_agent
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_provider(self)
        }
    }

}
