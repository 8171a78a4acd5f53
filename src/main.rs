use clap::Parser;
use iss_flyover::core::ConfigProvider;
use iss_flyover::utils::error::ErrorCategory;
use iss_flyover::utils::{logger, validation::Validate};
use iss_flyover::{CliConfig, FlyoverChain, PassRecord, Result, TomlConfig};

async fn next_passes<C: ConfigProvider + Validate>(config: &C) -> Result<Vec<PassRecord>> {
    config.validate()?;
    let chain = FlyoverChain::from_config(config)?;
    chain.next_passes_for_my_location().await
}

async fn next_passes_from_file(path: &str) -> Result<Vec<PassRecord>> {
    tracing::info!("Loading configuration from {}", path);
    let file_config = TomlConfig::from_file(path)?;
    next_passes(&file_config).await
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let result = match &cli.config {
        Some(path) => next_passes_from_file(path).await,
        None => next_passes(&cli).await,
    };

    match result {
        Ok(passes) => {
            if passes.is_empty() {
                tracing::warn!("The service returned no upcoming passes");
            }
            for pass in &passes {
                println!("{}", pass);
            }
        }
        Err(e) => {
            tracing::error!("Lookup failed ({:?}): {}", e.category(), e);
            eprintln!("It didn't work: {}", e);

            let exit_code = match e.category() {
                ErrorCategory::Configuration => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iss_flyover::FlyoverError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_missing_config_file_is_a_configuration_error() {
        let err = next_passes_from_file("/definitely/not/here/iss-flyover.toml")
            .await
            .unwrap_err();

        assert!(matches!(err, FlyoverError::IoError(_)));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[tokio::test]
    async fn test_invalid_config_file_stops_before_any_request() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[endpoints]\nip = \"not-a-url\"\n")
            .unwrap();

        let path = temp_file.path().to_str().unwrap().to_string();
        let err = next_passes_from_file(&path).await.unwrap_err();

        assert!(matches!(err, FlyoverError::InvalidConfigValueError { .. }));
    }
}
