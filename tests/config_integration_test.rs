use anyhow::Result;
use httpmock::prelude::*;
use iss_flyover::utils::validation::Validate;
use iss_flyover::{FlyoverChain, TomlConfig};
use tempfile::TempDir;

#[tokio::test]
async fn test_chain_from_toml_file() -> Result<()> {
    let server = MockServer::start();
    let ip_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/ip")
            .header("user-agent", "toml-configured-agent");
        then.status(200).json_body(serde_json::json!({"ip": "203.0.113.7"}));
    });
    let geo_mock = server.mock(|when, then| {
        when.method(GET).path("/geo/203.0.113.7");
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "latitude": 59.3,
            "longitude": 18.1
        }));
    });
    let pass_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/json/")
            .query_param("lat", "59.3")
            .query_param("lon", "18.1");
        then.status(200).json_body(serde_json::json!({
            "response": [
                {"risetime": 1622574095, "duration": 465},
                {"risetime": 1622579768, "duration": 632}
            ]
        }));
    });

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("iss-flyover.toml");
    let config_content = format!(
        r#"
[endpoints]
ip = "{}"
geo = "{}"
pass = "{}"

[http]
timeout_seconds = 5
user_agent = "toml-configured-agent"
"#,
        server.url("/ip"),
        server.url("/geo"),
        server.url("/json/")
    );
    tokio::fs::write(&config_path, config_content).await?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let chain = FlyoverChain::from_config(&config)?;
    let passes = chain.next_passes_for_my_location().await?;

    ip_mock.assert();
    geo_mock.assert();
    pass_mock.assert();
    assert_eq!(passes.len(), 2);
    assert_eq!(passes[1].duration, 632);

    Ok(())
}

#[tokio::test]
async fn test_out_of_range_timeout_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("iss-flyover.toml");
    tokio::fs::write(&config_path, "[http]\ntimeout_seconds = 900\n").await?;

    let config = TomlConfig::from_file(&config_path)?;
    let err = config.validate().unwrap_err();

    assert!(err.to_string().contains("timeout_seconds"));
    Ok(())
}
