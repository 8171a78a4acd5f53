use crate::utils::error::{FlyoverError, Result};
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;

pub fn build_client(timeout: Duration, user_agent: &str) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// A response whose body has been read in full, so it can be both
/// reported verbatim and parsed.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    /// Anything other than exactly 200 is a failure for `context`.
    pub fn require_ok(self, context: &str) -> Result<Self> {
        if self.status != StatusCode::OK {
            return Err(FlyoverError::HttpStatus {
                status: self.status.as_u16(),
                context: context.to_string(),
                body: self.body,
            });
        }
        Ok(self)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

pub async fn send(request: RequestBuilder) -> Result<RawResponse> {
    let response = request.send().await?;
    let status = response.status();
    tracing::debug!("Response from {}: {}", response.url(), status);

    let body = response.text().await?;
    Ok(RawResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_require_ok_keeps_raw_body_on_failure() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/status");
            then.status(418).body("short and stout");
        });

        let client = build_client(Duration::from_secs(5), "test-agent").unwrap();
        let raw = send(client.get(server.url("/status"))).await.unwrap();

        mock.assert();
        let err = raw.require_ok("teapot").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Status Code 418 when fetching teapot. Response: short and stout"
        );
    }

    #[tokio::test]
    async fn test_user_agent_is_sent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/").header("user-agent", "iss-flyover-test");
            then.status(200).body("{}");
        });

        let client = build_client(Duration::from_secs(5), "iss-flyover-test").unwrap();
        let raw = send(client.get(server.url("/"))).await.unwrap();

        mock.assert();
        assert_eq!(raw.status, StatusCode::OK);
        assert!(raw.require_ok("root").is_ok());
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_transport_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .body("{}")
                .delay(Duration::from_millis(500));
        });

        let client = build_client(Duration::from_millis(50), "test-agent").unwrap();
        let err = send(client.get(server.url("/slow"))).await.unwrap_err();

        assert!(matches!(err, FlyoverError::Transport(ref e) if e.is_timeout()));
    }
}
