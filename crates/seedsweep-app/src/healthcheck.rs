use std::time::Duration;

use reqwest::Client;
use tracing::info;
use url::Url;

use crate::error::{AppError, AppResult};

const OPERATION: &str = "healthcheck.ping";

/// Sends the completion ping consumed by an external job monitor.
#[derive(Debug, Clone)]
pub struct HealthcheckPinger {
    http: Client,
}

impl HealthcheckPinger {
    /// Build a pinger whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| AppError::HttpClient {
                operation: "healthcheck.client",
                source,
            })?;
        Ok(Self { http })
    }

    /// Issue a single unauthenticated GET to `url`. Only the status is inspected.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the endpoint answers with a
    /// non-success status.
    pub async fn ping(&self, url: &Url) -> AppResult<()> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|err| AppError::http(OPERATION, url.to_string(), err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                operation: OPERATION,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        info!(
            host = url.host_str().unwrap_or_default(),
            status = status.as_u16(),
            "healthcheck ping sent"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use httpmock::prelude::*;

    fn pinger() -> Result<HealthcheckPinger> {
        Ok(HealthcheckPinger::new(Duration::from_secs(5))?)
    }

    #[tokio::test]
    async fn ping_issues_single_get() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/ping/abc");
            then.status(200).body("OK");
        });

        pinger()?.ping(&server.url("/ping/abc").parse()?).await?;

        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn ping_rejects_error_status() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/ping/abc");
            then.status(404);
        });

        let err = pinger()?
            .ping(&server.url("/ping/abc").parse()?)
            .await
            .err();

        mock.assert();
        assert!(matches!(
            err,
            Some(AppError::HttpStatus { status: 404, .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn ping_reports_unreachable_endpoint() -> Result<()> {
        let err = pinger()?
            .ping(&"http://127.0.0.1:1/ping".parse()?)
            .await
            .err();
        assert!(matches!(
            err,
            Some(AppError::Http {
                operation: OPERATION,
                ..
            })
        ));
        Ok(())
    }
}
