use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use streamlytics_config::ApiConfig;
use tracing::{debug, warn};

use crate::error::{CoreError, Result};

/// Thin GET-only client for the statistics API.
///
/// Every call issues exactly one request. Nothing is retried or cached.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(CoreError::ClientBuild)?;

        let base_url = config.base_url.as_str().trim_end_matches('/').to_string();
        debug!(%base_url, "creating statistics API client");

        Ok(Self { client, base_url })
    }

    /// Join a route onto the base URL, keeping any base path prefix.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let path = path.as_ref().trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `path` and return the parsed JSON document.
    pub async fn get(&self, path: &str) -> Result<serde_json::Value> {
        self.get_json(path).await
    }

    /// Fetch `path` and decode it into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        let body = self.execute_request(&url, self.client.get(&url)).await?;

        serde_json::from_slice(&body).map_err(|err| {
            warn!(%url, error = %err, "response did not match expected shape");
            CoreError::MalformedData {
                url,
                message: err.to_string(),
            }
        })
    }

    async fn execute_request(
        &self,
        url: &str,
        request: RequestBuilder,
    ) -> Result<Vec<u8>> {
        debug!(%url, "GET");
        let response = request.send().await.map_err(|source| {
            warn!(%url, error = %source, "request failed");
            CoreError::Transport {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(%url, %status, "request returned non-success status");
            return Err(CoreError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|source| {
            CoreError::Transport {
                url: url.to_string(),
                source,
            }
        })?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig::new(Url::parse(base).unwrap())).unwrap()
    }

    #[test]
    fn build_url_keeps_base_path() {
        let api = client("https://stats.example.com/api/");
        assert_eq!(
            api.build_url("/stats/ratings/movies/countries"),
            "https://stats.example.com/api/stats/ratings/movies/countries"
        );
        assert_eq!(api.build_url("movies"), "https://stats.example.com/api/movies");
    }

    #[test]
    fn build_url_without_path_prefix() {
        let api = client("http://localhost:8000");
        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(api.build_url("/series"), "http://localhost:8000/series");
    }
}
