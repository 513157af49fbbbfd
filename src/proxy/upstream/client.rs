// Upstream client implementation
// Raw calls against the Portainer API; status codes are interpreted by the caller

use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::error::{AppError, AppResult};

#[derive(Serialize)]
struct AuthRequest<'a> {
    #[serde(rename = "Username")]
    username: &'a str,
    #[serde(rename = "Password")]
    password: &'a str,
}

pub struct UpstreamClient {
    http_client: Client,
    base_url: Url,
}

impl UpstreamClient {
    pub fn new(http_client: Client, base_url: Url) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Append path segments to the base URL.
    ///
    /// Segments are percent-encoded individually, so an opaque container id
    /// can never escape its position in the path.
    fn build_url(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Config(format!(
                    "Base URL cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn containers_url(&self, endpoint_id: &str, tail: &[&str]) -> AppResult<Url> {
        let mut segments = vec!["api", "endpoints", endpoint_id, "docker", "containers"];
        segments.extend_from_slice(tail);
        self.build_url(&segments)
    }

    /// POST /api/auth
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<Response> {
        let url = self.build_url(&["api", "auth"])?;
        tracing::debug!("Authenticating to: {}", url);

        let response = self
            .http_client
            .post(url)
            .json(&AuthRequest { username, password })
            .send()
            .await?;
        Ok(response)
    }

    /// GET /api/endpoints/{id}/docker/containers/json
    pub async fn list_containers(&self, access_token: &str, endpoint_id: &str) -> AppResult<Response> {
        let url = self.containers_url(endpoint_id, &["json"])?;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?;
        Ok(response)
    }

    /// POST /api/endpoints/{id}/docker/containers/{container_id}/{operation}
    pub async fn container_operation(
        &self,
        access_token: &str,
        endpoint_id: &str,
        container_id: &str,
        operation: &str,
    ) -> AppResult<Response> {
        let url = self.containers_url(endpoint_id, &[container_id, operation])?;
        tracing::debug!("Container operation: POST {}", url);

        let response = self
            .http_client
            .post(url)
            .bearer_auth(access_token)
            .send()
            .await?;
        Ok(response)
    }
}
