use axum::http::StatusCode;
use reqwest::Response;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::{ActionAck, ContainerAction, ContainerSummary};
use crate::proxy::config::Credentials;
use crate::proxy::upstream::client::UpstreamClient;

#[derive(Deserialize)]
struct AuthResponse {
    jwt: String,
}

/// Authenticates against Portainer and forwards one container call per request.
///
/// A fresh token is requested for every call; nothing is cached between requests.
pub struct AuthenticatedProxy {
    upstream: UpstreamClient,
    credentials: Credentials,
}

impl AuthenticatedProxy {
    pub fn new(upstream: UpstreamClient, credentials: Credentials) -> Self {
        Self {
            upstream,
            credentials,
        }
    }

    /// Obtain a bearer token. Any failure collapses into `AppError::Authentication`;
    /// the downstream detail only goes to the log.
    pub async fn acquire_token(&self) -> AppResult<String> {
        let response = self
            .upstream
            .authenticate(&self.credentials.username, &self.credentials.password)
            .await
            .map_err(|e| {
                tracing::warn!("Auth request failed: {}", e);
                AppError::Authentication
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!("Portainer rejected authentication ({}): {}", status, detail);
            return Err(AppError::Authentication);
        }

        let auth = response.json::<AuthResponse>().await.map_err(|e| {
            tracing::warn!("Auth response has no usable jwt: {}", e);
            AppError::Authentication
        })?;
        Ok(auth.jwt)
    }

    pub async fn list_containers(&self) -> AppResult<Vec<ContainerSummary>> {
        let token = self.acquire_token().await?;
        let response = self
            .upstream
            .list_containers(&token, &self.credentials.endpoint_id)
            .await?;

        if response.status() != StatusCode::OK {
            return Err(downstream_error(response).await);
        }

        let containers = response.json::<Vec<ContainerSummary>>().await?;
        tracing::debug!("Listed {} containers", containers.len());
        Ok(containers)
    }

    pub async fn lifecycle_action(
        &self,
        container_id: &str,
        action: ContainerAction,
    ) -> AppResult<ActionAck> {
        let token = self.acquire_token().await?;
        let response = self
            .upstream
            .container_operation(
                &token,
                &self.credentials.endpoint_id,
                container_id,
                action.downstream_operation(),
            )
            .await?;

        if response.status() != StatusCode::NO_CONTENT {
            let err = downstream_error(response).await;
            tracing::warn!("Container {} {} failed: {}", action, container_id, err);
            return Err(err);
        }

        tracing::info!("Container {} {}", container_id, action.past_tense());
        Ok(ActionAck::new(action, container_id))
    }
}

async fn downstream_error(response: Response) -> AppError {
    let status = response.status();
    match response.text().await {
        Ok(body) => AppError::Downstream { status, body },
        Err(e) => AppError::Network(e),
    }
}
