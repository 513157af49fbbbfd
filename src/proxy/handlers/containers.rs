// Container handlers
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::AppResult;
use crate::models::{ActionAck, ContainerAction, ContainerSummary};
use crate::proxy::server::AppState;

/// POST /api/auth
pub async fn handle_auth(State(state): State<AppState>) -> AppResult<Json<String>> {
    let token = state.proxy.acquire_token().await?;
    Ok(Json(token))
}

/// GET /api/containers
pub async fn handle_list_containers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContainerSummary>>> {
    let containers = state.proxy.list_containers().await?;
    Ok(Json(containers))
}

/// POST /api/{action}/:container_id
pub async fn handle_container_action(
    action: ContainerAction,
    State(state): State<AppState>,
    Path(container_id): Path<String>,
) -> AppResult<Json<ActionAck>> {
    tracing::info!("Received {} request for container {}", action, container_id);
    let ack = state.proxy.lifecycle_action(&container_id, action).await?;
    Ok(Json(ack))
}

/// Fallback for unmatched `/api` paths
pub async fn handle_api_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
        .into_response()
}

/// Health check handler
pub async fn handle_health() -> Response {
    Json(serde_json::json!({
        "status": "ok"
    }))
    .into_response()
}
