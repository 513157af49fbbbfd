use crate::error::AppResult;
use crate::models::ContainerAction;
use crate::proxy::handlers;
use crate::proxy::{AuthenticatedProxy, ProxyConfig};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::Path as FsPath;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

/// Axum application state
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<AuthenticatedProxy>,
}

/// Build the full router: `/api` surface, health check, static front-end fallback
pub fn build_router(state: AppState, static_dir: &FsPath) -> Router {
    use handlers::containers::{
        handle_api_not_found, handle_auth, handle_container_action, handle_health,
        handle_list_containers,
    };

    let mut api: Router<AppState> = Router::new()
        .route("/auth", post(handle_auth))
        .route("/containers", get(handle_list_containers));

    for action in ContainerAction::ALL {
        api = api.route(
            &format!("/{}/:container_id", action.as_str()),
            post(
                move |state: State<AppState>, container_id: Path<String>| {
                    handle_container_action(action, state, container_id)
                },
            ),
        );
    }

    // Unknown `/api` paths are 404 for every method, never a static lookup
    let api = api.fallback(handle_api_not_found);

    // Anything else is a front-end asset; missing files are 404
    let static_files = ServeDir::new(static_dir).append_index_html_on_directories(true);

    Router::new()
        .nest("/api", api)
        .route("/healthz", get(handle_health))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(
            crate::proxy::middleware::logging_middleware,
        ))
        .layer(crate::proxy::middleware::cors_layer())
        .with_state(state)
}

/// Axum server instance
pub struct AxumServer {
    shutdown_tx: Option<oneshot::Sender<()>>,
    local_addr: SocketAddr,
}

impl AxumServer {
    /// Start Axum server
    pub async fn start(
        config: &ProxyConfig,
        proxy: Arc<AuthenticatedProxy>,
    ) -> AppResult<(Self, tokio::task::JoinHandle<()>)> {
        let state = AppState { proxy };
        let app = build_router(state, &config.static_dir);

        // Bind address
        let addr = config.bind_address();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Container control server started at http://{}", local_addr);

        // Create shutdown channel
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let server_instance = Self {
            shutdown_tx: Some(shutdown_tx),
            local_addr,
        };

        // Start server in new task
        let handle = tokio::spawn(async move {
            use hyper::server::conn::http1;
            use hyper_util::rt::TokioIo;
            use hyper_util::service::TowerToHyperService;

            loop {
                tokio::select! {
                    res = listener.accept() => {
                        match res {
                            Ok((stream, _)) => {
                                let io = TokioIo::new(stream);
                                let service = TowerToHyperService::new(app.clone());

                                tokio::task::spawn(async move {
                                    if let Err(err) = http1::Builder::new()
                                        .serve_connection(io, service)
                                        .await
                                    {
                                        debug!("Connection handling finished or errored: {:?}", err);
                                    }
                                });
                            }
                            Err(e) => {
                                error!("Failed to accept connection: {:?}", e);
                            }
                        }
                    }
                    _ = &mut shutdown_rx => {
                        tracing::info!("Container control server stopped listening");
                        break;
                    }
                }
            }
        });

        Ok((server_instance, handle))
    }

    /// Address the listener is actually bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop server
    pub fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
