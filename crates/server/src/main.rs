//! Fixture implementation of the `/usuario` API for local runs.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use shared::{
    domain::{UserFilter, UserId},
    error::{ApiError, ErrorCode},
    protocol::{ApiEnvelope, UserListResponse},
};
use tracing::{info, warn};

mod api;
mod app_state;
mod config;

use api::UserDirectory;
use app_state::AppState;
use config::load_settings;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

#[derive(Debug, Deserialize)]
struct ListUsersQuery {
    page: Option<u32>,
    activo: Option<u8>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let state = AppState {
        directory: UserDirectory::seeded(settings.seed_users),
        page_size: settings.page_size,
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(
        %addr,
        page_size = settings.page_size,
        seed_users = settings.seed_users,
        "fixture api listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/usuario", get(list_users))
        .route("/usuario/:user_id", delete(delete_user))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ListUsersQuery>,
) -> ApiResult<UserListResponse> {
    let filter = UserFilter::from_activo(q.activo).map_err(|e| {
        error_response(ApiError::new(ErrorCode::Validation, e.to_string()))
    })?;
    let page = state
        .directory
        .page(q.page.unwrap_or(1), filter, state.page_size)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiEnvelope {
        message: "Usuarios obtenidos correctamente".into(),
        data: page,
    }))
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> ApiResult<ApiEnvelope<UserId>> {
    let user_id = UserId(user_id);
    state.directory.remove(user_id).await.map_err(|err| {
        warn!(%user_id, message = %err.message, "delete rejected");
        error_response(err)
    })?;
    info!(%user_id, "user deleted");

    Ok(Json(ApiEnvelope {
        message: "Usuario eliminado correctamente".into(),
        data: user_id,
    }))
}

fn error_response(err: ApiError) -> (StatusCode, Json<ApiError>) {
    let status = match err.code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(err))
}
