use crate::answer_response::{AnswerResponse, MenuUploaded, SessionCreated};
use crate::app_state::AppState;
use crate::auth::bearer_credential;
use crate::error_handler::{ApiError, ApiResult};
use crate::query_payload::QueryPayload;
use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use axum_extra::TypedHeader;
use headers::authorization::Bearer;
use headers::Authorization;
use menu_assistant::Session;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/sessions", post(create_session))
        .route("/sessions/:id", delete(delete_session))
        .route("/sessions/:id/menu", put(upload_menu))
        .route("/sessions/:id/query", post(ask_question))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn create_session(
    State(state): State<Arc<AppState>>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
) -> ApiResult<(StatusCode, Json<SessionCreated>)> {
    let credential = bearer_credential(auth)?;
    let session_id = Uuid::new_v4();

    state
        .sessions
        .write()
        .await
        .insert(session_id, Session::with_credential(credential));

    log::info!("Session {} created", session_id);
    Ok((StatusCode::CREATED, Json(SessionCreated { session_id })))
}

async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .sessions
        .write()
        .await
        .remove(&id)
        .ok_or(ApiError::SessionNotFound)?;

    log::info!("Session {} discarded", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn upload_menu(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    body: Bytes,
) -> ApiResult<Json<MenuUploaded>> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound)?;

    let dishes = session.upload_menu(&body).map_err(|e| {
        log::warn!("Menu upload for session {} rejected: {}", id, e);
        ApiError::from(e)
    })?;

    Ok(Json(MenuUploaded {
        status: "success".to_string(),
        dishes,
    }))
}

async fn ask_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<QueryPayload>, JsonRejection>,
) -> ApiResult<Json<AnswerResponse>> {
    let Json(payload) = payload?;

    // Snapshot so the lock is not held across the completion call.
    let (credential, menu) = {
        let sessions = state.sessions.read().await;
        let session = sessions.get(&id).ok_or(ApiError::SessionNotFound)?;
        (session.credential()?.clone(), Arc::clone(session.menu()?))
    };

    let answer = state
        .query_service
        .query_menu(&credential, &menu, &payload.question)
        .await?;

    let prompt_tokens = state.token_counter.count(&answer.prompt);
    if prompt_tokens > state.prompt_token_warning {
        log::warn!(
            "Prompt for session {} is {} tokens (warning threshold {})",
            id,
            prompt_tokens,
            state.prompt_token_warning
        );
    } else {
        log::debug!("Prompt for session {} is {} tokens", id, prompt_tokens);
    }

    Ok(Json(AnswerResponse {
        answer: answer.text,
        dishes: answer.dishes,
        prompt_tokens,
        processing_time_ms: answer.processing_time_ms,
    }))
}
