//! HTTP endpoints
//!
//! REST API for the chat service.

use axum::{
    extract::{Json, State},
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use aqarkam_core::{Error, ListingSummary};

use crate::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.settings.server.cors_origins,
        state.settings.server.cors_enabled,
    );

    Router::new()
        .route("/api/chatbot/message", post(process_message))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build the CORS layer from configured origins.
///
/// - cors_enabled false: permissive layer (development only)
/// - no origins configured: localhost only
/// - otherwise: the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("invalid CORS origin: {origin}");
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::info!("no CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    // Credentials cannot be combined with wildcard headers.
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Chat request body.
#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "userId")]
    user_id: Option<String>,
}

/// Successful chat response envelope.
#[derive(Debug, Serialize)]
struct ChatResponse {
    status: &'static str,
    data: ChatData,
}

#[derive(Debug, Serialize)]
struct ChatData {
    message: String,
    options: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    properties: Vec<ListingSummary>,
}

/// Error response envelope.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: &'static str,
    message: String,
}

/// Process one chat message.
async fn process_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let message = request.message.unwrap_or_default();
    let user_id = request
        .user_id
        .unwrap_or_else(|| state.settings.chat.anonymous_user_id.clone());

    match state.chatbot.handle(&message, &user_id).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(ChatResponse {
                status: "success",
                data: ChatData {
                    message: reply.message,
                    options: reply.options,
                    properties: reply.properties,
                },
            }),
        )
            .into_response(),
        Err(Error::InvalidInput(message)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                status: "error",
                message,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("chat processing error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    status: "error",
                    message: "حدث خطأ غير متوقع. يرجى المحاولة مرة أخرى لاحقاً.".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Health check.
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "classifier_ready": state.chatbot.classifier_ready(),
    }))
}
