use super::protocol::{SurveyQuestionsResponse, respond_ack};
use super::router::ShutdownSignal;
use crate::survey::store::SurveyStore;
use crate::survey::types::Responder;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_respond(
    Extension(store): Extension<Arc<SurveyStore>>,
    Extension(shutdown): Extension<ShutdownSignal>,
    body: Bytes,
) -> (StatusCode, String) {
    let responder: Responder = match serde_json::from_slice(&body) {
        Ok(responder) => responder,
        Err(e) => {
            tracing::warn!("Rejected malformed response body: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                format!("invalid response body: {}", e),
            );
        }
    };

    tracing::info!(
        "Got response from '{}' ({} answers)",
        responder.name,
        responder.answers.len()
    );

    let ack = respond_ack(&responder.name);
    match store.add_response(responder.name, responder.answers).await {
        Ok(()) => (StatusCode::OK, ack),
        Err(e) => {
            // Backup is no longer durable; stop accepting responses.
            tracing::error!("Failed to save survey backup, shutting down: {}", e);
            shutdown.trigger();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to save response".to_string(),
            )
        }
    }
}

pub async fn handle_view(Extension(store): Extension<Arc<SurveyStore>>) -> Html<String> {
    tracing::debug!("Serving survey contents");
    Html(store.render().await)
}

pub async fn handle_survey(
    Extension(store): Extension<Arc<SurveyStore>>,
) -> Json<SurveyQuestionsResponse> {
    let (name, questions) = store.questions().await;
    Json(SurveyQuestionsResponse { name, questions })
}
