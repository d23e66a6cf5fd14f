use crate::api::{errors::Error, state::AppState};
use crate::model::{GenerateRequest, GenerateResponse};

use axum::{
    Router,
    extract::{Json, State, rejection::JsonRejection},
    routing::post,
};
use breakit_core::GenerationRequest;
use tracing::instrument;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate_handler).fallback(method_not_allowed))
        .route(
            "/api/generate",
            post(generate_handler).fallback(method_not_allowed),
        )
}

/// Break a problem down into one rendered section per framework.
#[instrument(skip(state, payload))]
pub async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, Error> {
    let Json(payload) = payload.map_err(|e| Error::InvalidInput(e.body_text()))?;
    let req = GenerationRequest::try_from(payload)?;

    tracing::info!(
        frameworks = ?req.frameworks(),
        tone = %req.tone,
        length = %req.length,
        "generating breakdown"
    );

    breakit_core::generate(state.gateway.as_ref(), &req, &state.render)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::warn!("Generation failed: {:?}", e);
            Error::from(e)
        })
}

async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
