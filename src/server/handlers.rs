use super::{cors, types::ScienceRequest};
use crate::{
    Error, Result,
    exam::{ExamAction, Examiner},
};
use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    /// `None` when the provider credential was absent at startup.
    pub examiner: Option<Examiner>,
    /// Environment variable the credential is read from, for error messages.
    pub api_key_env: String,
}

impl AppState {
    pub fn new(examiner: Option<Examiner>, api_key_env: impl Into<String>) -> Self {
        Self {
            examiner,
            api_key_env: api_key_env.into(),
        }
    }
}

pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, cors::ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, cors::ALLOWED_HEADERS),
        ],
    )
}

pub async fn science_eq(State(state): State<AppState>, body: Bytes) -> Response {
    match process(&state, &body).await {
        Ok(response) => response,
        Err(e) => {
            if e.status_code().is_client_error() {
                warn!("Rejected request: {}", e);
            } else {
                error!("Failed to process request: {}", e);
            }
            e.into_response()
        }
    }
}

async fn process(state: &AppState, body: &[u8]) -> Result<Response> {
    // Checked before the body is even parsed.
    let examiner = state
        .examiner
        .as_ref()
        .ok_or_else(|| Error::config(format!("missing {}", state.api_key_env)))?;

    let action = ScienceRequest::from_body(body)?.into_action()?;

    let response = match action {
        ExamAction::Generate { subject, topic } => {
            Json(examiner.generate(&subject, &topic).await?).into_response()
        }
        ExamAction::Grade {
            subject,
            topic,
            question,
            answer,
        } => Json(examiner.grade(&subject, &topic, &question, &answer).await?).into_response(),
    };

    info!("Request completed");
    Ok(response)
}
