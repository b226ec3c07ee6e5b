use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::core::data::PatientSnapshot;
use crate::core::dispatcher::{PatientContext, QueryDispatcher};
use crate::error::DispatchError;
use crate::models::PromptRequest;

/// Shared application state: the dispatcher plus the read-only patient
/// snapshot loaded once at startup.
pub struct AppState {
    pub dispatcher: QueryDispatcher,
    pub snapshot: PatientSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct TreatmentPlanBody {
    pub condition: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationBody {
    pub text: String,
}

/// Template failures are the client's problem (422); anything involving
/// the backend is a gateway failure (502).
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] DispatchError);

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            DispatchError::Template { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DispatchError::BackendResponse { .. } | DispatchError::Backend(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub async fn chat(
    state: web::Data<AppState>,
    body: web::Json<ChatBody>,
) -> Result<HttpResponse, ApiError> {
    respond(&state, PromptRequest::chat(&body.question)).await
}

pub async fn risk_assessment(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    respond(&state, PromptRequest::risk_assessment()).await
}

pub async fn treatment_plan(
    state: web::Data<AppState>,
    body: web::Json<TreatmentPlanBody>,
) -> Result<HttpResponse, ApiError> {
    respond(&state, PromptRequest::treatment_plan(&body.condition)).await
}

pub async fn vitals_summary(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    respond(&state, PromptRequest::summary()).await
}

async fn respond(state: &AppState, request: PromptRequest) -> Result<HttpResponse, ApiError> {
    let context = PatientContext {
        profile: &state.snapshot.profile,
        vitals: &state.snapshot.vitals,
    };
    let response = state.dispatcher.dispatch(&request, context).await?;
    Ok(HttpResponse::Ok().json(GenerationBody {
        text: response.text,
    }))
}
