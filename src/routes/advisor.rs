use actix_web::{error::ResponseError, http::StatusCode, web, HttpResponse, Responder};
use thiserror::Error;
use validator::Validate;

use crate::core::{AdvisorError, CATALOG, QUESTIONS};
use crate::models::{AnswerRequest, ErrorResponse, HealthResponse, RecommendationsResponse, SessionResponse};
use crate::services::{SessionStore, SessionStoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
}

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Advisor(#[from] AdvisorError),

    #[error(transparent)]
    Store(#[from] SessionStoreError),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Advisor(AdvisorError::InvalidAnswerValue { .. }) => "invalid_answer_value",
            ApiError::Advisor(AdvisorError::UnknownQuestion(_)) => "unknown_question",
            ApiError::Advisor(AdvisorError::QuestionOutOfOrder { .. }) => "question_out_of_order",
            ApiError::Advisor(AdvisorError::SessionAlreadyComplete) => "session_already_complete",
            ApiError::Advisor(AdvisorError::SessionNotComplete) => "session_not_complete",
            ApiError::Store(SessionStoreError::NotFound(_)) => "session_not_found",
            ApiError::Store(SessionStoreError::CapacityExceeded(_)) => "store_full",
            ApiError::Validation(_) => "validation_failed",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Advisor(AdvisorError::SessionAlreadyComplete)
            | ApiError::Advisor(AdvisorError::SessionNotComplete) => StatusCode::CONFLICT,
            ApiError::Advisor(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(SessionStoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(SessionStoreError::CapacityExceeded(_)) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Configure all advisor routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/questions", web::get().to(list_questions))
        .route("/neighborhoods", web::get().to(list_neighborhoods))
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/{id}", web::get().to(get_session))
        .route("/sessions/{id}", web::delete().to(delete_session))
        .route("/sessions/{id}/answers", web::post().to(answer_question))
        .route("/sessions/{id}/reset", web::post().to(reset_session))
        .route("/sessions/{id}/recommendations", web::get().to(get_recommendations));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        active_sessions: state.sessions.len(),
        timestamp: chrono::Utc::now(),
    })
}

async fn list_questions() -> impl Responder {
    HttpResponse::Ok().json(&QUESTIONS[..])
}

async fn list_neighborhoods() -> impl Responder {
    HttpResponse::Ok().json(&CATALOG[..])
}

/// Start a session
///
/// POST /api/v1/sessions
async fn create_session(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let (id, handle) = state.sessions.create().await?;
    let session = handle.lock().await;

    Ok(HttpResponse::Created().json(SessionResponse::from_session(&id, &session)))
}

/// GET /api/v1/sessions/{id}
async fn get_session(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let handle = state.sessions.get(&id).await?;
    let session = handle.lock().await;

    Ok(HttpResponse::Ok().json(SessionResponse::from_session(&id, &session)))
}

/// DELETE /api/v1/sessions/{id}
async fn delete_session(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    state.sessions.remove(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Answer the current question
///
/// POST /api/v1/sessions/{id}/answers
///
/// Request body:
/// ```json
/// {
///   "questionId": "budget",
///   "value": "mid"
/// }
/// ```
async fn answer_question(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<AnswerRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let id = path.into_inner();
    let handle = state.sessions.get(&id).await?;
    let mut session = handle.lock().await;

    if let Err(e) = session.answer_question(&req.question_id, &req.value) {
        tracing::info!(session_id = %id, error = %e, "Rejected answer");
        return Err(e.into());
    }

    Ok(HttpResponse::Ok().json(SessionResponse::from_session(&id, &session)))
}

/// POST /api/v1/sessions/{id}/reset
async fn reset_session(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let handle = state.sessions.get(&id).await?;
    let mut session = handle.lock().await;

    session.reset();
    tracing::debug!(session_id = %id, "Reset advisor session");

    Ok(HttpResponse::Ok().json(SessionResponse::from_session(&id, &session)))
}

/// GET /api/v1/sessions/{id}/recommendations
async fn get_recommendations(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let handle = state.sessions.get(&id).await?;
    let session = handle.lock().await;

    let recommendations = session.recommendations()?.to_vec();

    Ok(HttpResponse::Ok().json(RecommendationsResponse {
        session_id: id,
        recommendations,
    }))
}
