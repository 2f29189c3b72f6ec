use serde::{Deserialize, Serialize};
use crate::core::session::{AdvisorSession, SessionState};
use crate::models::domain::{AnswerSet, Question, ScoredNeighborhood, TranscriptEntry};

/// Snapshot of an advisor session
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub state: SessionState,
    #[serde(rename = "currentQuestion", skip_serializing_if = "Option::is_none")]
    pub current_question: Option<&'static Question>,
    pub answers: AnswerSet,
    pub summary: Vec<String>,
    pub transcript: Vec<TranscriptEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<ScoredNeighborhood>>,
}

impl SessionResponse {
    pub fn from_session(session_id: &str, session: &AdvisorSession) -> Self {
        Self {
            session_id: session_id.to_string(),
            state: session.state(),
            current_question: session.current_question(),
            answers: session.answers().clone(),
            summary: session.summary(),
            transcript: session.transcript().to_vec(),
            recommendations: session.recommendations().ok().map(|recs| recs.to_vec()),
        }
    }
}

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub recommendations: Vec<ScoredNeighborhood>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "activeSessions")]
    pub active_sessions: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
