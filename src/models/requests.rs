use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to answer the current question of a session
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnswerRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "question_id", rename = "questionId")]
    pub question_id: String,
    #[validate(length(min = 1))]
    pub value: String,
}
