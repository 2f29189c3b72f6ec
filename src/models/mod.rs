// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Answer, AnswerSet, AmenityPreference, BudgetTier, CommuteMode, CommutePreference, Neighborhood,
    Preferences, Question, QuestionOption, RoommatePreference, ScoredNeighborhood, Speaker,
    TranscriptEntry, UnknownTag, Vibe,
};
pub use requests::AnswerRequest;
pub use responses::{ErrorResponse, HealthResponse, RecommendationsResponse, SessionResponse};
