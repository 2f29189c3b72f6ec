// Core algorithm exports
pub mod catalog;
pub mod ranking;
pub mod scoring;
pub mod session;

pub use catalog::{neighborhood, question, CATALOG, QUESTIONS};
pub use ranking::{rank, RECOMMENDATION_LIMIT};
pub use scoring::{score, score_breakdown, score_preferences, ScoringRule, SCORE_UPPER_BOUND, SCORING_RULES};
pub use session::{Advisor, AdvisorError, AdvisorSession, SessionState};
