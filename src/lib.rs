//! Housing Advisor - neighborhood recommendations for students
//!
//! A short questionnaire collects budget, commute, vibe, amenity and roommate
//! preferences. Once every question is answered, each neighborhood in the
//! catalog is scored against a fixed weighted rule table and the best picks
//! are returned, ties broken by catalog order.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{score, Advisor, AdvisorError, AdvisorSession, SessionState, CATALOG, QUESTIONS};
pub use models::{AnswerSet, Neighborhood, Question, ScoredNeighborhood};
