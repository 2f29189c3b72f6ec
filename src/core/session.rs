use serde::Serialize;
use thiserror::Error;

use crate::core::catalog::{CATALOG, QUESTIONS};
use crate::core::ranking::{rank, RECOMMENDATION_LIMIT};
use crate::models::{AnswerSet, Neighborhood, Question, ScoredNeighborhood, TranscriptEntry};

const INTRO_TEXT: &str = "Hi! I’m the local-only Housing Advisor. Answer a few questions and \
I’ll suggest the best uOttawa neighborhoods for you.";
const RESULT_TEXT: &str = "Here are your top neighborhood picks based on your answers:";

/// Errors raised by misuse of an advisor session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisorError {
    #[error("invalid answer value '{value}' for question '{question_id}'")]
    InvalidAnswerValue { question_id: String, value: String },

    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("expected an answer to '{expected}', got '{got}'")]
    QuestionOutOfOrder { expected: &'static str, got: String },

    #[error("session is already complete")]
    SessionAlreadyComplete,

    #[error("session is not complete")]
    SessionNotComplete,
}

/// Where a session is in the question sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "questionIndex", rename_all = "lowercase")]
pub enum SessionState {
    Asking(usize),
    Complete,
}

/// Builds advisor sessions with a fixed recommendation limit
#[derive(Debug, Clone, Copy)]
pub struct Advisor {
    limit: usize,
}

impl Advisor {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Start a session over the built-in questions and catalog
    pub fn start_session(&self) -> AdvisorSession {
        AdvisorSession::with_data(&QUESTIONS, &CATALOG, self.limit)
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new(RECOMMENDATION_LIMIT)
    }
}

/// One user's pass through the question sequence.
///
/// The state is derived from the number of recorded answers, so the
/// current question index always equals the answer count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorSession {
    questions: &'static [Question],
    catalog: &'static [Neighborhood],
    limit: usize,
    answers: AnswerSet,
    transcript: Vec<TranscriptEntry>,
    recommendations: Vec<ScoredNeighborhood>,
}

impl AdvisorSession {
    pub fn new() -> Self {
        Advisor::default().start_session()
    }

    /// Start a session over caller-supplied static data
    pub fn with_data(
        questions: &'static [Question],
        catalog: &'static [Neighborhood],
        limit: usize,
    ) -> Self {
        let mut session = Self {
            questions,
            catalog,
            limit,
            answers: AnswerSet::new(),
            transcript: Vec::new(),
            recommendations: Vec::new(),
        };
        session.reset();
        session
    }

    pub fn state(&self) -> SessionState {
        let answered = self.answers.len();
        if answered >= self.questions.len() {
            SessionState::Complete
        } else {
            SessionState::Asking(answered)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == SessionState::Complete
    }

    /// The question awaiting an answer, if any
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state() {
            SessionState::Asking(index) => self.questions.get(index),
            SessionState::Complete => None,
        }
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Record an answer to the current question and advance.
    ///
    /// On error the session is left untouched.
    pub fn answer_question(
        &mut self,
        question_id: &str,
        value: &str,
    ) -> Result<SessionState, AdvisorError> {
        let index = match self.state() {
            SessionState::Asking(index) => index,
            SessionState::Complete => return Err(AdvisorError::SessionAlreadyComplete),
        };

        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| AdvisorError::UnknownQuestion(question_id.to_string()))?;

        let option = question
            .option(value)
            .ok_or_else(|| AdvisorError::InvalidAnswerValue {
                question_id: question_id.to_string(),
                value: value.to_string(),
            })?;

        let current = &self.questions[index];
        if current.id != question.id {
            return Err(AdvisorError::QuestionOutOfOrder {
                expected: current.id,
                got: question_id.to_string(),
            });
        }

        self.answers.insert(question.id, option.value);
        self.transcript
            .push(TranscriptEntry::user(format!("a-{}", question.id), option.label));

        tracing::debug!(question = question.id, value = option.value, "Recorded answer");

        let next = index + 1;
        match self.questions.get(next) {
            Some(next_question) => {
                self.transcript
                    .push(TranscriptEntry::bot(format!("q-{}", next), next_question.prompt));
            }
            None => self.complete(),
        }

        Ok(self.state())
    }

    /// Ranked picks; only available once every question is answered
    pub fn recommendations(&self) -> Result<&[ScoredNeighborhood], AdvisorError> {
        if self.is_complete() {
            Ok(&self.recommendations)
        } else {
            Err(AdvisorError::SessionNotComplete)
        }
    }

    /// Clear all answers and return to the first question.
    /// With no questions at all the session is complete straight away.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.recommendations.clear();
        self.transcript.clear();
        self.transcript.push(TranscriptEntry::bot("intro", INTRO_TEXT));
        match self.questions.first() {
            Some(first) => self.transcript.push(TranscriptEntry::bot("q-0", first.prompt)),
            None => self.complete(),
        }
    }

    /// One `"{topic}: {label}"` line per question, `N/A` when unanswered
    pub fn summary(&self) -> Vec<String> {
        self.questions
            .iter()
            .map(|q| {
                let label = self
                    .answers
                    .get(q.id)
                    .and_then(|value| q.option(value))
                    .map_or("N/A", |opt| opt.label);
                format!("{}: {}", q.topic, label)
            })
            .collect()
    }

    fn complete(&mut self) {
        self.recommendations = rank(&self.answers, self.catalog, self.limit);
        self.transcript.push(TranscriptEntry::bot("result", RESULT_TEXT));

        let picks: Vec<_> = self.recommendations.iter().map(|r| r.neighborhood.id).collect();
        tracing::info!(?picks, "Advisor session complete");
    }
}

impl Default for AdvisorSession {
    fn default() -> Self {
        Self::new()
    }
}
