use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a categorical tag does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tag: {0}")]
pub struct UnknownTag(pub String);

// Generates `as_str`, `FromStr` and `Display` for a lowercase-tagged enum.
macro_rules! categorical {
    ($name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownTag;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    other => Err(UnknownTag(other.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Social character of a neighborhood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Quiet,
    Balanced,
    Lively,
}

categorical!(Vibe { Quiet => "quiet", Balanced => "balanced", Lively => "lively" });

/// How a neighborhood connects to campus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommuteMode {
    Walk,
    Bike,
    Bus,
    Far,
}

categorical!(CommuteMode { Walk => "walk", Bike => "bike", Bus => "bus", Far => "far" });

/// Rent tier, shared by neighborhoods and budget answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Mid,
    High,
}

categorical!(BudgetTier { Low => "low", Mid => "mid", High => "high" });

/// Commute answer. `Drive` has no neighborhood counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommutePreference {
    Walk,
    Bike,
    Bus,
    Drive,
}

categorical!(CommutePreference { Walk => "walk", Bike => "bike", Bus => "bus", Drive => "drive" });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmenityPreference {
    Nightlife,
    Cafes,
    Green,
    Essentials,
}

categorical!(AmenityPreference {
    Nightlife => "nightlife",
    Cafes => "cafes",
    Green => "green",
    Essentials => "essentials",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoommatePreference {
    Roommates,
    Solo,
}

categorical!(RoommatePreference { Roommates => "roommates", Solo => "solo" });

/// Static neighborhood record from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighborhood {
    pub id: &'static str,
    pub name: &'static str,
    pub vibe: Vibe,
    #[serde(rename = "commuteMode")]
    pub commute_mode: CommuteMode,
    #[serde(rename = "budgetTier")]
    pub budget_tier: BudgetTier,
    pub highlights: &'static [&'static str],
    pub cautions: &'static [&'static str],
}

/// One selectable answer to a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Multiple-choice question; `id` names the preference dimension it sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    /// Short heading used by the preference summary
    pub topic: &'static str,
    pub prompt: &'static str,
    pub options: &'static [QuestionOption],
}

impl Question {
    /// Find the option carrying `value`
    pub fn option(&self, value: &str) -> Option<&'static QuestionOption> {
        self.options.iter().find(|opt| opt.value == value)
    }
}

/// A single recorded answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "questionId")]
    pub question_id: String,
    pub value: String,
}

/// Question id -> chosen option value, kept in the order answers were given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: Vec<Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.question_id == question_id)
            .map(|a| a.value.as_str())
    }

    /// Record an answer, replacing any earlier answer to the same question
    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        let question_id = question_id.into();
        let value = value.into();
        match self.entries.iter_mut().find(|a| a.question_id == question_id) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Answer { question_id, value }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = AnswerSet::new();
        for (k, v) in iter {
            answers.insert(k, v);
        }
        answers
    }
}

/// Typed view of an answer set used by the scoring rules.
/// Missing or unrecognised values are `None` and match nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub budget: Option<BudgetTier>,
    pub commute: Option<CommutePreference>,
    pub vibe: Option<Vibe>,
    pub amenities: Option<AmenityPreference>,
    pub roommates: Option<RoommatePreference>,
}

impl From<&AnswerSet> for Preferences {
    fn from(answers: &AnswerSet) -> Self {
        fn parse<T: FromStr>(answers: &AnswerSet, key: &str) -> Option<T> {
            answers.get(key).and_then(|v| v.parse().ok())
        }

        Self {
            budget: parse(answers, "budget"),
            commute: parse(answers, "commute"),
            vibe: parse(answers, "vibe"),
            amenities: parse(answers, "amenities"),
            roommates: parse(answers, "roommates"),
        }
    }
}

/// A neighborhood paired with its score for one answer set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredNeighborhood {
    #[serde(flatten)]
    pub neighborhood: &'static Neighborhood,
    pub score: u32,
    #[serde(rename = "matchedRules")]
    pub matched_rules: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Bot,
    User,
}

/// Presentation-only conversation line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub id: String,
    pub role: Speaker,
    pub text: String,
}

impl TranscriptEntry {
    pub fn bot(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: Speaker::Bot,
            text: text.into(),
        }
    }

    pub fn user(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: Speaker::User,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_str() {
        for tier in BudgetTier::ALL {
            assert_eq!(tier.as_str().parse::<BudgetTier>(), Ok(*tier));
        }
        assert_eq!("drive".parse::<CommutePreference>(), Ok(CommutePreference::Drive));
        assert!("drive".parse::<CommuteMode>().is_err());
    }

    #[test]
    fn test_unknown_tag_message() {
        let err = "loud".parse::<Vibe>().unwrap_err();
        assert_eq!(err, UnknownTag("loud".to_string()));
        assert_eq!(err.to_string(), "unknown tag: loud");
    }

    #[test]
    fn test_answer_set_keeps_insertion_order() {
        let mut answers = AnswerSet::new();
        answers.insert("budget", "low");
        answers.insert("commute", "bike");
        answers.insert("budget", "mid");

        let keys: Vec<_> = answers.iter().map(|a| a.question_id.as_str()).collect();
        assert_eq!(keys, vec!["budget", "commute"]);
        assert_eq!(answers.get("budget"), Some("mid"));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn test_preferences_ignore_unknown_values() {
        let answers: AnswerSet = [("budget", "cheap"), ("vibe", "quiet")].into_iter().collect();
        let prefs = Preferences::from(&answers);

        assert_eq!(prefs.budget, None);
        assert_eq!(prefs.vibe, Some(Vibe::Quiet));
        assert_eq!(prefs.commute, None);
    }

    #[test]
    fn test_answer_set_serializes_as_list() {
        let answers: AnswerSet = [("budget", "low")].into_iter().collect();
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json, serde_json::json!([{ "questionId": "budget", "value": "low" }]));
    }
}
