use crate::models::{BudgetTier, CommuteMode, Neighborhood, Question, QuestionOption, Vibe};

/// Ordered question sequence. Order defines the session flow.
pub static QUESTIONS: [Question; 5] = [
    Question {
        id: "budget",
        topic: "Budget",
        prompt: "What monthly rent range are you aiming for?",
        options: &[
            QuestionOption { label: "Under $900", value: "low" },
            QuestionOption { label: "$900–$1200", value: "mid" },
            QuestionOption { label: "$1200+", value: "high" },
        ],
    },
    Question {
        id: "commute",
        topic: "Commute",
        prompt: "How do you want to commute to campus?",
        options: &[
            QuestionOption { label: "Walk", value: "walk" },
            QuestionOption { label: "Bike", value: "bike" },
            QuestionOption { label: "Bus / LRT", value: "bus" },
            QuestionOption { label: "Drive", value: "drive" },
        ],
    },
    Question {
        id: "vibe",
        topic: "Vibe",
        prompt: "What neighborhood vibe fits you best?",
        options: &[
            QuestionOption { label: "Quiet and residential", value: "quiet" },
            QuestionOption { label: "Balanced", value: "balanced" },
            QuestionOption { label: "Lively / social", value: "lively" },
        ],
    },
    Question {
        id: "amenities",
        topic: "Amenities",
        prompt: "What matters most nearby?",
        options: &[
            QuestionOption { label: "Nightlife & restaurants", value: "nightlife" },
            QuestionOption { label: "Cafes & study spots", value: "cafes" },
            QuestionOption { label: "Parks & green space", value: "green" },
            QuestionOption { label: "Groceries & essentials", value: "essentials" },
        ],
    },
    Question {
        id: "roommates",
        topic: "Roommates",
        prompt: "Are you open to roommates?",
        options: &[
            QuestionOption { label: "Yes, roommates are fine", value: "roommates" },
            QuestionOption { label: "Prefer to live alone", value: "solo" },
        ],
    },
];

/// Candidate neighborhoods. Declaration order is the ranking tie-break.
pub static CATALOG: [Neighborhood; 6] = [
    Neighborhood {
        id: "sandy-hill",
        name: "Sandy Hill",
        vibe: Vibe::Lively,
        commute_mode: CommuteMode::Walk,
        budget_tier: BudgetTier::Mid,
        highlights: &["Closest to campus", "Student-heavy community", "Walkable to classes"],
        cautions: &["Can be noisy on weekends"],
    },
    Neighborhood {
        id: "byward-market",
        name: "ByWard Market",
        vibe: Vibe::Lively,
        commute_mode: CommuteMode::Walk,
        budget_tier: BudgetTier::High,
        highlights: &["Nightlife and restaurants", "Walkable downtown living"],
        cautions: &["Higher rent and busier streets"],
    },
    Neighborhood {
        id: "centretown",
        name: "Centretown",
        vibe: Vibe::Balanced,
        commute_mode: CommuteMode::Bus,
        budget_tier: BudgetTier::Mid,
        highlights: &["Good transit access", "Mix of apartments and houses"],
        cautions: &["Longer walk to campus"],
    },
    Neighborhood {
        id: "old-ottawa-east",
        name: "Old Ottawa East",
        vibe: Vibe::Quiet,
        commute_mode: CommuteMode::Bike,
        budget_tier: BudgetTier::Mid,
        highlights: &["Parks and canal paths", "Quiet streets"],
        cautions: &["Fewer nightlife options"],
    },
    Neighborhood {
        id: "vanier",
        name: "Vanier",
        vibe: Vibe::Quiet,
        commute_mode: CommuteMode::Bus,
        budget_tier: BudgetTier::Low,
        highlights: &["More affordable options", "Good bus connections"],
        cautions: &["Farther commute to campus"],
    },
    Neighborhood {
        id: "glebe",
        name: "The Glebe / Old Ottawa South",
        vibe: Vibe::Balanced,
        commute_mode: CommuteMode::Bus,
        budget_tier: BudgetTier::High,
        highlights: &["Charming streets and cafes", "Close to parks"],
        cautions: &["Higher rent prices"],
    },
];

/// Look up a question by id
pub fn question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Look up a neighborhood by id
pub fn neighborhood(id: &str) -> Option<&'static Neighborhood> {
    CATALOG.iter().find(|n| n.id == id)
}
