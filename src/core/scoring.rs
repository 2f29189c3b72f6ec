use crate::models::{
    AmenityPreference, AnswerSet, BudgetTier, CommuteMode, CommutePreference, Neighborhood,
    Preferences, RoommatePreference, Vibe,
};

/// A single weighted condition over a preference set and a neighborhood
#[derive(Clone, Copy)]
pub struct ScoringRule {
    pub name: &'static str,
    pub points: u32,
    pub applies: fn(&Preferences, &Neighborhood) -> bool,
}

impl std::fmt::Debug for ScoringRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringRule")
            .field("name", &self.name)
            .field("points", &self.points)
            .finish_non_exhaustive()
    }
}

/// Upper bound on any single-neighborhood score: the best exact and soft
/// match of every dimension added together.
pub const SCORE_UPPER_BOUND: u32 = 14;

/// Rule table. Every rule is evaluated for every neighborhood and the
/// points of the matching ones are summed.
pub static SCORING_RULES: [ScoringRule; 15] = [
    ScoringRule {
        name: "budget_exact",
        points: 3,
        applies: |p, n| p.budget == Some(n.budget_tier),
    },
    ScoringRule {
        name: "budget_low_near_mid",
        points: 1,
        applies: |p, n| p.budget == Some(BudgetTier::Low) && n.budget_tier == BudgetTier::Mid,
    },
    ScoringRule {
        name: "budget_high_near_mid",
        points: 1,
        applies: |p, n| p.budget == Some(BudgetTier::High) && n.budget_tier == BudgetTier::Mid,
    },
    ScoringRule {
        name: "commute_walk",
        points: 3,
        applies: |p, n| {
            p.commute == Some(CommutePreference::Walk) && n.commute_mode == CommuteMode::Walk
        },
    },
    ScoringRule {
        name: "commute_bike",
        points: 3,
        applies: |p, n| {
            p.commute == Some(CommutePreference::Bike) && n.commute_mode == CommuteMode::Bike
        },
    },
    ScoringRule {
        name: "commute_bus",
        points: 3,
        applies: |p, n| {
            p.commute == Some(CommutePreference::Bus) && n.commute_mode == CommuteMode::Bus
        },
    },
    // Unconditional: driving has no neighborhood attribute to match against.
    ScoringRule {
        name: "commute_drive",
        points: 1,
        applies: |p, _| p.commute == Some(CommutePreference::Drive),
    },
    ScoringRule {
        name: "vibe_exact",
        points: 3,
        applies: |p, n| p.vibe == Some(n.vibe),
    },
    ScoringRule {
        name: "vibe_balanced_not_lively",
        points: 1,
        applies: |p, n| p.vibe == Some(Vibe::Balanced) && n.vibe != Vibe::Lively,
    },
    ScoringRule {
        name: "amenity_nightlife",
        points: 2,
        applies: |p, n| p.amenities == Some(AmenityPreference::Nightlife) && n.vibe == Vibe::Lively,
    },
    ScoringRule {
        name: "amenity_cafes",
        points: 1,
        applies: |p, n| p.amenities == Some(AmenityPreference::Cafes) && n.vibe != Vibe::Lively,
    },
    ScoringRule {
        name: "amenity_green",
        points: 2,
        applies: |p, n| p.amenities == Some(AmenityPreference::Green) && n.vibe == Vibe::Quiet,
    },
    ScoringRule {
        name: "amenity_essentials",
        points: 1,
        applies: |p, _| p.amenities == Some(AmenityPreference::Essentials),
    },
    ScoringRule {
        name: "roommates_not_high",
        points: 1,
        applies: |p, n| {
            p.roommates == Some(RoommatePreference::Roommates) && n.budget_tier != BudgetTier::High
        },
    },
    ScoringRule {
        name: "solo_high",
        points: 1,
        applies: |p, n| p.roommates == Some(RoommatePreference::Solo) && n.budget_tier == BudgetTier::High,
    },
];

/// Score a neighborhood against an answer set
#[inline]
pub fn score(answers: &AnswerSet, neighborhood: &Neighborhood) -> u32 {
    let prefs = Preferences::from(answers);
    score_preferences(&prefs, neighborhood)
}

/// Score from an already-parsed preference set
#[inline]
pub fn score_preferences(prefs: &Preferences, neighborhood: &Neighborhood) -> u32 {
    SCORING_RULES
        .iter()
        .filter(|rule| (rule.applies)(prefs, neighborhood))
        .map(|rule| rule.points)
        .sum()
}

/// Score a neighborhood and report which rules contributed, in table order
pub fn score_breakdown(
    prefs: &Preferences,
    neighborhood: &Neighborhood,
) -> (u32, Vec<&'static str>) {
    let mut total = 0;
    let mut matched = Vec::new();

    for rule in &SCORING_RULES {
        if (rule.applies)(prefs, neighborhood) {
            total += rule.points;
            matched.push(rule.name);
        }
    }

    (total, matched)
}
