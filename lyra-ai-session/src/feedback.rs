//! Feedback messages and proficiency levels for quiz results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Proficiency bands derived from a quiz percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProficiencyLevel {
    Advanced,
    Proficient,
    Developing,
    NeedsReview,
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProficiencyLevel::Advanced => "Advanced",
            ProficiencyLevel::Proficient => "Proficient",
            ProficiencyLevel::Developing => "Developing",
            ProficiencyLevel::NeedsReview => "Needs Review",
        };
        write!(f, "{label}")
    }
}

/// Personalized feedback for an exam result: a message for the student and
/// the proficiency band the score falls in.
///
/// Thresholds: 90% and up is Advanced, 75% Proficient, 60% Developing,
/// anything lower Needs Review. A zero-question quiz counts as 0%.
pub fn exam_feedback(score: usize, total: usize) -> (&'static str, ProficiencyLevel) {
    let percentage = if total == 0 {
        0.0
    } else {
        (score as f64 / total as f64) * 100.0
    };

    if percentage >= 90.0 {
        (
            "Excellent work! You have a strong grasp of this material.",
            ProficiencyLevel::Advanced,
        )
    } else if percentage >= 75.0 {
        (
            "Good job! You understand most concepts well. Keep practicing!",
            ProficiencyLevel::Proficient,
        )
    } else if percentage >= 60.0 {
        (
            "You're making progress. Review the topics you missed and try again.",
            ProficiencyLevel::Developing,
        )
    } else {
        (
            "You may need more study time on this topic. Don't worry - learning takes time!",
            ProficiencyLevel::NeedsReview,
        )
    }
}
