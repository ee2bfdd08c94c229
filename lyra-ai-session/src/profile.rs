//! The per-session student learning profile.
//!
//! The profile is plain session state: the UI layer holds one per student
//! session and hands it by mutable reference into the functions here. All
//! timestamps are supplied by the caller, so updates stay pure functions of
//! their arguments and nothing in this module reads a clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Question-shaped words that say nothing about the topic being asked about.
const TOPIC_STOP_WORDS: [&str; 10] = [
    "what", "how", "why", "when", "where", "is", "are", "the", "a", "an",
];

/// How many recent study sessions feed the pace heuristic.
const PACE_WINDOW: usize = 10;

/// Interactions required before the pace is re-evaluated at all.
const PACE_MIN_INTERACTIONS: u32 = 10;

const FAST_PACE_MAX_GAP_SECS: i64 = 3600;
const SLOW_PACE_MIN_GAP_SECS: i64 = 86_400;

/// How quickly the student works through material. Drives the tone and
/// detail level of generated answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningPace {
    Slow,
    #[default]
    Moderate,
    Fast,
}

impl std::fmt::Display for LearningPace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LearningPace::Slow => "Slow",
            LearningPace::Moderate => "Moderate",
            LearningPace::Fast => "Fast",
        };
        write!(f, "{label}")
    }
}

/// One recorded Q&A interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    pub timestamp: DateTime<Utc>,
    pub query: String,
    pub topics: Vec<String>,
}

/// One recorded quiz or assessment result for a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamRecord {
    pub percent: f64,
    pub timestamp: DateTime<Utc>,
}

/// Everything a session learns about one student.
///
/// Lives for the session only; there is no persistence layer behind it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub knowledge_gaps: Vec<String>,
    pub strong_topics: Vec<String>,
    pub interaction_count: u32,
    pub learning_pace: LearningPace,
    pub study_history: Vec<StudySession>,
    pub exam_scores: BTreeMap<String, Vec<ExamRecord>>,
}

impl StudentProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one Q&A interaction: bumps the counter, extracts topics from
    /// the query, appends to the study history, and re-evaluates the
    /// learning pace once enough interactions have accumulated.
    ///
    /// Pace heuristic: over the last ten sessions, a mean gap under an hour
    /// reads as a fast, focused study burst; a mean gap over a day reads as
    /// slow-paced study. Anything between leaves the pace unchanged.
    pub fn record_interaction(&mut self, query: &str, now: DateTime<Utc>) {
        self.interaction_count += 1;
        self.study_history.push(StudySession {
            timestamp: now,
            query: query.to_string(),
            topics: extract_topics(query),
        });

        if self.interaction_count > PACE_MIN_INTERACTIONS {
            if let Some(mean_gap) = self.mean_recent_gap_seconds() {
                if mean_gap < FAST_PACE_MAX_GAP_SECS {
                    self.learning_pace = LearningPace::Fast;
                } else if mean_gap > SLOW_PACE_MIN_GAP_SECS {
                    self.learning_pace = LearningPace::Slow;
                }
            }
        }
    }

    /// Appends a quiz result (as a percentage) under `topic`.
    pub fn record_exam(&mut self, topic: &str, percent: f64, now: DateTime<Utc>) {
        self.exam_scores
            .entry(topic.to_string())
            .or_default()
            .push(ExamRecord {
                percent,
                timestamp: now,
            });
    }

    /// Adds newly identified knowledge gaps.
    pub fn note_gaps<I>(&mut self, gaps: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.knowledge_gaps.extend(gaps);
    }

    /// The most recently noted gaps, oldest first, at most `n` of them.
    pub fn recent_gaps(&self, n: usize) -> &[String] {
        let start = self.knowledge_gaps.len().saturating_sub(n);
        &self.knowledge_gaps[start..]
    }

    /// Mean percentage over every recorded exam, or `None` when the student
    /// has not taken any.
    pub fn average_score(&self) -> Option<f64> {
        let scores: Vec<f64> = self
            .exam_scores
            .values()
            .flatten()
            .map(|record| record.percent)
            .collect();
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }

    // Mean seconds between consecutive sessions in the recent window.
    // Needs at least two sessions to say anything.
    fn mean_recent_gap_seconds(&self) -> Option<i64> {
        let start = self.study_history.len().saturating_sub(PACE_WINDOW);
        let recent = &self.study_history[start..];
        if recent.len() < 2 {
            return None;
        }
        let total: i64 = recent
            .windows(2)
            .map(|pair| (pair[1].timestamp - pair[0].timestamp).num_seconds())
            .sum();
        Some(total / (recent.len() as i64 - 1))
    }
}

/// Keyword topics of a student query: lowercased words longer than three
/// characters, with question stop words removed.
///
/// # Examples
///
/// ```
/// use lyra_ai_session::extract_topics;
///
/// assert_eq!(
///     extract_topics("What is cellular respiration?"),
///     vec!["cellular", "respiration?"]
/// );
/// ```
pub fn extract_topics(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.len() > 3 && !TOPIC_STOP_WORDS.contains(word))
        .map(|word| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn start_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-02-01T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_record_interaction_tracks_history_and_topics() {
        let mut profile = StudentProfile::new();
        profile.record_interaction("What is osmosis exactly?", start_time());

        assert_eq!(profile.interaction_count, 1);
        assert_eq!(profile.study_history.len(), 1);
        assert_eq!(
            profile.study_history[0].topics,
            vec!["osmosis", "exactly?"]
        );
        assert_eq!(profile.learning_pace, LearningPace::Moderate);
    }

    #[test]
    fn test_rapid_interactions_shift_pace_to_fast() {
        let mut profile = StudentProfile::new();
        let mut now = start_time();
        for _ in 0..12 {
            profile.record_interaction("explain enzyme kinetics", now);
            now += TimeDelta::minutes(5);
        }
        assert_eq!(profile.learning_pace, LearningPace::Fast);
    }

    #[test]
    fn test_sparse_interactions_shift_pace_to_slow() {
        let mut profile = StudentProfile::new();
        let mut now = start_time();
        for _ in 0..12 {
            profile.record_interaction("explain enzyme kinetics", now);
            now += TimeDelta::days(2);
        }
        assert_eq!(profile.learning_pace, LearningPace::Slow);
    }

    #[test]
    fn test_moderate_cadence_leaves_pace_unchanged() {
        let mut profile = StudentProfile::new();
        let mut now = start_time();
        for _ in 0..12 {
            profile.record_interaction("explain enzyme kinetics", now);
            now += TimeDelta::hours(5);
        }
        assert_eq!(profile.learning_pace, LearningPace::Moderate);
    }

    #[test]
    fn test_pace_untouched_below_interaction_threshold() {
        let mut profile = StudentProfile::new();
        let mut now = start_time();
        for _ in 0..5 {
            profile.record_interaction("quick question", now);
            now += TimeDelta::minutes(1);
        }
        assert_eq!(profile.learning_pace, LearningPace::Moderate);
    }

    #[test]
    fn test_record_exam_and_average() {
        let mut profile = StudentProfile::new();
        assert_eq!(profile.average_score(), None);

        profile.record_exam("photosynthesis", 80.0, start_time());
        profile.record_exam("photosynthesis", 90.0, start_time());
        profile.record_exam("genetics", 70.0, start_time());

        assert_eq!(profile.exam_scores["photosynthesis"].len(), 2);
        assert_eq!(profile.average_score(), Some(80.0));
    }

    #[test]
    fn test_recent_gaps_returns_last_n() {
        let mut profile = StudentProfile::new();
        profile.note_gaps(["ionic bonds", "covalent bonds", "hydrogen bonds"].map(String::from));
        assert_eq!(
            profile.recent_gaps(2),
            &["covalent bonds".to_string(), "hydrogen bonds".to_string()]
        );
        assert_eq!(profile.recent_gaps(10).len(), 3);
    }

    #[test]
    fn test_extract_topics_filters_stop_words_and_short_words() {
        assert_eq!(
            extract_topics("How does the Krebs cycle work?"),
            vec!["does", "krebs", "cycle", "work?"]
        );
        assert!(extract_topics("what is the a an").is_empty());
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let mut profile = StudentProfile::new();
        profile.record_interaction("what is mitosis", start_time());
        profile.record_exam("mitosis", 75.0, start_time());

        let json = serde_json::to_string(&profile).unwrap();
        let back: StudentProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }
}
