//! Structured quiz question records and their usability rules.

use crate::error::{QuestionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A usable multiple-choice question carries exactly this many options.
pub const OPTION_COUNT: usize = 4;

const DEFAULT_EXPLANATION: &str = "No explanation available";

/// The four recognized answer labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerLabel {
    A,
    B,
    C,
    D,
}

impl AnswerLabel {
    pub fn as_char(self) -> char {
        match self {
            AnswerLabel::A => 'A',
            AnswerLabel::B => 'B',
            AnswerLabel::C => 'C',
            AnswerLabel::D => 'D',
        }
    }
}

impl fmt::Display for AnswerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for AnswerLabel {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "A" | "a" => Ok(AnswerLabel::A),
            "B" | "b" => Ok(AnswerLabel::B),
            "C" | "c" => Ok(AnswerLabel::C),
            "D" | "d" => Ok(AnswerLabel::D),
            other => Err(QuestionError::InvalidCorrectLabel(other.to_string())),
        }
    }
}

/// One parsed question block from model output.
///
/// Fields hold whatever the model produced: `options` keeps the full labeled
/// lines (`"B) Proteins"`) in encounter order, and `correct` keeps the raw
/// trimmed text of the `CORRECT:` line so validation can distinguish a
/// missing label from a garbled one. Records are immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct: Option<String>,
    pub explanation: Option<String>,
}

impl QuestionRecord {
    /// The explanation text, or a placeholder when the model omitted one.
    pub fn explanation_or_default(&self) -> &str {
        self.explanation.as_deref().unwrap_or(DEFAULT_EXPLANATION)
    }

    /// Parses the `correct` field into an [`AnswerLabel`].
    pub fn correct_label(&self) -> Result<AnswerLabel> {
        match &self.correct {
            None => Err(QuestionError::MissingCorrectLabel),
            Some(raw) => raw.parse(),
        }
    }

    /// Checks whether this record is usable in a quiz session: non-empty
    /// question text, exactly [`OPTION_COUNT`] options, and a valid correct
    /// label.
    ///
    /// The parser never calls this — leniency there, validation here.
    ///
    /// # Examples
    ///
    /// ```
    /// use lyra_ai_quiz::{QuestionError, QuestionRecord};
    ///
    /// let record = QuestionRecord {
    ///     question: "Which gas do plants absorb?".to_string(),
    ///     options: vec!["A) Oxygen".to_string(), "B) Carbon dioxide".to_string()],
    ///     correct: Some("B".to_string()),
    ///     explanation: None,
    /// };
    /// assert_eq!(record.validate(), Err(QuestionError::WrongOptionCount(2)));
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.question.trim().is_empty() {
            return Err(QuestionError::EmptyQuestion);
        }
        if self.options.len() != OPTION_COUNT {
            return Err(QuestionError::WrongOptionCount(self.options.len()));
        }
        self.correct_label()?;
        Ok(())
    }
}
