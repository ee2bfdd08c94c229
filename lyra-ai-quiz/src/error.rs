//! Error types for quiz question validation

/// Result type for quiz validation operations.
pub type Result<T> = std::result::Result<T, QuestionError>;

/// Why a parsed question record is unusable in a quiz session.
///
/// The parser itself never produces these — it passes malformed records
/// through untouched. Validation happens at the quiz-session boundary, where
/// an unusable record is filtered out or flagged rather than shown to a
/// student.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionError {
    /// The record has no question text.
    #[error("question text is empty")]
    EmptyQuestion,

    /// A usable multiple-choice question carries exactly four options.
    #[error("expected 4 options, found {0}")]
    WrongOptionCount(usize),

    /// No `CORRECT:` line was present for this record.
    #[error("missing correct answer label")]
    MissingCorrectLabel,

    /// The `CORRECT:` line did not hold a single A-D letter.
    #[error("invalid correct answer label: {0:?}")]
    InvalidCorrectLabel(String),
}
