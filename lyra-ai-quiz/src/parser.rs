//! Line-oriented parser for model-generated quiz text.
//!
//! The parser is an explicit two-state machine. In `AwaitingQuestion` it
//! scans for a `QUESTION:` marker and ignores everything else — stray
//! option or `CORRECT:` lines before any question cannot open a record. In
//! `CollectingOptions` it accumulates option, correct-answer, and
//! explanation lines into the open record until that record is closed:
//! explicitly by a standalone `---` delimiter, implicitly by the next
//! `QUESTION:` marker, or at end of input.
//!
//! Malformed blocks are passed through as-is — a record with two options or
//! no correct label is still produced. Usability is the caller's call, via
//! [`QuestionRecord::validate`](crate::QuestionRecord::validate).

use crate::question::QuestionRecord;

const QUESTION_MARKER: &str = "QUESTION:";
const CORRECT_MARKER: &str = "CORRECT:";
const EXPLANATION_MARKER: &str = "EXPLANATION:";
const RECORD_DELIMITER: &str = "---";

/// The four recognized option labels. Only lines starting with one of these
/// are accepted as options.
const OPTION_LABELS: [&str; 4] = ["A)", "B)", "C)", "D)"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// No record is open; scanning for the next `QUESTION:` marker.
    AwaitingQuestion,
    /// A record is open and collecting option/correct/explanation lines.
    CollectingOptions,
}

/// Parses raw model output into an ordered sequence of question records.
///
/// A pure function of the input string: identical input always yields an
/// identical output sequence, and no input is ever rejected.
///
/// # Examples
///
/// ```
/// use lyra_ai_quiz::parse_questions;
///
/// // A block missing its trailing delimiter still flushes at end of input.
/// let questions = parse_questions("QUESTION: Largest planet?\nA) Jupiter\nCORRECT: A");
/// assert_eq!(questions.len(), 1);
/// assert_eq!(questions[0].question, "Largest planet?");
/// assert_eq!(questions[0].options, vec!["A) Jupiter"]);
/// ```
pub fn parse_questions(raw: &str) -> Vec<QuestionRecord> {
    let mut questions = Vec::new();
    let mut state = ParserState::AwaitingQuestion;
    let mut current = QuestionRecord::default();

    for line in raw.lines() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix(QUESTION_MARKER) {
            // A new question implicitly closes the record in progress.
            if state == ParserState::CollectingOptions {
                questions.push(std::mem::take(&mut current));
            }
            current.question = rest.trim().to_string();
            state = ParserState::CollectingOptions;
            continue;
        }

        if state == ParserState::AwaitingQuestion {
            continue;
        }

        if OPTION_LABELS.iter().any(|label| line.starts_with(label)) {
            current.options.push(line.to_string());
        } else if let Some(rest) = line.strip_prefix(CORRECT_MARKER) {
            current.correct = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix(EXPLANATION_MARKER) {
            current.explanation = Some(rest.trim().to_string());
        } else if line == RECORD_DELIMITER {
            questions.push(std::mem::take(&mut current));
            state = ParserState::AwaitingQuestion;
        }
        // Anything else between markers is ignored.
    }

    // End of input flushes an open record, provided it got question text.
    if state == ParserState::CollectingOptions && !current.question.is_empty() {
        questions.push(current);
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_WELL_FORMED_BLOCKS: &str = "\
QUESTION: Which organelle produces most of the cell's ATP?
A) Nucleus
B) Mitochondrion
C) Golgi apparatus
D) Lysosome
CORRECT: B
EXPLANATION: Oxidative phosphorylation happens on the inner mitochondrial membrane.
---
QUESTION: Where does the Calvin cycle run?
A) Thylakoid lumen
B) Cytosol
C) Stroma
D) Matrix
CORRECT: C
EXPLANATION: Carbon fixation takes place in the chloroplast stroma.
---";

    #[test]
    fn test_parses_two_well_formed_blocks() {
        let questions = parse_questions(TWO_WELL_FORMED_BLOCKS);
        assert_eq!(questions.len(), 2);

        let first = &questions[0];
        assert_eq!(first.question, "Which organelle produces most of the cell's ATP?");
        assert_eq!(first.options.len(), 4);
        assert_eq!(first.options[1], "B) Mitochondrion");
        assert_eq!(first.correct.as_deref(), Some("B"));
        assert!(first.explanation.as_deref().unwrap().contains("phosphorylation"));

        let second = &questions[1];
        assert_eq!(second.question, "Where does the Calvin cycle run?");
        assert_eq!(second.correct.as_deref(), Some("C"));
    }

    #[test]
    fn test_missing_trailing_delimiter_still_flushes() {
        let raw = TWO_WELL_FORMED_BLOCKS.trim_end_matches("\n---");
        let questions = parse_questions(raw);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].options.len(), 4);
    }

    #[test]
    fn test_second_question_marker_implicitly_closes_first() {
        let raw = "\
QUESTION: First question?
A) One
B) Two
QUESTION: Second question?
A) Alpha
---";
        let questions = parse_questions(raw);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "First question?");
        assert_eq!(questions[0].options.len(), 2);
        assert_eq!(questions[1].question, "Second question?");
        assert_eq!(questions[1].options, vec!["A) Alpha"]);
    }

    #[test]
    fn test_malformed_record_passes_through() {
        let raw = "\
QUESTION: Underspecified question?
A) Only option
B) Second option
---";
        let questions = parse_questions(raw);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.len(), 2);
        assert_eq!(questions[0].correct, None);
        assert_eq!(questions[0].explanation, None);
    }

    #[test]
    fn test_markers_before_any_question_are_ignored() {
        let raw = "\
Here are your questions!
A) A stray option
CORRECT: B
---
QUESTION: The real question?
A) Yes
B) No
C) Maybe
D) Unclear
CORRECT: A
---";
        let questions = parse_questions(raw);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "The real question?");
        assert_eq!(questions[0].options.len(), 4);
    }

    #[test]
    fn test_unrecognized_lines_inside_record_are_ignored() {
        let raw = "\
QUESTION: Which base pairs with adenine in DNA?
Sure, here is a question for you.
A) Cytosine
B) Guanine
C) Thymine
D) Uracil
E) Inosine
CORRECT: C
---";
        let questions = parse_questions(raw);
        assert_eq!(questions.len(), 1);
        // The chatty preamble and the fifth "E)" option are both dropped.
        assert_eq!(questions[0].options.len(), 4);
    }

    #[test]
    fn test_lines_are_trimmed_before_matching() {
        let raw = "   QUESTION:   Spaced out?   \n  A) Yes  \n   ---   ";
        let questions = parse_questions(raw);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Spaced out?");
        assert_eq!(questions[0].options, vec!["A) Yes"]);
    }

    #[test]
    fn test_empty_input_yields_no_questions() {
        assert!(parse_questions("").is_empty());
        assert!(parse_questions("no markers anywhere").is_empty());
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(
            parse_questions(TWO_WELL_FORMED_BLOCKS),
            parse_questions(TWO_WELL_FORMED_BLOCKS)
        );
    }
}
