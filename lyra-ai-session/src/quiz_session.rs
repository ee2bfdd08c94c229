//! The validation boundary between the lenient quiz parser and a running
//! quiz session.
//!
//! `lyra-ai-quiz` deliberately passes malformed records through; this module
//! is where they stop. Questions are filtered before a quiz starts, and
//! answer checking and scoring live here too. The UI owns which questions
//! have been answered so far — this module only computes.

use lyra_ai_quiz::QuestionRecord;

/// Result of a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

impl QuizScore {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.correct as f64 / self.total as f64) * 100.0
        }
    }
}

/// Filters parsed records down to the ones usable in a quiz session.
///
/// Unusable records — wrong option count, missing or garbled correct label,
/// empty question text — are dropped with a warning. This is the validation
/// the parser deliberately does not do.
///
/// # Examples
///
/// ```
/// use lyra_ai_quiz::parse_questions;
/// use lyra_ai_session::usable_questions;
///
/// let parsed = parse_questions("QUESTION: Two options only?\nA) Yes\nB) No\n---");
/// assert_eq!(parsed.len(), 1);
/// assert!(usable_questions(parsed).is_empty());
/// ```
pub fn usable_questions(parsed: Vec<QuestionRecord>) -> Vec<QuestionRecord> {
    parsed
        .into_iter()
        .filter(|question| match question.validate() {
            Ok(()) => true,
            Err(reason) => {
                tracing::warn!(
                    "dropping unusable question {:?}: {reason}",
                    question.question
                );
                false
            }
        })
        .collect()
}

/// Whether `selected_option` answers `question` correctly.
///
/// The selected option is one of the labeled option strings shown to the
/// student (`"B) Proteins"`); its leading letter is compared against the
/// record's correct label, case-insensitively. A question without a valid
/// correct label can never be answered correctly.
pub fn check_answer(question: &QuestionRecord, selected_option: &str) -> bool {
    let Ok(label) = question.correct_label() else {
        return false;
    };
    selected_option
        .trim_start()
        .chars()
        .next()
        .is_some_and(|letter| letter.to_ascii_uppercase() == label.as_char())
}

/// Scores a completed quiz: one selection per question, in question order.
/// Unanswered questions are passed as `None` and count as incorrect.
pub fn score(questions: &[QuestionRecord], selections: &[Option<&str>]) -> QuizScore {
    let correct = questions
        .iter()
        .zip(selections)
        .filter(|(question, selection)| {
            selection.is_some_and(|selected| check_answer(question, selected))
        })
        .count();
    QuizScore {
        correct,
        total: questions.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: &str) -> QuestionRecord {
        QuestionRecord {
            question: "Which bond holds the two DNA strands together?".to_string(),
            options: vec![
                "A) Peptide bonds".to_string(),
                "B) Hydrogen bonds".to_string(),
                "C) Ionic bonds".to_string(),
                "D) Disulfide bridges".to_string(),
            ],
            correct: Some(correct.to_string()),
            explanation: None,
        }
    }

    #[test]
    fn test_check_answer_compares_leading_letter() {
        let q = question("B");
        assert!(check_answer(&q, "B) Hydrogen bonds"));
        assert!(check_answer(&q, "b) hydrogen bonds"));
        assert!(!check_answer(&q, "A) Peptide bonds"));
        assert!(!check_answer(&q, ""));
    }

    #[test]
    fn test_check_answer_fails_without_valid_label() {
        let mut q = question("B");
        q.correct = None;
        assert!(!check_answer(&q, "B) Hydrogen bonds"));
        q.correct = Some("E".to_string());
        assert!(!check_answer(&q, "B) Hydrogen bonds"));
    }

    #[test]
    fn test_score_counts_correct_and_unanswered() {
        let questions = vec![question("B"), question("A"), question("C")];
        let selections = vec![
            Some("B) Hydrogen bonds"),
            Some("C) Ionic bonds"),
            None,
        ];
        let result = score(&questions, &selections);
        assert_eq!(result, QuizScore { correct: 1, total: 3 });
        assert!((result.percent() - 33.333).abs() < 0.01);
    }

    #[test]
    fn test_score_empty_quiz() {
        let result = score(&[], &[]);
        assert_eq!(result.total, 0);
        assert_eq!(result.percent(), 0.0);
    }

    #[test]
    fn test_usable_questions_keeps_valid_records() {
        let mut bad = question("B");
        bad.options.pop();
        let kept = usable_questions(vec![question("A"), bad, question("D")]);
        assert_eq!(kept.len(), 2);
    }
}
