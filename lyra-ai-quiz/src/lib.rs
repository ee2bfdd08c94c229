//! # lyra-ai-quiz
//!
//! Parsing of model-generated practice quizzes into structured, answerable
//! questions. The quiz-generation prompt asks the hosted model for repeating
//! blocks of the form:
//!
//! ```text
//! QUESTION: <text>
//! A) <option>
//! B) <option>
//! C) <option>
//! D) <option>
//! CORRECT: <letter>
//! EXPLANATION: <text>
//! ---
//! ```
//!
//! Models do not always comply, so the parser is deliberately lenient: it
//! produces best-effort partial records and never rejects malformed input.
//! Callers running a quiz session validate each record before use — see
//! [`QuestionRecord::validate`] — and filter out anything unusable. That
//! split keeps the parser a pure, total function while making the usability
//! rules explicit and testable at the integration boundary.
//!
//! ## Quick Start
//!
//! ```
//! use lyra_ai_quiz::parse_questions;
//!
//! let raw = "\
//! QUESTION: What does a ribosome synthesize?
//! A) Lipids
//! B) Proteins
//! C) Nucleotides
//! D) Polysaccharides
//! CORRECT: B
//! EXPLANATION: Ribosomes translate mRNA into polypeptide chains.
//! ---";
//!
//! let questions = parse_questions(raw);
//! assert_eq!(questions.len(), 1);
//! assert!(questions[0].validate().is_ok());
//! ```

pub mod error;
pub mod parser;
pub mod question;

pub use error::{QuestionError, Result};
pub use parser::parse_questions;
pub use question::{AnswerLabel, OPTION_COUNT, QuestionRecord};
