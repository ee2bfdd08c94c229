//! # lyra-ai-session
//!
//! Per-session learning state and the glue between the core pipelines and
//! the UI layer. This crate owns everything a study session accumulates in
//! memory — nothing here persists beyond process lifetime:
//!
//! - **[`profile`]**: the student's learning profile (interaction counts,
//!   learning pace, knowledge gaps, study history, exam scores) and the
//!   pace-adjustment heuristics that update it
//! - **[`feedback`]**: proficiency levels and feedback messages for quiz
//!   results
//! - **[`prompt`]**: assembly of the personalized-answer and quiz-generation
//!   prompts from retrieved passages and the profile
//! - **[`quiz_session`]**: the validation boundary between the lenient quiz
//!   parser and a running quiz — unusable questions are filtered here, and
//!   answers are checked and scored here
//!
//! ## Architecture
//!
//! The session layer sits between the core crates and the excluded
//! collaborators (UI and model call):
//!
//! ```text
//! upload → lyra-ai-context → lyra-ai-retriever ─┐
//!                                               ├→ prompt ─→ (model call)
//! StudentProfile ───────────────────────────────┘               ↓
//!        ↑                                    lyra-ai-quiz ← response
//!        └── record_interaction/record_exam ←── quiz_session
//! ```
//!
//! Everything is synchronous and value-oriented: callers pass timestamps in
//! explicitly, so every update is a pure function of its arguments and the
//! profile it mutates.

pub mod feedback;
pub mod profile;
pub mod prompt;
pub mod quiz_session;

pub use feedback::{ProficiencyLevel, exam_feedback};
pub use profile::{LearningPace, StudentProfile, extract_topics};
pub use prompt::{answer_prompt, assemble_context, quiz_prompt};
pub use quiz_session::{QuizScore, check_answer, score, usable_questions};
