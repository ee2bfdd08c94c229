//! Prompt assembly for the excluded model-call layer.
//!
//! The functions here only build strings. Sending a prompt to the hosted
//! model and receiving its response belong to the model-call collaborator,
//! which hands the raw response text back to `lyra-ai-quiz` or straight to
//! the UI.

use crate::profile::{LearningPace, StudentProfile};
use lyra_ai_retriever::ScoredChunk;

/// Joins retrieved passages into the context block of a prompt, best match
/// first, separated by blank lines. Scores are dropped — the model sees only
/// the text.
pub fn assemble_context(results: &[ScoredChunk]) -> String {
    results
        .iter()
        .map(|scored| scored.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn pace_instructions(pace: LearningPace) -> &'static str {
    match pace {
        LearningPace::Fast => "Be concise and technical. The student learns quickly.",
        LearningPace::Moderate => "Balance detail and clarity. Use examples when helpful.",
        LearningPace::Slow => {
            "Be very detailed and use multiple examples. \
             Break down complex concepts step by step."
        }
    }
}

/// Builds the personalized-answer prompt for a student question.
///
/// The prompt carries the student's learning profile — pace, interaction
/// count, and the most recent known gaps — so the model can adapt depth and
/// tone, plus the retrieved course context and the question itself.
pub fn answer_prompt(context: &str, query: &str, profile: &StudentProfile) -> String {
    let gaps = profile.recent_gaps(3);
    let known_gaps = if gaps.is_empty() {
        "None identified yet".to_string()
    } else {
        gaps.join(", ")
    };

    format!(
        "You are Lyra, an AI-powered study assistant. You provide personalized, \
adaptive learning support.

Student Learning Profile:
- Learning Pace: {pace}
- Total Interactions: {interactions}
- Known Gaps: {known_gaps}

Instructions: {instructions}

Course Context:
{context}

Student Question: {query}

Provide a clear, accurate answer. If this topic relates to any known \
knowledge gaps, gently reinforce those concepts. End with a brief follow-up \
question to check understanding (optional, only if appropriate).",
        pace = profile.learning_pace,
        interactions = profile.interaction_count,
        instructions = pace_instructions(profile.learning_pace),
    )
}

/// Builds the quiz-generation prompt for `num_questions` multiple-choice
/// questions about `topic`, grounded in the retrieved course context.
///
/// The requested output format is exactly what
/// [`lyra_ai_quiz::parse_questions`] consumes.
pub fn quiz_prompt(context: &str, topic: &str, num_questions: usize) -> String {
    format!(
        "Based on the following course material, generate {num_questions} \
multiple-choice questions for exam preparation.

Course Material:
{context}

Topic Focus: {topic}

Format each question exactly as:
QUESTION: [question text]
A) [option]
B) [option]
C) [option]
D) [option]
CORRECT: [A/B/C/D]
EXPLANATION: [brief explanation]
---

Generate {num_questions} questions now."
    )
}
