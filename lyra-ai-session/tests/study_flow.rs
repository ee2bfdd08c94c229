//! End-to-end study session flow across all four crates
//!
//! Mirrors what the UI layer does: chunk an upload, build an index, retrieve
//! context for a question, assemble prompts, and keep the student profile
//! current. The model call itself is excluded — its input and output are
//! plain strings on either side of these tests.

use chrono::{DateTime, Utc};
use lyra_ai_context::TextChunker;
use lyra_ai_quiz::parse_questions;
use lyra_ai_retriever::{IndexConfig, LexicalIndex};
use lyra_ai_session::{
    StudentProfile, answer_prompt, assemble_context, quiz_prompt, usable_questions,
};

const UPLOAD: &str = "\
The cell membrane is a phospholipid bilayer studded with proteins. It \
controls what enters and leaves the cell through passive and active \
transport.

Osmosis is the passive diffusion of water across a selectively permeable \
membrane, from low solute concentration toward high solute concentration.

Active transport moves molecules against their concentration gradient and \
requires ATP. The sodium-potassium pump is the classic example, exporting \
three sodium ions for every two potassium ions imported.";

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-03-10T14:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_question_answer_flow_builds_grounded_prompt() {
    let chunker = TextChunker::new(220, 40);
    let chunks = chunker.chunk(UPLOAD);
    let index = LexicalIndex::build(chunks, &IndexConfig::default());

    let query = "how does osmosis work?";
    let hits = index.search(query, 3);
    assert!(hits[0].text.contains("Osmosis"));

    let mut profile = StudentProfile::new();
    profile.record_interaction(query, now());

    let context = assemble_context(&hits);
    let prompt = answer_prompt(&context, query, &profile);

    assert!(prompt.contains("Osmosis is the passive diffusion of water"));
    assert!(prompt.contains("Student Question: how does osmosis work?"));
    assert_eq!(profile.interaction_count, 1);
}

#[test]
fn test_quiz_generation_prompt_round_trips_through_parser() {
    let chunker = TextChunker::new(220, 40);
    let index = LexicalIndex::build(chunker.chunk(UPLOAD), &IndexConfig::default());
    let hits = index.search("active transport", 5);
    let prompt = quiz_prompt(&assemble_context(&hits), "active transport", 2);
    assert!(prompt.contains("sodium-potassium pump"));

    // Simulated model response in exactly the format the prompt requests.
    let response = "\
QUESTION: What does the sodium-potassium pump export?
A) Two potassium ions
B) Three sodium ions
C) Water molecules
D) Glucose
CORRECT: B
EXPLANATION: It exports three sodium ions per cycle.
---
QUESTION: What does active transport consume?
A) NADH
B) Light
C) ATP
D) Heat
CORRECT: C
EXPLANATION: Moving against a gradient requires ATP.
---";

    let questions = usable_questions(parse_questions(response));
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].correct.as_deref(), Some("B"));
    assert_eq!(questions[1].options[2], "C) ATP");
}

#[test]
fn test_exam_results_accumulate_on_profile() {
    let mut profile = StudentProfile::new();
    profile.record_exam("membranes", 50.0, now());
    profile.record_exam("membranes", 100.0, now());

    assert_eq!(profile.average_score(), Some(75.0));
    assert_eq!(profile.exam_scores["membranes"].len(), 2);
}
