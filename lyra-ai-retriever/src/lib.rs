//! lyra-ai-retriever: Lexical passage retrieval for uploaded course material
//!
//! This crate turns a set of text chunks (produced by `lyra-ai-context`) into
//! a sparse term-weighted index and answers similarity queries against it.
//! No learned embedding model is involved: chunks are represented over a
//! bounded vocabulary of unigrams and bigrams, weighted by term frequency and
//! inverse document frequency, and ranked by cosine similarity.
//!
//! ## Key Modules
//!
//! - **[`retrieval`]**: Tokenization, index construction, and search
//!
//! ## Quick Start
//!
//! ```rust
//! use lyra_ai_retriever::retrieval::lexical_index::{IndexConfig, LexicalIndex};
//!
//! let chunks = vec![
//!     "The Krebs cycle oxidizes acetyl-CoA to carbon dioxide.".to_string(),
//!     "Glycolysis splits glucose into two molecules of pyruvate.".to_string(),
//! ];
//!
//! let index = LexicalIndex::build(chunks, &IndexConfig::default());
//! let hits = index.search("glucose", 3);
//! assert!(hits[0].text.contains("Glycolysis"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Document → TextChunker → chunks → LexicalIndex::build → snapshot
//!                                                            ↓
//!                               query → search → Vec<ScoredChunk>
//! ```
//!
//! An index is an immutable snapshot of one chunk set. A new document upload
//! means a full rebuild; callers swap the whole index value rather than
//! mutating one in place, so searches already in flight keep a consistent
//! view.

pub mod retrieval;

pub use retrieval::lexical_index::{IndexConfig, LexicalIndex, ScoredChunk};
