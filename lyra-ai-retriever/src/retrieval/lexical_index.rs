//! Sparse TF-IDF index over a chunk set, searched by cosine similarity.
//!
//! The vocabulary (term → dimension) and the row-per-chunk weight matrix are
//! built together in one pass and never mutated afterwards. A new document
//! upload triggers a full rebuild from the complete new chunk set; there is
//! no incremental update. Callers treat an index as an immutable snapshot
//! and swap references atomically.

use super::tokenizer;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Configuration for building a [`LexicalIndex`].
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Upper bound on vocabulary size. When the chunk set produces more
    /// distinct terms, the ones appearing in the most chunks are kept.
    pub max_terms: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { max_terms: 1000 }
    }
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms;
        self
    }
}

/// A retrieved chunk paired with its cosine similarity to the query.
///
/// Scores fall in `[0.0, 1.0]` since term weights are non-negative.
/// Non-finite similarities never appear in results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub text: String,
    pub score: f32,
}

/// Sparse term-weighted representation of a fixed chunk set.
///
/// Each chunk becomes an L2-normalized row over a bounded vocabulary of
/// unigrams and bigrams; weights combine within-chunk term frequency with
/// smoothed inverse document frequency, so terms common to many chunks are
/// down-weighted and rare discriminating terms are up-weighted.
pub struct LexicalIndex {
    chunks: Vec<String>,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    rows: Vec<Vec<(usize, f32)>>,
}

impl LexicalIndex {
    /// Builds an index over `chunks`.
    ///
    /// An empty chunk set yields an empty index whose searches return no
    /// results — never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lyra_ai_retriever::retrieval::lexical_index::{IndexConfig, LexicalIndex};
    ///
    /// let index = LexicalIndex::build(Vec::new(), &IndexConfig::default());
    /// assert!(index.is_empty());
    /// assert!(index.search("anything", 3).is_empty());
    /// ```
    pub fn build(chunks: Vec<String>, config: &IndexConfig) -> Self {
        if chunks.is_empty() {
            return Self {
                chunks,
                vocabulary: HashMap::new(),
                idf: Vec::new(),
                rows: Vec::new(),
            };
        }

        let chunk_terms: Vec<Vec<String>> =
            chunks.iter().map(|chunk| tokenizer::terms(chunk)).collect();

        // Document frequency per term, plus the order each term was first
        // encountered. The encounter order makes vocabulary selection and
        // dimension layout independent of hash iteration order.
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        for terms in &chunk_terms {
            let mut seen_in_chunk: HashSet<&str> = HashSet::new();
            for term in terms {
                if seen_in_chunk.insert(term.as_str()) {
                    *document_frequency.entry(term.as_str()).or_insert(0) += 1;
                }
                let next_position = first_seen.len();
                first_seen.entry(term.as_str()).or_insert(next_position);
            }
        }

        // Keep the `max_terms` terms appearing in the most chunks, then lay
        // out dimensions in first-seen order.
        let selected = document_frequency
            .iter()
            .map(|(&term, &df)| (term, df))
            .sorted_by(|a, b| {
                b.1.cmp(&a.1).then_with(|| first_seen[a.0].cmp(&first_seen[b.0]))
            })
            .take(config.max_terms)
            .map(|(term, _)| term)
            .sorted_by_key(|term| first_seen[*term]);

        let chunk_count = chunks.len() as f32;
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut idf: Vec<f32> = Vec::new();
        for term in selected {
            let df = document_frequency[term] as f32;
            idf.push(((1.0 + chunk_count) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert(term.to_string(), vocabulary.len());
        }

        let rows: Vec<Vec<(usize, f32)>> = chunk_terms
            .iter()
            .map(|terms| normalize(weigh(terms, &vocabulary, &idf)))
            .collect();

        tracing::debug!(
            "built lexical index: {} chunks, {} terms",
            chunks.len(),
            vocabulary.len()
        );

        Self {
            chunks,
            vocabulary,
            idf,
            rows,
        }
    }

    /// Ranks chunks by cosine similarity to `query` and returns at most
    /// `top_k` results, best first.
    ///
    /// The query is projected into the vocabulary fixed at build time; terms
    /// unseen then contribute nothing now. A query sharing no vocabulary
    /// with the chunk set — or an empty index — yields an empty vec rather
    /// than NaN-bearing scores. Equal-score chunks keep their original
    /// order, so retrieval is deterministic.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<ScoredChunk> {
        if self.rows.is_empty() {
            return Vec::new();
        }

        let query_vector = normalize(weigh(&tokenizer::terms(query), &self.vocabulary, &self.idf));
        if query_vector.is_empty() {
            return Vec::new();
        }

        self.rows
            .iter()
            .enumerate()
            .map(|(position, row)| (position, sparse_dot(row, &query_vector)))
            .filter(|(_, score)| score.is_finite())
            .sorted_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
            .take(top_k)
            .map(|(position, score)| ScoredChunk {
                text: self.chunks[position].clone(),
                score,
            })
            .collect()
    }

    /// Number of indexed chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Size of the fixed vocabulary.
    pub fn term_count(&self) -> usize {
        self.vocabulary.len()
    }
}

// TF-IDF weights of one term list against a fixed vocabulary. Terms outside
// the vocabulary contribute nothing.
fn weigh(
    terms: &[String],
    vocabulary: &HashMap<String, usize>,
    idf: &[f32],
) -> Vec<(usize, f32)> {
    let mut term_frequency: HashMap<usize, f32> = HashMap::new();
    for term in terms {
        if let Some(&dimension) = vocabulary.get(term.as_str()) {
            *term_frequency.entry(dimension).or_insert(0.0) += 1.0;
        }
    }
    term_frequency
        .into_iter()
        .map(|(dimension, tf)| (dimension, tf * idf[dimension]))
        .collect()
}

// Sorts a sparse vector by dimension and scales it to unit length. A zero
// vector is returned unchanged.
fn normalize(mut vector: Vec<(usize, f32)>) -> Vec<(usize, f32)> {
    vector.sort_unstable_by_key(|&(dimension, _)| dimension);
    let norm = vector.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, weight) in &mut vector {
            *weight /= norm;
        }
    }
    vector
}

// Dot product of two dimension-sorted sparse vectors.
fn sparse_dot(a: &[(usize, f32)], b: &[(usize, f32)]) -> f32 {
    let mut sum = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}
