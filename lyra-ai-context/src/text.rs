//! This module provides utilities for splitting raw course text into
//! overlapping passages suitable for retrieval.
//!
//! Uploaded course material arrives as one decoded string, often tens of
//! thousands of characters long. Retrieval works much better over passages of
//! roughly uniform size, so the text is cut into chunks of at most a target
//! character count. Two properties matter for study material:
//!
//! - A chunk never ends in the middle of a sentence. The size bound controls
//!   when a split is *triggered*, not where the text is cut: a single
//!   paragraph or sentence longer than the bound passes through whole rather
//!   than being truncated.
//! - Consecutive chunks overlap. Each chunk after the first is seeded with
//!   the tail of its predecessor, so a concept that straddles a chunk
//!   boundary remains retrievable from either side.
//!
//! The primary strategy accumulates paragraphs (blank-line separated blocks).
//! When a document has no usable paragraph structure, the same accumulation
//! runs again at sentence granularity, using a punctuation heuristic to find
//! sentence ends.
//!
//! # Usage
//!
//! ```
//! use lyra_ai_context::TextChunker;
//!
//! let chunker = TextChunker::new(120, 20);
//! let text = "The mitochondria is the membrane-bound organelle that \
//!             generates most of the cell's ATP.\n\n\
//!             Photosynthesis, by contrast, takes place in the chloroplast \
//!             and converts light energy into chemical energy.\n\n\
//!             Both organelles are believed to have endosymbiotic origins.";
//!
//! let chunks = chunker.chunk(text);
//! assert!(chunks.len() > 1);
//!
//! // Every chunk after the first starts with the tail of its predecessor.
//! for pair in chunks.windows(2) {
//!     let tail: String = pair[0].chars().rev().take(5).collect::<Vec<_>>()
//!         .into_iter().rev().collect();
//!     assert!(pair[1].contains(&tail));
//! }
//! ```
//!
//! Chunking is a pure function of `(text, chunk_size, overlap)`: no
//! randomness, no external state, safe to call concurrently.
use regex::Regex;

/// Default chunk size in characters. Splits are triggered once the running
/// buffer would exceed this, so individual chunks may run slightly over.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default overlap in characters carried from each chunk into its successor.
pub const DEFAULT_OVERLAP: usize = 200;

/// Sentence boundary heuristic: terminal punctuation followed by whitespace.
/// The punctuation stays with the sentence it ends.
const SENTENCE_BOUNDARY_PATTERN: &str = r"[.!?]\s+";

/// Splits raw text into overlapping passages.
///
/// The chunker owns its configuration (target size and overlap, both in
/// characters) plus the compiled sentence-boundary pattern used by the
/// fallback strategy. Construct once and reuse; [`TextChunker::chunk`] takes
/// only the text.
pub struct TextChunker {
    chunk_size: usize,
    overlap: usize,
    sentence_boundary: Regex,
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP)
    }
}

impl TextChunker {
    /// Creates a new `TextChunker` with the given target size and overlap,
    /// both counted in characters.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero. A zero-size chunk bound is a contract
    /// violation, not a degenerate input, and fails fast.
    ///
    /// # Examples
    ///
    /// ```
    /// use lyra_ai_context::TextChunker;
    ///
    /// let chunker = TextChunker::new(1000, 200);
    /// assert!(chunker.chunk("").is_empty());
    /// ```
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be positive");
        TextChunker {
            chunk_size,
            overlap,
            sentence_boundary: Regex::new(SENTENCE_BOUNDARY_PATTERN)
                .expect("sentence boundary pattern is valid"),
        }
    }

    /// Splits `text` into overlapping chunks.
    ///
    /// Paragraphs (blank-line separated blocks) are accumulated into a
    /// running buffer. When appending the next paragraph would push the
    /// buffer past the configured chunk size, the buffer is closed (trimmed)
    /// and a new one starts, seeded with the last `overlap` characters of
    /// the buffer just closed followed by the paragraph that triggered the
    /// split. The final buffer is flushed after all paragraphs are consumed.
    ///
    /// If paragraph splitting degenerates — no chunks at all, or a single
    /// oversized chunk because the text has no blank lines to exploit — the
    /// original text is re-split at sentence granularity instead via
    /// [`chunk_by_sentences`](Self::chunk_by_sentences).
    ///
    /// # Arguments
    ///
    /// *   `text` - The raw document text, already decoded to a string.
    ///
    /// # Returns
    ///
    /// An ordered `Vec<String>` of chunks. Empty input yields an empty vec;
    /// all other inputs yield at least one chunk. A chunk is only larger
    /// than the configured size when a single paragraph or sentence is
    /// itself oversized — units are never cut in half.
    ///
    /// # Examples
    ///
    /// ```
    /// use lyra_ai_context::TextChunker;
    ///
    /// let chunker = TextChunker::default();
    /// let chunks = chunker.chunk("First paragraph.\n\nSecond paragraph.");
    /// assert_eq!(chunks, vec!["First paragraph.\n\nSecond paragraph."]);
    /// ```
    pub fn chunk(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let chunks = self.accumulate(text.split("\n\n"), "\n\n");

        // Paragraph splitting degenerated: nothing usable came out, or the
        // whole document collapsed into one oversized chunk with no blank
        // lines to exploit. Retry the original text at sentence granularity.
        if chunks.is_empty()
            || (chunks.len() == 1 && chunks[0].chars().count() > self.chunk_size)
        {
            return self.chunk_by_sentences(text);
        }

        chunks
    }

    /// Fallback strategy: splits `text` into sentences and applies the same
    /// accumulate/overlap/flush logic at sentence granularity.
    ///
    /// Sentence ends are found with a punctuation heuristic — a `.`, `!`, or
    /// `?` followed by whitespace — and sentences are rejoined with single
    /// spaces. A sentence longer than the chunk size passes through whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use lyra_ai_context::TextChunker;
    ///
    /// let chunker = TextChunker::new(5, 0);
    /// let chunks = chunker.chunk_by_sentences("A. B. C.");
    /// assert_eq!(chunks, vec!["A. B.", "C."]);
    /// ```
    pub fn chunk_by_sentences(&self, text: &str) -> Vec<String> {
        self.accumulate(self.split_sentences(text).into_iter(), " ")
    }

    // Shared accumulation loop for both granularities. Units are appended to
    // a running buffer joined by `separator`; when the next unit would push
    // the buffer past the chunk size, the buffer is flushed (trimmed) and
    // the next buffer starts with the tail of the one just flushed. The tail
    // is taken from the pre-trim buffer, so overlap regions can themselves
    // contain part of an earlier overlap seed.
    fn accumulate<'a, I>(&self, units: I, separator: &str) -> Vec<String>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut chunks: Vec<String> = Vec::new();
        let mut current = String::new();

        for unit in units {
            let would_overflow =
                current.chars().count() + unit.chars().count() > self.chunk_size;

            if would_overflow && !current.is_empty() {
                let seed = tail_chars(&current, self.overlap).to_string();
                chunks.push(current.trim().to_string());
                current = format!("{seed}{separator}{unit}");
            } else if current.is_empty() {
                current = unit.to_string();
            } else {
                current.push_str(separator);
                current.push_str(unit);
            }
        }

        if !current.is_empty() {
            chunks.push(current.trim().to_string());
        }

        chunks
    }

    // Splits text at sentence boundaries, keeping the terminal punctuation
    // with the sentence it ends and discarding the inter-sentence whitespace.
    fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut rest_start = 0;

        for mat in self.sentence_boundary.find_iter(text) {
            // The match starts at the punctuation character (one byte), so
            // the sentence ends immediately after it.
            sentences.push(&text[rest_start..mat.start() + 1]);
            rest_start = mat.end();
        }

        if rest_start < text.len() {
            sentences.push(&text[rest_start..]);
        }

        sentences
    }
}

// Last `n` characters of `s`, on a char boundary.
fn tail_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}
