use anyhow::{Context, Result};
use clap::Parser;
use lyra_ai_context::TextChunker;
use lyra_ai_retriever::retrieval::lexical_index::{IndexConfig, LexicalIndex};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// A CLI tool to chunk a course document, build a lexical index over it, and
/// run a similarity query.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the course-material text file. If not provided, reads stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Query to rank chunks against.
    #[arg(short, long)]
    query: String,

    /// Maximum number of results.
    #[arg(short, long, default_value_t = 3)]
    top_k: usize,

    /// Target chunk size, in characters.
    #[arg(long, default_value_t = 1000)]
    chunk_size: usize,

    /// Overlap carried between consecutive chunks, in characters.
    #[arg(long, default_value_t = 200)]
    overlap: usize,

    /// Upper bound on index vocabulary size.
    #[arg(long, default_value_t = 1000)]
    max_terms: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let content = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let chunker = TextChunker::new(args.chunk_size, args.overlap);
    let chunks = chunker.chunk(&content);
    tracing::debug!("chunked input into {} passages", chunks.len());

    let config = IndexConfig::new().with_max_terms(args.max_terms);
    let index = LexicalIndex::build(chunks, &config);
    let results = index.search(&args.query, args.top_k);

    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
