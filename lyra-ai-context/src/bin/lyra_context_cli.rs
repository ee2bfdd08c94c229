use clap::Parser;
use lyra_ai_context::text::{DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP, TextChunker};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};

/// A CLI tool to chunk course-material text files into JSON output using
/// lyra-ai-context.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input text file. If not provided, reads from stdin.
    #[arg(short, long)]
    input: Option<String>,

    /// Target size for each chunk, in characters.
    #[arg(short, long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Number of characters carried from each chunk into its successor.
    #[arg(short, long, default_value_t = DEFAULT_OVERLAP)]
    overlap: usize,

    /// Force sentence-granularity chunking instead of paragraph-first.
    #[arg(long)]
    sentences: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let file_content = if let Some(input_path) = args.input {
        fs::read_to_string(input_path)?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let chunker = TextChunker::new(args.chunk_size, args.overlap);
    let chunks = if args.sentences {
        chunker.chunk_by_sentences(&file_content)
    } else {
        chunker.chunk(&file_content)
    };

    #[derive(Serialize)]
    struct SerializableChunk<'a> {
        sequence: usize,
        chars: usize,
        text: &'a str,
    }

    let serializable_chunks: Vec<SerializableChunk> = chunks
        .iter()
        .enumerate()
        .map(|(sequence, text)| SerializableChunk {
            sequence,
            chars: text.chars().count(),
            text,
        })
        .collect();

    let json_output = serde_json::to_string_pretty(&serializable_chunks)?;
    println!("{}", json_output);

    Ok(())
}
