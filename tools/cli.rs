use clap::Parser;
use tmscan::{Engine, EngineOptions};

/// Runs a single scan and prints the match as JSON
#[derive(Parser, Debug)]
#[command(name = "tmscan-cli")]
struct Args {
    /// A pattern, in priority order. Can be repeated.
    #[arg(short, long = "pattern", required = true)]
    patterns: Vec<String>,

    /// Byte offset to start searching from
    #[arg(long, default_value_t = 0)]
    position: usize,

    /// Ignore patterns that fail to compile or to run
    #[arg(long)]
    forgiving: bool,

    /// The text to search in
    text: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let engine = Engine::new(EngineOptions::default().forgiving(args.forgiving));
    let scanner = engine.create_scanner(args.patterns)?;
    let buffer = engine.create_buffer(args.text);

    let found = scanner.find_next_match(&buffer, args.position)?;
    println!("{}", serde_json::to_string_pretty(&found)?);

    Ok(())
}
