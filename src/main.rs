use anyhow::Result;
use clap::Parser;
use decant::{DecantConfig, run};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract plain text from a PDF file", long_about = None)]
struct Args {
    /// PDF file to extract text from
    input: Option<PathBuf>,

    /// Output text file path (default: input name with .txt extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load from file or default
    let mut config = DecantConfig::load_from_file().unwrap_or_default();

    // 2. Override with CLI args
    if let Some(input) = args.input {
        config.input = input;
    }
    if let Some(output) = args.output {
        config.output = Some(output);
    }
    if args.verbose {
        config.verbose = true;
    }

    let summary = run(&config)?;
    println!("{}", summary);

    Ok(())
}
