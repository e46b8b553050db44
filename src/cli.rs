use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use glossary_rs::{DEFAULT_INDEX_TITLE, GlossaryConfig, SiteSummary, generate};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "glossary-rs",
    about = "Turn a term/definition text file into cross-linked HTML pages",
    version
)]
pub struct Cli {
    /// Source file of blank-line separated term/definition blocks.
    input: Option<PathBuf>,

    /// Existing folder that receives the generated pages.
    output_dir: Option<PathBuf>,

    /// Title and heading of the index page.
    #[arg(long, default_value = DEFAULT_INDEX_TITLE)]
    title: String,

    /// Accept a final block that is missing its blank terminator line.
    #[arg(long)]
    lenient_eof: bool,

    /// Emit the run summary as JSON.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdin = io::stdin();
    let mut prompts = stdin.lock();
    let input = match cli.input {
        Some(path) => path,
        None => prompt(&mut prompts, "Enter a text file to convert to a glossary: ")?.into(),
    };
    let output_dir = match cli.output_dir {
        Some(path) => path,
        None => prompt(&mut prompts, "Enter a folder to place the contents created: ")?.into(),
    };

    let config = GlossaryConfig::new(output_dir)
        .with_index_title(cli.title)
        .with_lenient_eof(cli.lenient_eof);
    let summary = generate(&input, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<String, Box<dyn Error>> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{message}")?;
    stdout.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err("no input provided".into());
    }
    let answer = line.trim_end_matches(['\r', '\n']).to_string();
    if answer.is_empty() {
        return Err("path cannot be empty".into());
    }
    Ok(answer)
}

fn print_summary(summary: &SiteSummary) {
    println!(
        "Wrote {} term page{} and index.html to {}",
        summary.terms,
        if summary.terms == 1 { "" } else { "s" },
        summary.output_dir.display()
    );
    if summary.duplicates_dropped > 0 {
        println!(
            "Skipped {} duplicate term block{}",
            summary.duplicates_dropped,
            if summary.duplicates_dropped == 1 { "" } else { "s" }
        );
    }
}
