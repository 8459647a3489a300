use anyhow::Result;
use clap::Parser;
use search_cli::{run, OutputFormat};
use std::fs::File;
use std::io::{self, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search-cli")]
#[command(about = "Rank documents against a single query with TF-IDF", long_about = None)]
struct Args {
    /// Read the document batch and query from a file instead of stdin
    #[arg(long)]
    input: Option<String>,
    /// Emit one JSON object per result instead of the plain record format
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();
    match args.input {
        Some(path) => {
            let mut reader = BufReader::new(File::open(&path)?);
            run(&mut reader, &mut output, format)
        }
        None => {
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            run(&mut reader, &mut output, format)
        }
    }
}
