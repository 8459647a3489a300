use anyhow::{ensure, Context, Result};
use search_core::{Document, SearchEngine};
use std::io::{BufRead, Write};

/// Output rendering for a result record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `{ document_id = 1, relevance = 0.65, rating = 5 }`
    Plain,
    /// One JSON object per line.
    Json,
}

/// Load an engine from `input` and answer its single query on `output`.
///
/// Input layout: a stop-word line; a document count; per document a text
/// line and a ratings line (count followed by that many integers); finally
/// the query line. A malformed ratings line or a rejected document is
/// logged and skipped, the rest of the batch still loads.
pub fn run(input: &mut impl BufRead, output: &mut impl Write, format: OutputFormat) -> Result<()> {
    let stop_words = read_line(input).context("missing stop-word line")?;
    let mut engine = SearchEngine::with_stop_words(&stop_words);

    let count_line = read_line(input).context("missing document count line")?;
    let document_count: u32 = count_line
        .trim()
        .parse()
        .with_context(|| format!("document count is not a number: {count_line:?}"))?;

    for id in 0..document_count {
        let text =
            read_line(input).with_context(|| format!("missing text line for document {id}"))?;
        let ratings_line = read_line(input)
            .with_context(|| format!("missing ratings line for document {id}"))?;
        let ratings = match parse_ratings(&ratings_line) {
            Ok(ratings) => ratings,
            Err(err) => {
                tracing::warn!(id, %err, "bad ratings line, loading document as unrated");
                Vec::new()
            }
        };
        if let Err(err) = engine.add_document(id, &text, &ratings) {
            tracing::warn!(id, %err, "skipping document");
        }
    }
    tracing::info!(documents = engine.document_count(), "engine loaded");

    let query = read_line(input).context("missing query line")?;
    for document in engine.find_top_documents(&query) {
        write_document(output, &document, format)?;
    }
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    ensure!(read > 0, "unexpected end of input");
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// A ratings line holds a count followed by that many integers. A blank
/// line means no ratings.
fn parse_ratings(line: &str) -> Result<Vec<i32>> {
    let mut numbers = line.split_whitespace();
    let count: usize = match numbers.next() {
        Some(first) => first
            .parse()
            .with_context(|| format!("rating count is not a number: {first:?}"))?,
        None => return Ok(Vec::new()),
    };
    let ratings = numbers
        .map(|n| {
            n.parse::<i32>()
                .with_context(|| format!("rating is not a number: {n:?}"))
        })
        .collect::<Result<Vec<i32>>>()?;
    ensure!(
        ratings.len() == count,
        "expected {count} ratings, found {}",
        ratings.len()
    );
    Ok(ratings)
}

fn write_document(
    output: &mut impl Write,
    document: &Document,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Plain => writeln!(
            output,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            document.id, document.relevance, document.rating
        )?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, document)?;
            writeln!(output)?;
        }
    }
    Ok(())
}
