//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{BoolexArgs, OutputFormat};
use crate::error::Result;
use crate::index::{BuildReport, DocId, IndexStats, LoadReport};
use crate::report::WordFrequency;

/// Results that can be printed for humans as well as serialized to JSON.
pub trait HumanReadable {
    /// Render the result as plain text, one line per fact.
    fn to_human(&self) -> String;
}

/// Result of `boolex build`.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildSummary {
    pub corpus_dir: String,
    pub index_path: String,
    pub stats: IndexStats,
    pub report: BuildReport,
    pub duration_ms: u64,
}

/// Result of one query.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub total_hits: usize,
    pub doc_ids: Vec<DocId>,
    pub duration_ms: u64,
    /// Ids printed in human output before eliding the rest.
    #[serde(skip)]
    pub max_displayed: usize,
}

/// Result of loading an index for `stats` and `search`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsSummary {
    pub index_path: String,
    pub stats: IndexStats,
    pub load: LoadReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
}

/// Result of `boolex zipf`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ZipfSummary {
    pub corpus_dir: String,
    pub output_path: String,
    pub unique_words: usize,
    pub top: Vec<WordFrequency>,
}

impl HumanReadable for BuildSummary {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Index built from: {}", self.corpus_dir);
        write_stats(&mut out, &self.stats);
        if self.report.empty > 0 {
            let _ = writeln!(out, "  Empty files: {}", self.report.empty);
        }
        if !self.report.failed.is_empty() {
            let _ = writeln!(out, "  Failed files: {}", self.report.failed.len());
            for failed in &self.report.failed {
                let _ = writeln!(out, "    {}: {}", failed.path.display(), failed.error);
            }
        }
        let _ = writeln!(out, "  Saved to: {}", self.index_path);
        let _ = writeln!(out, "  Time: {} ms", self.duration_ms);
        out
    }
}

impl HumanReadable for SearchResults {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Found {} documents", self.total_hits);

        if self.doc_ids.is_empty() {
            let _ = writeln!(out, "No documents found.");
            return out;
        }

        let shown = self.max_displayed.min(self.doc_ids.len());
        let ids = self.doc_ids[..shown]
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "First {shown} results:");
        let _ = writeln!(out, "{ids}");
        if self.doc_ids.len() > shown {
            let _ = writeln!(out, "... ({} results total)", self.doc_ids.len());
        }
        out
    }
}

impl HumanReadable for StatsSummary {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Index loaded from: {}", self.index_path);
        write_stats(&mut out, &self.stats);
        if !self.load.is_clean() {
            let _ = writeln!(out, "  Skipped lines: {}", self.load.skipped.len());
        }
        if let Some(words) = &self.words {
            let _ = writeln!(out, "Words:");
            for word in words {
                let _ = writeln!(out, "  {word}");
            }
        }
        out
    }
}

impl HumanReadable for ZipfSummary {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Top {} most frequent words:", self.top.len());
        for row in &self.top {
            let _ = writeln!(
                out,
                "  {}. {} (frequency: {}, rank: {}, zipf: {})",
                row.rank, row.word, row.frequency, row.rank, row.zipf_value
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Unique words: {}", self.unique_words);
        let _ = writeln!(out, "Results saved to: {}", self.output_path);
        out
    }
}

fn write_stats(out: &mut String, stats: &IndexStats) {
    let _ = writeln!(out, "  Unique words: {}", stats.total_words);
    let _ = writeln!(out, "  Documents: {}", stats.total_documents);
    let _ = writeln!(out, "  Total postings: {}", stats.total_postings);
}

/// Render a result in the requested format.
pub fn render<T>(result: &T, format: OutputFormat, pretty: bool) -> Result<String>
where
    T: Serialize + HumanReadable,
{
    match format {
        OutputFormat::Human => Ok(result.to_human()),
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(result)? + "\n"),
        OutputFormat::Json => Ok(serde_json::to_string(result)? + "\n"),
    }
}

/// Print a result to stdout in the format selected on the command line.
pub fn output_result<T>(result: &T, args: &BoolexArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    print!("{}", render(result, args.output_format, args.pretty)?);
    Ok(())
}
