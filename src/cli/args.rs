//! Command line argument parsing for the boolex CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// boolex - boolean retrieval over a directory of text documents
#[derive(Parser, Debug, Clone)]
#[command(name = "boolex")]
#[command(about = "Build, query and analyze a boolean inverted index")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BoolexArgs {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BoolexArgs {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2=verbose, 3+=debug).
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build an index from a corpus directory and save it
    Build(BuildArgs),

    /// Run boolean queries against a saved index
    Search(SearchArgs),

    /// Write a Zipf term-frequency report for a corpus
    Zipf(ZipfArgs),

    /// Show statistics of a saved index
    Stats(StatsArgs),
}

/// Arguments for building an index
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Directory with the corpus documents
    #[arg(value_name = "CORPUS_DIR")]
    pub corpus_dir: PathBuf,

    /// Output index file
    #[arg(value_name = "INDEX_PATH")]
    pub index_path: PathBuf,

    /// Sort files by name before assigning document ids
    #[arg(long)]
    pub sort_files: bool,

    /// Extract terms on a thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Worker threads for --parallel (default: one per CPU)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Index file written by `boolex build`
    #[arg(value_name = "INDEX_PATH")]
    pub index_path: PathBuf,

    /// Query words; without them queries are read from stdin
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Number of document ids to print per query
    #[arg(short = 'n', long, value_name = "N")]
    pub max_displayed: Option<usize>,
}

impl SearchArgs {
    /// The query given on the command line, words joined by spaces.
    pub fn query_string(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}

/// Arguments for the Zipf report
#[derive(Parser, Debug, Clone)]
pub struct ZipfArgs {
    /// Directory with the corpus documents
    #[arg(value_name = "CORPUS_DIR")]
    pub corpus_dir: PathBuf,

    /// Output CSV file
    #[arg(value_name = "OUTPUT_CSV")]
    pub output: PathBuf,

    /// Number of most frequent terms to print
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Index file written by `boolex build`
    #[arg(value_name = "INDEX_PATH")]
    pub index_path: PathBuf,

    /// Also list every term in the index
    #[arg(long)]
    pub words: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    #[default]
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args() {
        let args = BoolexArgs::try_parse_from([
            "boolex",
            "build",
            "corpus",
            "out/index.txt",
            "--sort-files",
            "--parallel",
            "-j",
            "4",
        ])
        .unwrap();

        if let Command::Build(build) = args.command {
            assert_eq!(build.corpus_dir, PathBuf::from("corpus"));
            assert_eq!(build.index_path, PathBuf::from("out/index.txt"));
            assert!(build.sort_files);
            assert!(build.parallel);
            assert_eq!(build.threads, Some(4));
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_build_requires_both_paths() {
        assert!(BoolexArgs::try_parse_from(["boolex", "build", "corpus"]).is_err());
        assert!(BoolexArgs::try_parse_from(["boolex", "build"]).is_err());
        assert!(BoolexArgs::try_parse_from(["boolex"]).is_err());
    }

    #[test]
    fn test_search_query_words_are_joined() {
        let args =
            BoolexArgs::try_parse_from(["boolex", "search", "index.txt", "cat", "AND", "dog"])
                .unwrap();

        if let Command::Search(search) = args.command {
            assert_eq!(search.query_string().as_deref(), Some("cat AND dog"));
            assert_eq!(search.max_displayed, None);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_search_without_query_is_interactive() {
        let args = BoolexArgs::try_parse_from(["boolex", "search", "index.txt"]).unwrap();

        if let Command::Search(search) = args.command {
            assert_eq!(search.query_string(), None);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_zipf_args() {
        let args = BoolexArgs::try_parse_from(["boolex", "zipf", "corpus", "zipf.csv"]).unwrap();
        if let Command::Zipf(zipf) = args.command {
            assert_eq!(zipf.top, 10);
            assert_eq!(zipf.output, PathBuf::from("zipf.csv"));
        } else {
            panic!("Expected Zipf command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = BoolexArgs::try_parse_from(["boolex", "stats", "index.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = BoolexArgs::try_parse_from(["boolex", "-vv", "stats", "index.txt"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = BoolexArgs::try_parse_from(["boolex", "stats", "index.txt", "-q"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_global_options() {
        let args = BoolexArgs::try_parse_from([
            "boolex",
            "--format",
            "json",
            "--config",
            "boolex.json",
            "stats",
            "index.txt",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.config, Some(PathBuf::from("boolex.json")));
    }
}
