//! Command implementations for the boolex CLI.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, error, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::BoolexConfig;
use crate::index::{BooleanIndex, BuildReport, LoadReport};
use crate::query::{BooleanSearch, parse_query};
use crate::report::ZipfReport;

/// Words that end interactive search.
const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

/// Execute a CLI command.
pub fn execute_command(args: BoolexArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Build(build_args) => build_index(build_args, &config, &args),
        Command::Search(search_args) => search_index(search_args, &config, &args),
        Command::Zipf(zipf_args) => zipf_report(zipf_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Read the configuration file named on the command line, if any.
fn load_config(args: &BoolexArgs) -> Result<BoolexConfig> {
    match &args.config {
        Some(path) => BoolexConfig::from_file(path)
            .with_context(|| format!("Failed to read config {}", path.display())),
        None => Ok(BoolexConfig::default()),
    }
}

/// Build an index from a corpus directory and save it.
fn build_index(args: &BuildArgs, config: &BoolexConfig, cli_args: &BoolexArgs) -> Result<()> {
    let mut index_config = config.index.clone();
    index_config.sort_files |= args.sort_files;
    index_config.parallel |= args.parallel;
    if args.threads.is_some() {
        index_config.threads = args.threads;
    }
    debug!("Index config: {index_config:?}");

    let start_time = Instant::now();
    let mut index = BooleanIndex::with_config(index_config);
    let report = match index.build(&args.corpus_dir) {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to build index from {}: {e}", args.corpus_dir.display());
            BuildReport::default()
        }
    };

    info!("Saving index to {}", args.index_path.display());
    let saved = create_parent_dir(&args.index_path).and_then(|()| {
        index
            .save(&args.index_path)
            .with_context(|| format!("Failed to save index to {}", args.index_path.display()))
    });
    if let Err(e) = saved {
        error!("{e:#}");
    }

    output_result(
        &BuildSummary {
            corpus_dir: args.corpus_dir.display().to_string(),
            index_path: args.index_path.display().to_string(),
            stats: index.get_stats(),
            report,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Create the directory `path` will be written into.
fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

/// Load an index and report what was read.
///
/// An index that cannot be opened is logged and replaced by an empty one.
fn open_index(index_path: &Path, words: bool) -> (BooleanIndex, StatsSummary) {
    let mut index = BooleanIndex::new();
    let load = match index.load(index_path) {
        Ok(load) => load,
        Err(e) => {
            error!("Failed to load index from {}: {e}", index_path.display());
            LoadReport::default()
        }
    };

    let words = words.then(|| {
        let mut words = index.get_all_words();
        words.sort_unstable();
        words
    });

    let summary = StatsSummary {
        index_path: index_path.display().to_string(),
        stats: index.get_stats(),
        load,
        words,
    };
    (index, summary)
}

/// Answer one query from the command line or read queries from stdin.
fn search_index(args: &SearchArgs, config: &BoolexConfig, cli_args: &BoolexArgs) -> Result<()> {
    let (index, summary) = open_index(&args.index_path, false);
    if cli_args.output_format == OutputFormat::Human {
        output_result(&summary, cli_args)?;
        println!();
    }

    let max_displayed = args.max_displayed.unwrap_or(config.search.max_displayed);
    let search = BooleanSearch::new(&index);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.query_string() {
        Some(query) => run_query(&search, &query, max_displayed, cli_args, &mut out)?,
        None => {
            let stdin = io::stdin();
            let answered = interactive(&search, stdin.lock(), &mut out, max_displayed, cli_args)?;
            debug!("Answered {answered} queries");
        }
    }

    Ok(())
}

/// Evaluate one query and write its results.
fn run_query<W: Write>(
    search: &BooleanSearch<'_>,
    query: &str,
    max_displayed: usize,
    cli_args: &BoolexArgs,
    out: &mut W,
) -> Result<()> {
    debug!("Query tokens: {:?}", parse_query(query));

    let start_time = Instant::now();
    let doc_ids = search.search(query);
    let results = SearchResults {
        query: query.to_string(),
        total_hits: doc_ids.len(),
        doc_ids,
        duration_ms: start_time.elapsed().as_millis() as u64,
        max_displayed,
    };

    if cli_args.output_format == OutputFormat::Human {
        writeln!(out, "Query: {query}")?;
    }
    write!(out, "{}", render(&results, cli_args.output_format, cli_args.pretty)?)?;
    out.flush()?;
    Ok(())
}

/// Read queries line by line until end of input or a quit command.
///
/// Returns the number of queries answered. Blank lines are ignored.
pub fn interactive<R, W>(
    search: &BooleanSearch<'_>,
    input: R,
    out: &mut W,
    max_displayed: usize,
    cli_args: &BoolexArgs,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let human = cli_args.output_format == OutputFormat::Human;
    if human {
        writeln!(out, "Enter a query (or 'quit' to exit):")?;
        out.flush()?;
    }

    let mut answered = 0;
    for line in input.lines() {
        let line = line.context("Failed to read query")?;
        let query = line.trim();
        if QUIT_COMMANDS.contains(&query) {
            break;
        }
        if query.is_empty() {
            continue;
        }

        run_query(search, query, max_displayed, cli_args, out)?;
        answered += 1;

        if human {
            writeln!(out)?;
            writeln!(out, "Enter the next query:")?;
            out.flush()?;
        }
    }

    Ok(answered)
}

/// Write the Zipf report of a corpus and print its most frequent terms.
fn zipf_report(args: &ZipfArgs, cli_args: &BoolexArgs) -> Result<()> {
    info!("Analyzing corpus {}", args.corpus_dir.display());
    let report = match ZipfReport::analyze_corpus(&args.corpus_dir) {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to analyze {}: {e}", args.corpus_dir.display());
            ZipfReport::default()
        }
    };

    let written = create_parent_dir(&args.output).and_then(|()| {
        report
            .save_csv(&args.output)
            .with_context(|| format!("Failed to write {}", args.output.display()))
    });
    if let Err(e) = written {
        error!("{e:#}");
    }

    output_result(
        &ZipfSummary {
            corpus_dir: args.corpus_dir.display().to_string(),
            output_path: args.output.display().to_string(),
            unique_words: report.len(),
            top: report.top(args.top).to_vec(),
        },
        cli_args,
    )?;

    Ok(())
}

/// Print statistics of a saved index.
fn show_stats(args: &StatsArgs, cli_args: &BoolexArgs) -> Result<()> {
    let (_, summary) = open_index(&args.index_path, args.words);
    output_result(&summary, cli_args)?;
    Ok(())
}
