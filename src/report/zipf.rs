//! Term-frequency report for checking Zipf's law on a corpus.
//!
//! Counts every stemmed term over the whole corpus (term frequency, not
//! document frequency), ranks terms by descending count and writes
//! `rank,frequency,word,zipf_value` rows where `zipf_value = frequency * rank`.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::Result;
use crate::index::corpus;

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordFrequency {
    /// 1-based rank after sorting by descending frequency.
    pub rank: usize,
    /// Occurrences of the term across the corpus.
    pub frequency: u64,
    /// The stemmed term.
    pub word: String,
    /// `frequency * rank`.
    pub zipf_value: f64,
}

/// Ranked term frequencies of a corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZipfReport {
    /// Rows ordered by rank.
    pub frequencies: Vec<WordFrequency>,
}

impl ZipfReport {
    /// Count the terms of every file in `corpus_dir` with the standard
    /// analyzer. Unreadable files are logged and skipped.
    pub fn analyze_corpus<P: AsRef<Path>>(corpus_dir: P) -> Result<Self> {
        Self::analyze_corpus_with(corpus_dir, Arc::new(StandardAnalyzer::new()))
    }

    /// Like [`analyze_corpus`](Self::analyze_corpus) with a custom analyzer.
    pub fn analyze_corpus_with<P: AsRef<Path>>(
        corpus_dir: P,
        analyzer: Arc<dyn Analyzer>,
    ) -> Result<Self> {
        let files = corpus::list_files(corpus_dir.as_ref(), false)?;
        info!("Analyzing {} files", files.len());

        let mut totals: AHashMap<String, u64> = AHashMap::new();
        for (position, path) in files.iter().enumerate() {
            let content = match corpus::read_document(path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping {}: {e}", path.display());
                    continue;
                }
            };
            for (term, count) in count_terms(analyzer.as_ref(), &content)? {
                *totals.entry(term).or_insert(0) += count;
            }
            if (position + 1) % 100 == 0 {
                info!("Processed files: {}", position + 1);
            }
        }

        Ok(Self::from_counts(totals))
    }

    /// Rank raw term counts.
    ///
    /// Ties are broken by term so the report is reproducible.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut pairs: Vec<(String, u64)> = counts.into_iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let frequencies = pairs
            .into_iter()
            .enumerate()
            .map(|(position, (word, frequency))| {
                let rank = position + 1;
                WordFrequency {
                    rank,
                    frequency,
                    word,
                    zipf_value: frequency as f64 * rank as f64,
                }
            })
            .collect();

        ZipfReport { frequencies }
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// True when the corpus had no terms.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// The `n` most frequent terms.
    pub fn top(&self, n: usize) -> &[WordFrequency] {
        &self.frequencies[..n.min(self.frequencies.len())]
    }

    /// Write the report as CSV to `path`.
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }

    /// Write the report as CSV, header first.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        if self.frequencies.is_empty() {
            csv_writer.write_record(["rank", "frequency", "word", "zipf_value"])?;
        }
        for row in &self.frequencies {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Count every analyzed term of `text`.
pub fn count_terms(analyzer: &dyn Analyzer, text: &str) -> Result<AHashMap<String, u64>> {
    let mut counts = AHashMap::new();
    for token in analyzer.analyze(text)? {
        *counts.entry(token.text).or_insert(0) += 1;
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_count_terms() {
        let analyzer = StandardAnalyzer::new();
        let counts = count_terms(&analyzer, "Cats, cat and CAT; dogs.").unwrap();

        assert_eq!(counts.get("cat"), Some(&3));
        assert_eq!(counts.get("dog"), Some(&1));
        assert_eq!(counts.get("and"), Some(&1));
    }

    #[test]
    fn test_ranking() {
        let report = ZipfReport::from_counts(vec![
            ("b".to_string(), 2),
            ("a".to_string(), 5),
            ("c".to_string(), 2),
        ]);

        let words: Vec<_> = report.frequencies.iter().map(|f| f.word.as_str()).collect();
        assert_eq!(words, vec!["a", "b", "c"]);
        assert_eq!(report.frequencies[0].rank, 1);
        assert_eq!(report.frequencies[0].zipf_value, 5.0);
        assert_eq!(report.frequencies[2].rank, 3);
        assert_eq!(report.frequencies[2].zipf_value, 6.0);
        assert_eq!(report.top(2).len(), 2);
        assert_eq!(report.top(10).len(), 3);
    }

    #[test]
    fn test_write_csv() {
        let report = ZipfReport::from_counts(vec![("cat".to_string(), 3), ("dog".to_string(), 1)]);
        let mut buffer = Vec::new();
        report.write_csv(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "rank,frequency,word,zipf_value");
        assert_eq!(lines[1], "1,3,cat,3.0");
        assert_eq!(lines[2], "2,1,dog,2.0");
    }

    #[test]
    fn test_write_csv_empty_report_has_header() {
        let mut buffer = Vec::new();
        ZipfReport::default().write_csv(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "rank,frequency,word,zipf_value\n");
    }

    #[test]
    fn test_analyze_corpus() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "the cat and the dog").unwrap();
        fs::write(dir.path().join("b.txt"), "The cats").unwrap();

        let report = ZipfReport::analyze_corpus(dir.path()).unwrap();

        assert_eq!(report.frequencies[0].word, "the");
        assert_eq!(report.frequencies[0].frequency, 3);
        assert_eq!(report.frequencies[1].word, "cat");
        assert_eq!(report.frequencies[1].frequency, 2);
        assert_eq!(report.len(), 4);
    }
}
