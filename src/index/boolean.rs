//! In-memory boolean inverted index.
//!
//! The index maps every stemmed term to the set of documents that contain
//! it at least once. Term frequencies and positions are not kept.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use log::{debug, info, warn};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::analysis::token_filter::stem::{Stemmer, SuffixStemmer};
use crate::error::{BoolexError, Result};
use crate::index::DocId;
use crate::index::config::IndexConfig;
use crate::index::corpus;
use crate::index::io::{self, LoadReport};

/// Statistics about an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of distinct terms.
    pub total_words: usize,
    /// Number of distinct document ids ever added.
    pub total_documents: usize,
    /// Number of (term, document) pairs across all posting lists.
    pub total_postings: usize,
}

/// A corpus file that could not be indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedDocument {
    /// The id that was assigned to the file.
    pub doc_id: DocId,
    /// Path of the file.
    pub path: PathBuf,
    /// Description of the failure.
    pub error: String,
}

/// Outcome of [`BooleanIndex::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Number of files found in the corpus directory.
    pub files: usize,
    /// Number of documents added to the index.
    pub indexed: usize,
    /// Number of empty files (their ids are consumed but not indexed).
    pub empty: usize,
    /// Files that could not be read or analyzed.
    pub failed: Vec<FailedDocument>,
}

/// Terms extracted from one corpus file.
enum Extracted {
    Terms(AHashSet<String>),
    Empty,
    Failed(BoolexError),
}

/// A boolean inverted index from stemmed terms to document ids.
///
/// # Examples
///
/// ```
/// use boolex::index::BooleanIndex;
///
/// let mut index = BooleanIndex::new();
/// index.add_document(1, "cat dog").unwrap();
/// index.add_document(2, "dog bird").unwrap();
/// index.add_document(3, "cat bird").unwrap();
///
/// assert_eq!(index.get_documents("dog"), vec![1, 2]);
/// assert_eq!(index.get_documents("fish"), Vec::<u32>::new());
/// ```
pub struct BooleanIndex {
    /// Term → documents containing it.
    postings: AHashMap<String, AHashSet<DocId>>,

    /// Every document id that has been added.
    document_ids: AHashSet<DocId>,

    /// Analyzer used for document text.
    analyzer: Arc<dyn Analyzer>,

    /// Stemmer applied to lookup words; the one inside `analyzer`.
    stemmer: Arc<dyn Stemmer>,

    config: IndexConfig,
}

impl std::fmt::Debug for BooleanIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BooleanIndex")
            .field("terms", &self.postings.len())
            .field("documents", &self.document_ids.len())
            .field("analyzer", &self.analyzer.name())
            .field("stemmer", &self.stemmer.name())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for BooleanIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl BooleanIndex {
    /// Create an empty index with the default configuration and stemmer.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Create an empty index with the given configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        Self::with_stemmer(config, Arc::new(SuffixStemmer::new()))
    }

    /// Create an empty index that stems both documents and lookups with
    /// `stemmer`.
    pub fn with_stemmer(config: IndexConfig, stemmer: Arc<dyn Stemmer>) -> Self {
        BooleanIndex {
            postings: AHashMap::new(),
            document_ids: AHashSet::new(),
            analyzer: Arc::new(StandardAnalyzer::with_stemmer(stemmer.clone())),
            stemmer,
            config,
        }
    }

    /// The configuration of this index.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Remove every term and document.
    pub fn clear(&mut self) {
        self.postings.clear();
        self.document_ids.clear();
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// True when the index holds no terms.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Whether `doc_id` has been added.
    pub fn contains_document(&self, doc_id: DocId) -> bool {
        self.document_ids.contains(&doc_id)
    }

    /// All document ids, ascending.
    pub fn document_ids(&self) -> Vec<DocId> {
        let mut ids: Vec<DocId> = self.document_ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Build the index from every file in `corpus_dir`.
    ///
    /// Prior state is discarded first. Files get ids `1..=N` in listing
    /// order (sorted by name if [`IndexConfig::sort_files`] is set). Empty
    /// files consume an id without being indexed; unreadable files are
    /// logged, recorded in the report and skipped.
    pub fn build<P: AsRef<Path>>(&mut self, corpus_dir: P) -> Result<BuildReport> {
        let corpus_dir = corpus_dir.as_ref();
        self.clear();

        let files = corpus::list_files(corpus_dir, self.config.sort_files)?;
        info!(
            "Building index from {} documents in {}",
            files.len(),
            corpus_dir.display()
        );

        let mut report = BuildReport {
            files: files.len(),
            ..BuildReport::default()
        };

        if self.config.parallel {
            let extracted = self.extract_parallel(&files)?;
            for (position, (path, outcome)) in files.iter().zip(extracted).enumerate() {
                self.merge(to_doc_id(position)?, path, outcome, &mut report);
            }
        } else {
            for (position, path) in files.iter().enumerate() {
                let outcome = self.extract(path);
                self.merge(to_doc_id(position)?, path, outcome, &mut report);
            }
        }

        info!(
            "Index built: {} documents indexed, {} distinct terms",
            report.indexed,
            self.postings.len()
        );

        Ok(report)
    }

    /// Add the terms of `content` under `doc_id`.
    ///
    /// Re-adding a document with the same content changes nothing. Document
    /// ids must be positive.
    pub fn add_document(&mut self, doc_id: DocId, content: &str) -> Result<()> {
        if doc_id == 0 {
            return Err(BoolexError::invalid_argument(
                "document ids start at 1",
            ));
        }
        let terms = self.unique_terms(content)?;
        self.insert_terms(doc_id, terms);
        Ok(())
    }

    /// Documents containing the stem of `word`, ascending.
    ///
    /// `word` is stemmed but not case-folded or stripped, so lookups see the
    /// word exactly as the caller wrote it. Unknown words yield an empty list.
    pub fn get_documents(&self, word: &str) -> Vec<DocId> {
        let term = self.stemmer.stem(word);
        let mut doc_ids: Vec<DocId> = match self.postings.get(&term) {
            Some(docs) => docs.iter().copied().collect(),
            None => Vec::new(),
        };
        doc_ids.sort_unstable();
        doc_ids
    }

    /// Index statistics.
    pub fn get_stats(&self) -> IndexStats {
        IndexStats {
            total_words: self.postings.len(),
            total_documents: self.document_ids.len(),
            total_postings: self.postings.values().map(|docs| docs.len()).sum(),
        }
    }

    /// Every term in the index, in no particular order.
    pub fn get_all_words(&self) -> Vec<String> {
        self.postings.keys().cloned().collect()
    }

    /// Write the index to `path` in the tab-separated text format.
    ///
    /// The file is written beside `path` and renamed over it once complete,
    /// so an existing index is either fully replaced or left untouched. The
    /// in-memory index is never modified, even when writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut writer = BufWriter::new(NamedTempFile::new_in(dir)?);

        let mut terms: Vec<&String> = self.postings.keys().collect();
        terms.sort_unstable();

        io::write_postings(
            &mut writer,
            terms.into_iter().map(|term| {
                let mut doc_ids: Vec<DocId> = self.postings[term].iter().copied().collect();
                doc_ids.sort_unstable();
                (term.as_str(), doc_ids)
            }),
        )?;

        let temp = writer.into_inner().map_err(|e| e.into_error())?;
        temp.persist(path).map_err(|e| e.error)?;

        debug!("Saved {} terms to {}", self.postings.len(), path.display());
        Ok(())
    }

    /// Replace the index with the contents of `path`.
    ///
    /// The index is cleared before the file is opened, so a file that
    /// cannot be opened leaves an empty index behind. Malformed lines are
    /// skipped and listed in the returned report.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport> {
        let path = path.as_ref();
        self.clear();

        let reader = BufReader::new(File::open(path)?);
        let postings = &mut self.postings;
        let document_ids = &mut self.document_ids;

        let report = io::read_postings(reader, |term, doc_ids| {
            document_ids.extend(doc_ids.iter().copied());
            postings.entry(term).or_default().extend(doc_ids);
        });

        let report = match report {
            Ok(report) => report,
            Err(e) => {
                self.clear();
                return Err(e);
            }
        };

        for skipped in &report.skipped {
            warn!(
                "{}:{}: skipped line ({})",
                path.display(),
                skipped.line_number,
                skipped.reason
            );
        }
        info!(
            "Loaded {} terms for {} documents from {}",
            self.postings.len(),
            self.document_ids.len(),
            path.display()
        );

        Ok(report)
    }

    fn unique_terms(&self, content: &str) -> Result<AHashSet<String>> {
        Ok(self
            .analyzer
            .analyze(content)?
            .map(|token| token.text)
            .filter(|term| !term.is_empty())
            .collect())
    }

    fn insert_terms(&mut self, doc_id: DocId, terms: AHashSet<String>) {
        for term in terms {
            self.postings.entry(term).or_default().insert(doc_id);
        }
        self.document_ids.insert(doc_id);
    }

    fn extract(&self, path: &Path) -> Extracted {
        let content = match corpus::read_document(path) {
            Ok(content) => content,
            Err(e) => return Extracted::Failed(e),
        };
        if content.is_empty() {
            return Extracted::Empty;
        }
        match self.unique_terms(&content) {
            Ok(terms) => Extracted::Terms(terms),
            Err(e) => Extracted::Failed(e),
        }
    }

    fn extract_parallel(&self, files: &[PathBuf]) -> Result<Vec<Extracted>> {
        let threads = self.config.effective_threads();
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("boolex-index-{i}"))
            .build()
            .map_err(|e| BoolexError::internal(format!("Failed to create thread pool: {e}")))?;

        debug!("Extracting terms on {threads} threads");
        Ok(pool.install(|| files.par_iter().map(|path| self.extract(path)).collect()))
    }

    fn merge(&mut self, doc_id: DocId, path: &Path, outcome: Extracted, report: &mut BuildReport) {
        match outcome {
            Extracted::Terms(terms) => {
                debug!("Document {doc_id} ({}): {} terms", path.display(), terms.len());
                self.insert_terms(doc_id, terms);
                report.indexed += 1;
            }
            Extracted::Empty => {
                debug!("Document {doc_id} ({}) is empty", path.display());
                report.empty += 1;
            }
            Extracted::Failed(e) => {
                warn!("Skipping document {doc_id} ({}): {e}", path.display());
                report.failed.push(FailedDocument {
                    doc_id,
                    path: path.to_path_buf(),
                    error: e.to_string(),
                });
            }
        }

        let interval = self.config.progress_interval;
        if interval > 0 && doc_id as usize % interval == 0 {
            info!("Indexed documents: {doc_id}");
        }
    }
}

fn to_doc_id(position: usize) -> Result<DocId> {
    DocId::try_from(position + 1)
        .map_err(|_| BoolexError::index(format!("too many documents: {}", position + 1)))
}
