//! Text serialization of the inverted index.
//!
//! One line per term:
//!
//! ```text
//! <term>\t<id>,<id>,...\n
//! ```
//!
//! Terms are written in lexicographic order and ids ascending. Readers
//! split on the first tab; lines that cannot be parsed are skipped and
//! reported rather than aborting the whole load.

use std::fmt;
use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::index::DocId;

/// Why a line of a persisted index was not loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The line contains no tab between term and ids.
    MissingSeparator,
    /// The term before the tab is empty.
    EmptyTerm,
    /// The line has a term but no ids.
    EmptyPostings,
    /// An id is not a positive integer.
    InvalidDocId(String),
    /// The line is not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingSeparator => write!(f, "missing tab separator"),
            SkipReason::EmptyTerm => write!(f, "empty term"),
            SkipReason::EmptyPostings => write!(f, "no document ids"),
            SkipReason::InvalidDocId(token) => write!(f, "invalid document id '{token}'"),
            SkipReason::InvalidUtf8 => write!(f, "invalid UTF-8"),
        }
    }
}

/// A line that was skipped while reading an index file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number in the file.
    pub line_number: usize,
    /// Why the line was skipped.
    pub reason: SkipReason,
}

/// Outcome of loading an index file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Number of term lines that were loaded.
    pub terms_loaded: usize,
    /// Lines that were skipped, in file order.
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    /// True when every non-empty line was loaded.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Write `(term, sorted ids)` pairs in the index text format.
pub fn write_postings<'a, W, I>(writer: &mut W, postings: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, Vec<DocId>)>,
{
    for (term, doc_ids) in postings {
        let ids = doc_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(writer, "{term}\t{ids}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse one line into a term and its ids.
pub fn parse_line(line: &str) -> std::result::Result<(String, Vec<DocId>), SkipReason> {
    let (term, ids) = line.split_once('\t').ok_or(SkipReason::MissingSeparator)?;
    if term.is_empty() {
        return Err(SkipReason::EmptyTerm);
    }

    let mut doc_ids = Vec::new();
    for token in ids.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<DocId>() {
            Ok(id) if id > 0 => doc_ids.push(id),
            _ => return Err(SkipReason::InvalidDocId(token.to_string())),
        }
    }

    if doc_ids.is_empty() {
        return Err(SkipReason::EmptyPostings);
    }

    Ok((term.to_string(), doc_ids))
}

/// Read every parseable line from `reader`, calling `on_term` for each.
///
/// Empty lines are ignored silently; other malformed lines end up in the
/// returned report. I/O errors abort the read.
pub fn read_postings<R, F>(reader: R, mut on_term: F) -> Result<LoadReport>
where
    R: BufRead,
    F: FnMut(String, Vec<DocId>),
{
    let mut report = LoadReport::default();

    for (index, line) in reader.split(b'\n').enumerate() {
        let line_number = index + 1;
        let bytes = line?;

        let line = match std::str::from_utf8(&bytes) {
            Ok(line) => line.strip_suffix('\r').unwrap_or(line),
            Err(_) => {
                report.skipped.push(SkippedLine {
                    line_number,
                    reason: SkipReason::InvalidUtf8,
                });
                continue;
            }
        };

        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok((term, doc_ids)) => {
                on_term(term, doc_ids);
                report.terms_loaded += 1;
            }
            Err(reason) => report.skipped.push(SkippedLine {
                line_number,
                reason,
            }),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_write_postings() {
        let mut buffer = Vec::new();
        write_postings(
            &mut buffer,
            vec![("bird", vec![2, 3]), ("cat", vec![1, 3])],
        )
        .unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "bird\t2,3\ncat\t1,3\n");
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("cat\t1,3"), Ok(("cat".to_string(), vec![1, 3])));
        assert_eq!(parse_line("cat\t 1, 3,"), Ok(("cat".to_string(), vec![1, 3])));
        assert_eq!(parse_line("cat 1,3"), Err(SkipReason::MissingSeparator));
        assert_eq!(parse_line("\t1"), Err(SkipReason::EmptyTerm));
        assert_eq!(parse_line("cat\t"), Err(SkipReason::EmptyPostings));
        assert_eq!(
            parse_line("cat\t1,x"),
            Err(SkipReason::InvalidDocId("x".to_string()))
        );
        assert_eq!(
            parse_line("cat\t0"),
            Err(SkipReason::InvalidDocId("0".to_string()))
        );
    }

    #[test]
    fn test_read_postings_reports_bad_lines() {
        let data = "cat\t1,3\nno separator\n\ndog\t1,two\nbird\t2,3\r\n";
        let mut terms = Vec::new();

        let report = read_postings(Cursor::new(data), |term, ids| terms.push((term, ids))).unwrap();

        assert_eq!(
            terms,
            vec![
                ("cat".to_string(), vec![1, 3]),
                ("bird".to_string(), vec![2, 3])
            ]
        );
        assert_eq!(report.terms_loaded, 2);
        assert_eq!(
            report.skipped,
            vec![
                SkippedLine {
                    line_number: 2,
                    reason: SkipReason::MissingSeparator
                },
                SkippedLine {
                    line_number: 4,
                    reason: SkipReason::InvalidDocId("two".to_string())
                },
            ]
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn test_read_postings_invalid_utf8() {
        let data: &[u8] = b"cat\t1\n\xff\xfe\t2\n";
        let mut count = 0;

        let report = read_postings(Cursor::new(data), |_, _| count += 1).unwrap();

        assert_eq!(count, 1);
        assert_eq!(report.skipped[0].line_number, 2);
        assert_eq!(report.skipped[0].reason, SkipReason::InvalidUtf8);
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(
            SkipReason::InvalidDocId("x".into()).to_string(),
            "invalid document id 'x'"
        );
        assert_eq!(SkipReason::MissingSeparator.to_string(), "missing tab separator");
    }
}
