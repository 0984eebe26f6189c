//! Set operations over ascending document id lists.
//!
//! All inputs must be sorted ascending without duplicates, which is what
//! [`BooleanIndex::get_documents`](crate::index::BooleanIndex::get_documents)
//! returns. Outputs keep that form.

use std::cmp::Ordering;

use crate::index::DocId;

/// Ids present in both lists.
pub fn intersect(left: &[DocId], right: &[DocId]) -> Vec<DocId> {
    let mut result = Vec::with_capacity(left.len().min(right.len()));
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                result.push(left[i]);
                i += 1;
                j += 1;
            }
        }
    }
    result
}

/// Ids present in either list.
pub fn union(left: &[DocId], right: &[DocId]) -> Vec<DocId> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            Ordering::Less => {
                result.push(left[i]);
                i += 1;
            }
            Ordering::Greater => {
                result.push(right[j]);
                j += 1;
            }
            Ordering::Equal => {
                result.push(left[i]);
                i += 1;
                j += 1;
            }
        }
    }
    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}

/// Ids of `left` that are not in `right`.
pub fn difference(left: &[DocId], right: &[DocId]) -> Vec<DocId> {
    let mut result = Vec::with_capacity(left.len());
    let mut j = 0;
    for &id in left {
        while j < right.len() && right[j] < id {
            j += 1;
        }
        if j >= right.len() || right[j] != id {
            result.push(id);
        }
    }
    result
}

/// Sort ascending and drop duplicates.
pub fn normalize_ids(mut ids: Vec<DocId>) -> Vec<DocId> {
    ids.sort_unstable();
    ids.dedup();
    ids
}
