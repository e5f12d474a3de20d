// src/retrieval/score.rs

use super::store::Document;

pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.9;
pub const DEFAULT_MAX_SIZE: usize = 10;

/// Keep documents scoring at least `threshold`, best first, at most `max_size`.
/// Unscored documents never pass; ties keep their input order.
pub fn filter_by_score(documents: Vec<Document>, threshold: f64, max_size: usize) -> Vec<Document> {
    let mut kept: Vec<Document> = documents
        .into_iter()
        .filter(|d| d.score.map_or(false, |s| s >= threshold))
        .collect();

    let score = |d: &Document| d.score.unwrap_or(f64::NEG_INFINITY);
    kept.sort_by(|a, b| score(b).total_cmp(&score(a)));
    kept.truncate(max_size);
    kept
}
