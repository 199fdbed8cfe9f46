//! Candidate scoring and ranking against a precomputed corpus.

use crate::corpus::Corpus;
use crate::error::GlideError;
use crate::geometry::{self, Point};

/// Floor applied to the mean pointwise distance before taking the log, so
/// an exact match scores the maximum finite value instead of +infinity.
const DISTANCE_FLOOR: f64 = 1e-12;

/// A dictionary word proposed as a match for a completed stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub word: String,
    /// `-ln` of the mean pointwise distance; higher is a closer match.
    pub score: f64,
}

/// Convert a mean pointwise distance into a match score.
pub fn score_distance(distance: f64) -> f64 {
    -distance.max(DISTANCE_FLOOR).ln()
}

/// Rank the `window` most frequent corpus entries against `query`.
///
/// The corpus is sorted by descending frequency at build time, so the
/// window selects the N most frequent words and bounds the cost of a
/// ranking pass. Returns at most `top_k` candidates ordered by descending
/// score; ties keep corpus order. A window larger than the corpus is
/// clamped, so an empty corpus or a short window yields fewer candidates,
/// never an error.
///
/// Entry frequency is not folded into the score; ranking is by geometry
/// alone.
pub fn rank(
    query: &[Point],
    corpus: &Corpus,
    window: usize,
    top_k: usize,
) -> Result<Vec<Candidate>, GlideError> {
    let window = window.min(corpus.entries.len());
    let mut scored = Vec::with_capacity(window);
    for entry in &corpus.entries[..window] {
        let dist = geometry::pointwise_distance(query, &entry.ideal_path)?;
        scored.push(Candidate {
            word: entry.word.clone(),
            score: score_distance(dist),
        });
    }

    // Stable sort: equal scores keep corpus (frequency) order.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_k);
    Ok(scored)
}
