//! Candidate ranking: threshold filter, stable descending sort, truncation.

use crate::documents::Document;
use crate::related::cache::ScoreCache;
use crate::related::score::similarity;

/// A document proposed as related to a source, with its similarity score.
/// Always satisfies `score >= threshold` of the rank pass that produced it.
#[derive(Debug, Clone)]
pub struct LinkCandidate {
    pub document: Document,
    pub score: f32,
}

/// Options for one rank pass.
#[derive(Debug, Clone, Copy)]
pub struct RankOptions {
    /// Minimum score to keep a candidate
    pub threshold: f32,
    /// Maximum number of candidates returned
    pub limit: usize,
}

/// Score and rank `candidates` against `source`.
///
/// The source document is excluded by id. Every remaining candidate is
/// scored through the cache, filtered against the threshold, sorted
/// strictly descending by score, and truncated to the limit.
///
/// The sort is stable, so candidates with equal scores retain their input
/// order — identical inputs always produce identical output ordering.
pub fn rank(
    source: &Document,
    candidates: &[Document],
    cache: &mut ScoreCache,
    strict: bool,
    opts: RankOptions,
) -> Vec<LinkCandidate> {
    let scored: Vec<LinkCandidate> = candidates
        .iter()
        .filter(|c| c.id != source.id)
        .map(|c| LinkCandidate {
            score: cache.get_or_compute(source.id, c.id, || similarity(source, c, strict)),
            document: c.clone(),
        })
        .collect();

    filter_and_sort(scored, opts)
}

/// Threshold, sort, and truncate a list of scored candidates.
pub fn filter_and_sort(scored: Vec<LinkCandidate>, opts: RankOptions) -> Vec<LinkCandidate> {
    let mut kept: Vec<LinkCandidate> = scored
        .into_iter()
        .filter(|c| c.score >= opts.threshold)
        .collect();

    // sort_by is stable: ties keep input order
    kept.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    kept.truncate(opts.limit);
    kept
}
