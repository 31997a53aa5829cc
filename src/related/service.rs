//! High-level entry point for related-content lookups and link injection.
//!
//! Owns the pairwise score cache and passes it down explicitly, so cache
//! lifetime matches service lifetime and nothing is process-global.
//! Store failures degrade fail-open: a related listing falls back to
//! empty, a linked body falls back to the original unlinked body. The
//! primary content never blocks on this subsystem.

use std::sync::{Arc, Mutex};

use crate::config::RelatedContentConfig;
use crate::documents::{Document, DocumentFilter, DocumentStore, RelatedSummary};
use crate::related::cache::ScoreCache;
use crate::related::inject::inject_links;
use crate::related::rank::{rank, LinkCandidate, RankOptions};

/// Errors that can occur during related-content operations.
#[derive(Debug, thiserror::Error)]
pub enum RelatedContentError {
    #[error("document not found: {0}")]
    NotFound(u64),

    #[error("document store error: {0}")]
    Store(#[source] anyhow::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Service computing related-document listings and link-injected bodies.
///
/// Scores and candidate lists are computed on demand per request and not
/// persisted; the cache lives as long as the service.
pub struct RelatedContentService {
    config: RelatedContentConfig,
    store: Arc<dyn DocumentStore>,
    cache: Mutex<ScoreCache>,
}

impl RelatedContentService {
    pub fn new(store: Arc<dyn DocumentStore>, config: RelatedContentConfig) -> Self {
        Self {
            config,
            store,
            cache: Mutex::new(ScoreCache::new()),
        }
    }

    /// Related documents for a listing, best first.
    ///
    /// Fail-open: a missing source document or a failing store yields an
    /// empty list, never an error and never zero-score padding.
    pub fn ranked_related(&self, document_id: u64, limit: Option<usize>) -> Vec<RelatedSummary> {
        match self.try_ranked_related(document_id, limit) {
            Ok(related) => related,
            Err(err) => {
                log::warn!("related lookup failed for document {document_id}: {err}");
                Vec::new()
            }
        }
    }

    fn try_ranked_related(
        &self,
        document_id: u64,
        limit: Option<usize>,
    ) -> Result<Vec<RelatedSummary>, RelatedContentError> {
        let Some(source) = self
            .store
            .by_id(document_id)
            .map_err(RelatedContentError::Store)?
        else {
            log::debug!("document {document_id} not found, no related documents");
            return Ok(Vec::new());
        };

        let candidates = self
            .store
            .query(&DocumentFilter::published())
            .map_err(RelatedContentError::Store)?;

        let limit = limit.unwrap_or(self.config.display_limit);
        let ranked = self.rank_candidates(&source, &candidates, limit)?;

        Ok(ranked
            .into_iter()
            .map(|c| RelatedSummary {
                id: c.document.id,
                title: c.document.title,
                slug: c.document.slug,
                score: c.score,
            })
            .collect())
    }

    /// The source body with contextual anchors embedded, ready to render
    /// as trusted markup.
    ///
    /// A missing source is an error — there is no body to return. A
    /// failing candidate query degrades fail-open to the original,
    /// unlinked body. Injection runs exactly once per call and the input
    /// body must be pristine; persist the result instead of re-processing
    /// linked output.
    pub fn linked_body(&self, document_id: u64) -> Result<String, RelatedContentError> {
        let source = self
            .store
            .by_id(document_id)
            .map_err(RelatedContentError::Store)?
            .ok_or(RelatedContentError::NotFound(document_id))?;

        let candidates = match self.store.query(&DocumentFilter::published()) {
            Ok(candidates) => candidates,
            Err(err) => {
                log::warn!("candidate query failed for document {document_id}: {err}");
                return Ok(source.body);
            }
        };

        let ranked =
            self.rank_candidates(&source, &candidates, self.config.injection_candidates)?;
        if ranked.is_empty() {
            return Ok(source.body);
        }

        Ok(inject_links(&source.body, &ranked, &self.config.injection))
    }

    fn rank_candidates(
        &self,
        source: &Document,
        candidates: &[Document],
        limit: usize,
    ) -> Result<Vec<LinkCandidate>, RelatedContentError> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|e| RelatedContentError::Internal(format!("lock poisoned: {e}")))?;

        Ok(rank(
            source,
            candidates,
            &mut cache,
            self.config.strict_terms,
            RankOptions {
                threshold: self.config.score_threshold,
                limit,
            },
        ))
    }
}
