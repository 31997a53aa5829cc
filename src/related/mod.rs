//! Related-content subsystem: scoring, ranking, and link injection.
//!
//! Data flows one way: raw documents → extracted terms → pairwise scores
//! → ranked candidate list → rewritten body.
//!
//! # Architecture
//!
//! - `terms`: tokenizes and filters raw text into normalized terms
//! - `score`: bounded composite similarity between two documents
//! - `cache`: memoizes pairwise scores, keyed order-independently
//! - `rank`: threshold filter, stable descending sort, truncation
//! - `inject`: rewrites a body with budgeted, deduplicated anchors
//! - `service`: entry point owning the cache, fail-open over the store

mod cache;
mod inject;
mod rank;
mod score;
mod service;
pub mod terms;

pub use cache::ScoreCache;
pub use inject::inject_links;
pub use rank::{rank, LinkCandidate, RankOptions};
pub use score::{keyword_jaccard, similarity, term_jaccard, CATEGORY_BONUS};
pub use service::{RelatedContentError, RelatedContentService};
