//! Related-content scoring and contextual link injection.
//!
//! Scores pairwise relatedness between documents from their keyword and
//! term sets, ranks candidates against a threshold, and rewrites a
//! document body to embed anchors to the best-related documents under a
//! strict link budget.
//!
//! Document storage is an external collaborator behind [`DocumentStore`];
//! this crate computes values and never persists anything.
//!
//! # Architecture
//!
//! - `documents`: document record, store trait, render DTO
//! - `config`: serde-backed configuration
//! - `related::terms`: tokenization and stopword filtering
//! - `related::score`: composite keyword/term Jaccard similarity
//! - `related::cache`: memoized pairwise scores
//! - `related::rank`: threshold filter and descending sort
//! - `related::inject`: budgeted anchor insertion into a body
//! - `related::service`: high-level entry point with fail-open policy

mod config;
mod documents;
pub mod related;
#[cfg(test)]
mod tests;

pub use config::{InjectionConfig, RelatedContentConfig};
pub use documents::{Document, DocumentFilter, DocumentStore, RelatedSummary};
pub use related::{LinkCandidate, RelatedContentError, RelatedContentService, ScoreCache};
