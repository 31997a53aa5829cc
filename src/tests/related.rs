//! End-to-end scenarios for the related-content service over an
//! in-memory document store.

use std::collections::HashMap;
use std::sync::Arc;

use crate::documents::{Document, DocumentFilter, DocumentStore};
use crate::related::RelatedContentError;
use crate::{RelatedContentConfig, RelatedContentService};

/// In-memory store backing the scenario tests. `query` ignores the
/// status filter since everything in the fixture counts as published.
struct MemoryStore {
    docs: HashMap<u64, Document>,
}

impl MemoryStore {
    fn new(docs: Vec<Document>) -> Self {
        Self {
            docs: docs.into_iter().map(|d| (d.id, d)).collect(),
        }
    }
}

impl DocumentStore for MemoryStore {
    fn by_id(&self, id: u64) -> anyhow::Result<Option<Document>> {
        Ok(self.docs.get(&id).cloned())
    }

    fn by_slug(&self, slug: &str) -> anyhow::Result<Option<Document>> {
        Ok(self.docs.values().find(|d| d.slug == slug).cloned())
    }

    fn query(&self, _filter: &DocumentFilter) -> anyhow::Result<Vec<Document>> {
        let mut docs: Vec<Document> = self.docs.values().cloned().collect();
        docs.sort_by_key(|d| d.id);
        Ok(docs)
    }
}

/// Store whose candidate query always fails; `by_id` still works.
struct FlakyQueryStore {
    inner: MemoryStore,
}

impl DocumentStore for FlakyQueryStore {
    fn by_id(&self, id: u64) -> anyhow::Result<Option<Document>> {
        self.inner.by_id(id)
    }

    fn by_slug(&self, slug: &str) -> anyhow::Result<Option<Document>> {
        self.inner.by_slug(slug)
    }

    fn query(&self, _filter: &DocumentFilter) -> anyhow::Result<Vec<Document>> {
        anyhow::bail!("backend unavailable")
    }
}

/// Store where everything fails.
struct DownStore;

impl DocumentStore for DownStore {
    fn by_id(&self, _id: u64) -> anyhow::Result<Option<Document>> {
        anyhow::bail!("backend unavailable")
    }

    fn by_slug(&self, _slug: &str) -> anyhow::Result<Option<Document>> {
        anyhow::bail!("backend unavailable")
    }

    fn query(&self, _filter: &DocumentFilter) -> anyhow::Result<Vec<Document>> {
        anyhow::bail!("backend unavailable")
    }
}

fn fixture_docs() -> Vec<Document> {
    serde_json::from_str(
        r#"[
        {
            "id": 1,
            "slug": "async-rust-intro",
            "title": "Async Rust Introduction",
            "body": "Getting started with async programming in Rust. Futures, executors, and the tokio runtime all play together.",
            "keywords": ["rust", "async", "tokio"],
            "category": "programming"
        },
        {
            "id": 2,
            "slug": "tokio-deep-dive",
            "title": "Tokio Deep Dive",
            "body": "The tokio runtime schedules async tasks across worker threads. Rust futures drive the executors.",
            "keywords": ["rust", "async", "tokio"],
            "category": "programming"
        },
        {
            "id": 3,
            "slug": "rust-error-handling",
            "title": "Error Handling in Rust",
            "body": "Result, the question mark operator, and library error types in Rust programming.",
            "keywords": ["rust", "errors"],
            "category": "programming"
        },
        {
            "id": 4,
            "slug": "sourdough-basics",
            "title": "Sourdough Basics",
            "body": "Flour, water, salt, and patience. Feeding a starter and shaping loaves.",
            "keywords": ["baking", "bread"],
            "category": "cooking"
        }
    ]"#,
    )
    .unwrap()
}

fn service() -> RelatedContentService {
    let store = Arc::new(MemoryStore::new(fixture_docs()));
    RelatedContentService::new(store, RelatedContentConfig::default())
}

#[test]
fn test_ranked_related_orders_by_similarity() {
    let svc = service();
    let related = svc.ranked_related(1, None);

    assert!(!related.is_empty());
    // The tokio article shares keywords, category, and vocabulary
    assert_eq!(related[0].id, 2);
    assert_eq!(related[0].slug, "tokio-deep-dive");

    // Scores descend
    for pair in related.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // The baking article never clears the threshold
    assert!(related.iter().all(|r| r.id != 4));
    // The source is never its own related document
    assert!(related.iter().all(|r| r.id != 1));
}

#[test]
fn test_ranked_related_respects_limit() {
    let svc = service();
    let related = svc.ranked_related(1, Some(1));
    assert_eq!(related.len(), 1);
}

#[test]
fn test_ranked_related_symmetric_scores() {
    let svc = service();

    let from_one = svc.ranked_related(1, Some(5));
    let from_two = svc.ranked_related(2, Some(5));

    let score_1_2 = from_one.iter().find(|r| r.id == 2).unwrap().score;
    let score_2_1 = from_two.iter().find(|r| r.id == 1).unwrap().score;
    assert_eq!(score_1_2, score_2_1);
}

#[test]
fn test_ranked_related_missing_document_is_empty() {
    let svc = service();
    assert!(svc.ranked_related(999, None).is_empty());
}

#[test]
fn test_ranked_related_fails_open_on_store_error() {
    let svc = RelatedContentService::new(Arc::new(DownStore), RelatedContentConfig::default());
    assert!(svc.ranked_related(1, None).is_empty());
}

#[test]
fn test_linked_body_inserts_anchors() {
    let svc = service();
    let body = svc.linked_body(1).unwrap();

    assert!(body.contains("<a href=\"/articles/"));
    let anchors = body.matches("<a href=").count();
    assert!(anchors >= 1);
    assert!(anchors <= RelatedContentConfig::default().injection.max_links);
}

#[test]
fn test_linked_body_missing_document_is_not_found() {
    let svc = service();
    match svc.linked_body(999) {
        Err(RelatedContentError::NotFound(id)) => assert_eq!(id, 999),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_linked_body_fails_open_on_candidate_query_error() {
    let store = Arc::new(FlakyQueryStore {
        inner: MemoryStore::new(fixture_docs()),
    });
    let svc = RelatedContentService::new(store, RelatedContentConfig::default());

    // Original body comes back unmodified, unlinked
    let body = svc.linked_body(1).unwrap();
    assert_eq!(body, fixture_docs()[0].body);
    assert!(!body.contains("<a href="));
}

#[test]
fn test_linked_body_unrelated_document_unchanged() {
    let svc = service();
    // The baking article has no candidate above the threshold
    let body = svc.linked_body(4).unwrap();
    assert_eq!(body, fixture_docs()[3].body);
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let svc = service();
    let first = svc.linked_body(1).unwrap();
    let second = svc.linked_body(1).unwrap();
    assert_eq!(first, second);

    let related_a = svc.ranked_related(2, None);
    let related_b = svc.ranked_related(2, None);
    let ids_a: Vec<u64> = related_a.iter().map(|r| r.id).collect();
    let ids_b: Vec<u64> = related_b.iter().map(|r| r.id).collect();
    assert_eq!(ids_a, ids_b);
}
