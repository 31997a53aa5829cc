use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A content record as seen by the scoring subsystem.
///
/// Documents are owned by an external store and treated as immutable for
/// the duration of one scoring/injection pass. Missing fields are empty
/// strings, never a reason to fail.
#[derive(Debug, Clone, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,

    pub slug: String,
    pub title: String,
    pub body: String,
    pub keywords: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Hash for Document {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Query predicate understood by the external store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl DocumentFilter {
    /// Filter for publicly visible documents. Drafts never become anchors.
    pub fn published() -> Self {
        DocumentFilter {
            status: Some("published".to_string()),
            category: None,
        }
    }
}

/// External document collaborator. Fetching is the only capability this
/// subsystem needs; persistence stays on the caller's side since the
/// injector returns a value instead of writing anything.
pub trait DocumentStore: Send + Sync {
    fn by_id(&self, id: u64) -> anyhow::Result<Option<Document>>;
    fn by_slug(&self, slug: &str) -> anyhow::Result<Option<Document>>;
    fn query(&self, filter: &DocumentFilter) -> anyhow::Result<Vec<Document>>;
}

/// One entry of a "related articles" listing.
#[derive(Debug, Clone, Serialize)]
pub struct RelatedSummary {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub score: f32,
}
