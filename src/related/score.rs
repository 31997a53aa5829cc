//! Composite similarity scoring between two documents.
//!
//! Combines Jaccard similarity over the case-folded keyword sets with
//! Jaccard similarity over extracted content terms, plus a small bonus
//! when both documents share a category:
//!
//!   score = 0.6 * keyword_jaccard + 0.4 * term_jaccard + category_bonus
//!
//! The composite is clamped to [0.0, 1.0] so downstream consumers can
//! assume a closed unit interval. The function is total: any two
//! well-formed documents score without failing, and empty keyword/term
//! sets score 0.0 rather than NaN.

use std::collections::HashSet;

use crate::documents::Document;
use crate::related::terms::extract_terms;

/// Weight of the keyword-set Jaccard component.
const KEYWORD_WEIGHT: f32 = 0.6;
/// Weight of the content-term Jaccard component.
const TERM_WEIGHT: f32 = 0.4;
/// Added when both documents carry the same non-empty category.
pub const CATEGORY_BONUS: f32 = 0.1;

/// Jaccard similarity of two sets, guarded against empty unions.
fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f32 {
    let intersection = a.intersection(b).count() as f32;
    let union = a.union(b).count().max(1) as f32;
    intersection / union
}

/// Case-folded, trimmed keyword set of a document.
fn keyword_set(doc: &Document) -> HashSet<String> {
    doc.keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Term set extracted from title, body, and keywords combined.
fn term_set(doc: &Document, strict: bool) -> HashSet<String> {
    let combined = format!("{} {} {}", doc.title, doc.body, doc.keywords.join(" "));
    extract_terms(&combined, strict).into_iter().collect()
}

/// Jaccard similarity of the two documents' keyword sets. Always in [0, 1].
pub fn keyword_jaccard(a: &Document, b: &Document) -> f32 {
    jaccard(&keyword_set(a), &keyword_set(b))
}

/// Jaccard similarity of the two documents' extracted term sets. Always in [0, 1].
pub fn term_jaccard(a: &Document, b: &Document, strict: bool) -> f32 {
    jaccard(&term_set(a, strict), &term_set(b, strict))
}

/// Whether both documents carry the same non-empty category.
fn same_category(a: &Document, b: &Document) -> bool {
    match (&a.category, &b.category) {
        (Some(ca), Some(cb)) => {
            let ca = ca.trim();
            !ca.is_empty() && ca.eq_ignore_ascii_case(cb.trim())
        }
        _ => false,
    }
}

/// Composite similarity between two documents, clamped to [0.0, 1.0].
///
/// Symmetric: `similarity(a, b) == similarity(b, a)`.
pub fn similarity(a: &Document, b: &Document, strict: bool) -> f32 {
    let kw = keyword_jaccard(a, b);
    let terms = term_jaccard(a, b, strict);
    let bonus = if same_category(a, b) { CATEGORY_BONUS } else { 0.0 };

    (KEYWORD_WEIGHT * kw + TERM_WEIGHT * terms + bonus).clamp(0.0, 1.0)
}
