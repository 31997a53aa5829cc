//! Link injection: rewrite a body with anchors to related documents.
//!
//! Candidates are processed in ranked order and their opportunity terms
//! (title words, then keywords) in declared order. Order is load-bearing:
//! the first term to match claims budget, so reordering changes which
//! terms get linked.
//!
//! Instead of rescanning the output for already-linked text, the pass
//! tracks claimed byte ranges `[start, end)` in the original body. Spans
//! of pre-existing anchor elements are claimed up front, every accepted
//! match claims its range, and a new match overlapping any claimed range
//! is rejected in favor of the next occurrence. All replacements are
//! applied in a single rebuild at the end.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::InjectionConfig;
use crate::related::rank::LinkCandidate;
use crate::related::terms::MIN_TERM_LENGTH;

/// Pre-existing anchor elements. Heuristic, not a DOM parser — good
/// enough to keep a pass from nesting anchors inside earlier ones.
static ANCHOR_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<a\b[^>]*>.*?</a>").expect("anchor pattern is valid"));

/// Transient state of one injection pass over one body.
struct InjectionPass<'a> {
    body: &'a str,
    /// Lowercase terms that already anchor something in this pass
    used_terms: HashSet<String>,
    /// Byte ranges no new match may overlap
    claimed: Vec<(usize, usize)>,
    /// Replacements, positioned against the original body
    edits: Vec<(usize, usize, String)>,
    link_count: usize,
}

impl<'a> InjectionPass<'a> {
    fn new(body: &'a str) -> Self {
        let claimed = ANCHOR_ELEMENT
            .find_iter(body)
            .map(|m| (m.start(), m.end()))
            .collect();
        Self {
            body,
            used_terms: HashSet::new(),
            claimed,
            edits: Vec::new(),
            link_count: 0,
        }
    }

    fn overlaps_claimed(&self, start: usize, end: usize) -> bool {
        self.claimed.iter().any(|&(s, e)| start < e && s < end)
    }

    /// Try to anchor one term for one candidate. Returns true if a link
    /// was inserted.
    fn try_term(&mut self, term: &str, href: &str) -> bool {
        if self.used_terms.contains(term) {
            return false;
        }

        let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
        let matcher = Regex::new(&pattern).expect("escaped literal pattern is valid");

        // First whole-word occurrence not overlapping a claimed range
        let hit = matcher
            .find_iter(self.body)
            .find(|m| !self.overlaps_claimed(m.start(), m.end()));

        let Some(hit) = hit else {
            return false;
        };

        // Anchor wraps the matched original-case text
        let anchor = format!(r#"<a href="{href}">{}</a>"#, &self.body[hit.range()]);
        self.claimed.push((hit.start(), hit.end()));
        self.edits.push((hit.start(), hit.end(), anchor));
        self.used_terms.insert(term.to_string());
        self.link_count += 1;
        true
    }

    /// Apply all recorded edits against the original body in one pass.
    fn finish(mut self) -> String {
        if self.edits.is_empty() {
            return self.body.to_string();
        }

        self.edits.sort_by_key(|&(start, _, _)| start);

        let mut out = String::with_capacity(self.body.len() + self.edits.len() * 64);
        let mut cursor = 0;
        for (start, end, replacement) in self.edits {
            out.push_str(&self.body[cursor..start]);
            out.push_str(&replacement);
            cursor = end;
        }
        out.push_str(&self.body[cursor..]);
        out
    }
}

/// Lowercase opportunity terms for one candidate: title words of at least
/// [`MIN_TERM_LENGTH`], then keyword strings, in that order.
fn opportunity_terms(candidate: &LinkCandidate) -> Vec<String> {
    let doc = &candidate.document;

    let mut terms: Vec<String> = doc
        .title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .filter(|t| t.len() >= MIN_TERM_LENGTH)
        .map(str::to_string)
        .collect();

    terms.extend(
        doc.keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty()),
    );
    terms
}

/// Rewrite `body`, wrapping matched candidate terms in anchors.
///
/// For each candidate in ranked order, each opportunity term is matched
/// whole-word and case-insensitively against the body; the first
/// unclaimed occurrence is wrapped in an anchor pointing at
/// `{link_path_prefix}/{slug}`. The pass stops once `max_links` anchors
/// have been inserted. No term anchors twice, and a single candidate may
/// receive several anchors under the shared budget.
///
/// Not idempotent: callers must inject into a pristine, unlinked body and
/// persist the result rather than re-processing linked output. Spans of
/// anchors already present in the input are detected heuristically and
/// left alone, but nothing marks a body as processed.
pub fn inject_links(body: &str, ranked: &[LinkCandidate], config: &InjectionConfig) -> String {
    let mut pass = InjectionPass::new(body);

    'candidates: for candidate in ranked {
        if pass.link_count >= config.max_links {
            break;
        }
        let href = format!(
            "{}/{}",
            config.link_path_prefix, candidate.document.slug
        );

        for term in opportunity_terms(candidate) {
            if pass.link_count >= config.max_links {
                break 'candidates;
            }
            if term.len() > config.max_anchor_length {
                continue;
            }
            pass.try_term(&term, &href);
        }
    }

    pass.finish()
}
