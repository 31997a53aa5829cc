use serde::{Deserialize, Serialize};

/// Default minimum similarity for a candidate to count as related.
const DEFAULT_SCORE_THRESHOLD: f32 = 0.3;
/// Default number of entries in a "related articles" listing.
const DEFAULT_DISPLAY_LIMIT: usize = 3;
/// Default number of ranked candidates supplied to the link injector.
const DEFAULT_INJECTION_CANDIDATES: usize = 5;
/// Default link budget per injection pass.
const DEFAULT_MAX_LINKS: usize = 3;
/// Default upper bound on anchor term length.
const DEFAULT_MAX_ANCHOR_LENGTH: usize = 60;
/// Default path prefix for generated anchor hrefs.
const DEFAULT_LINK_PATH_PREFIX: &str = "/articles";

/// Configuration for related-content scoring and ranking.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelatedContentConfig {
    /// Minimum similarity score [0.0, 1.0] for a candidate to count as related
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f32,

    /// How many related documents a listing shows
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,

    /// How many ranked candidates the injector receives
    #[serde(default = "default_injection_candidates")]
    pub injection_candidates: usize,

    /// Drop extracted terms containing non-letter characters
    #[serde(default)]
    pub strict_terms: bool,

    #[serde(default)]
    pub injection: InjectionConfig,
}

impl Default for RelatedContentConfig {
    fn default() -> Self {
        Self {
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            injection_candidates: DEFAULT_INJECTION_CANDIDATES,
            strict_terms: false,
            injection: InjectionConfig::default(),
        }
    }
}

/// Configuration for the link injector.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InjectionConfig {
    /// Maximum anchors inserted per injection pass
    #[serde(default = "default_max_links")]
    pub max_links: usize,

    /// Opportunity terms longer than this are skipped
    #[serde(default = "default_max_anchor_length")]
    pub max_anchor_length: usize,

    /// Prefix joined with the candidate slug to form anchor hrefs
    #[serde(default = "default_link_path_prefix")]
    pub link_path_prefix: String,
}

impl Default for InjectionConfig {
    fn default() -> Self {
        Self {
            max_links: DEFAULT_MAX_LINKS,
            max_anchor_length: DEFAULT_MAX_ANCHOR_LENGTH,
            link_path_prefix: DEFAULT_LINK_PATH_PREFIX.to_string(),
        }
    }
}

fn default_score_threshold() -> f32 {
    DEFAULT_SCORE_THRESHOLD
}

fn default_display_limit() -> usize {
    DEFAULT_DISPLAY_LIMIT
}

fn default_injection_candidates() -> usize {
    DEFAULT_INJECTION_CANDIDATES
}

fn default_max_links() -> usize {
    DEFAULT_MAX_LINKS
}

fn default_max_anchor_length() -> usize {
    DEFAULT_MAX_ANCHOR_LENGTH
}

fn default_link_path_prefix() -> String {
    DEFAULT_LINK_PATH_PREFIX.to_string()
}
