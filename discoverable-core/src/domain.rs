//! Domain entities for Discoverable analysis reports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Severity of an SEO issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Blocking problem, e.g. a missing title tag.
    Error,
    /// Problem that degrades ranking but does not block indexing.
    Warning,
    /// Informational note.
    Info,
}

/// Estimated ranking impact of an SEO issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Strong influence on ranking.
    High,
    /// Moderate influence on ranking.
    Medium,
    /// Minor influence on ranking.
    Low,
}

/// A single problem discovered during SEO analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeoIssue {
    /// Issue severity.
    pub kind: IssueKind,
    /// Category label, e.g. "Title Tag".
    pub category: String,
    /// Human-readable summary of the issue.
    pub message: String,
    /// Estimated ranking impact.
    pub impact: Impact,
}

/// Measurements taken from the page title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TitleMetrics {
    /// Title length in characters.
    pub length: usize,
    /// Whether the title contains a target keyword.
    pub has_keywords: bool,
    /// Whether the length falls in the optimal range.
    pub is_optimal: bool,
}

/// Measurements taken from the meta description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionMetrics {
    /// Description length in characters.
    pub length: usize,
    /// Whether the description contains a target keyword.
    pub has_keywords: bool,
    /// Whether the length falls in the optimal range.
    pub is_optimal: bool,
}

/// Heading structure measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeadingMetrics {
    /// Number of `<h1>` elements.
    pub h1_count: u32,
    /// Whether heading levels nest without gaps.
    pub has_proper_hierarchy: bool,
}

/// Image measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetrics {
    /// Total number of images.
    pub total: u32,
    /// Images missing alt text.
    pub without_alt: u32,
    /// Images served in an optimized format.
    pub optimized: u32,
}

/// Link measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkMetrics {
    /// Links pointing within the site.
    pub internal: u32,
    /// Links pointing to other sites.
    pub external: u32,
    /// Links that failed resolution.
    pub broken: u32,
}

/// Page performance measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Load time in milliseconds.
    pub load_time: u64,
    /// Page weight in bytes.
    pub size: u64,
    /// Number of network requests.
    pub requests: u32,
}

/// Full metric breakdown for an analyzed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetrics {
    /// Title measurements.
    pub title: TitleMetrics,
    /// Meta description measurements.
    pub description: DescriptionMetrics,
    /// Heading measurements.
    pub headings: HeadingMetrics,
    /// Image measurements.
    pub images: ImageMetrics,
    /// Link measurements.
    pub links: LinkMetrics,
    /// Performance measurements.
    pub performance: PerformanceMetrics,
}

/// Result of analyzing a single page for SEO health.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    /// Aggregate score, 0-100.
    pub score: u8,
    /// Issues discovered during analysis.
    pub issues: Vec<SeoIssue>,
    /// Suggested improvements, in priority order.
    pub recommendations: Vec<String>,
    /// Metric breakdown backing the score.
    pub metrics: SeoMetrics,
}

/// An AI platform whose answer surface is assessed for visibility.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// OpenAI ChatGPT.
    Chatgpt,
    /// Anthropic Claude.
    Claude,
    /// Google Gemini.
    Gemini,
    /// Perplexity.
    Perplexity,
}

impl Platform {
    /// All assessed platforms, in canonical order.
    pub const ALL: [Platform; 4] = [
        Platform::Chatgpt,
        Platform::Claude,
        Platform::Gemini,
        Platform::Perplexity,
    ];

    /// Stable lower-case platform label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Chatgpt => "chatgpt",
            Platform::Claude => "claude",
            Platform::Gemini => "gemini",
            Platform::Perplexity => "perplexity",
        }
    }
}

/// Categorical visibility bucket derived from a platform score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// Score 80 or above.
    Strong,
    /// Score 60-79.
    Moderate,
    /// Score 40-59.
    Weak,
    /// Score below 40.
    None,
}

impl Presence {
    /// Stable lower-case presence label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Strong => "strong",
            Presence::Moderate => "moderate",
            Presence::Weak => "weak",
            Presence::None => "none",
        }
    }
}

/// Visibility assessment for a single AI platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformScore {
    /// Weighted visibility score, 0-100.
    pub score: u8,
    /// Presence bucket derived from the score.
    pub presence: Presence,
    /// Notes on the signals driving the score.
    pub factors: Vec<String>,
}

/// The six independently measured visibility signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityFactors {
    /// Content depth, originality and expertise.
    pub content_quality: u8,
    /// Schema markup and JSON-LD coverage.
    pub structured_data: u8,
    /// Likelihood of being cited by AI answers.
    pub citation_potential: u8,
    /// Domain authority, backlinks and brand mentions.
    pub authority_signals: u8,
    /// Content update frequency.
    pub freshness: u8,
    /// Relevance to AI training data topics.
    pub topical_relevance: u8,
}

/// Result of assessing a domain's visibility across AI platforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityReport {
    /// Mean of the platform scores, 0-100.
    pub overall: u8,
    /// Per-platform assessments.
    pub platforms: BTreeMap<Platform, PlatformScore>,
    /// The measured signals feeding every platform score.
    pub factors: VisibilityFactors,
    /// Suggested improvements, at most five.
    pub recommendations: Vec<String>,
}
