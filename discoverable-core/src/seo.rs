//! On-page SEO analysis.
//!
//! The analyzer is a total function: any input, including empty strings,
//! produces a report. Only the title and description groups are measured
//! from input today; the heading, image, link and performance groups keep
//! placeholder values until page fetching lands.

use crate::domain::{
    DescriptionMetrics, HeadingMetrics, Impact, ImageMetrics, IssueKind, LinkMetrics,
    PerformanceMetrics, SeoIssue, SeoMetrics, SeoReport, TitleMetrics,
};

/// Keywords a title or description should mention.
const TARGET_KEYWORDS: [&str; 6] = [
    "seo",
    "search",
    "visibility",
    "optimization",
    "ranking",
    "traffic",
];

/// Optimal title length range, inclusive.
const TITLE_RANGE: (usize, usize) = (30, 60);
/// Optimal meta description length range, inclusive.
const DESCRIPTION_RANGE: (usize, usize) = (120, 160);

/// Optional page metadata supplied alongside the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Page title, if known.
    pub title: Option<String>,
    /// Meta description, if known.
    pub description: Option<String>,
}

/// Analyze a page for SEO health.
///
/// `content` is accepted for forward compatibility with body-level checks
/// and is currently unused.
pub fn analyze(url: &str, content: &str, metadata: Option<&PageMetadata>) -> SeoReport {
    let _ = (url, content);

    let title = metadata.and_then(|meta| meta.title.as_deref()).unwrap_or("");
    let description = metadata
        .and_then(|meta| meta.description.as_deref())
        .unwrap_or("");

    let title_metrics = TitleMetrics {
        length: title.chars().count(),
        has_keywords: contains_keyword(title),
        is_optimal: in_range(title.chars().count(), TITLE_RANGE),
    };
    let description_metrics = DescriptionMetrics {
        length: description.chars().count(),
        has_keywords: contains_keyword(description),
        is_optimal: in_range(description.chars().count(), DESCRIPTION_RANGE),
    };

    let mut issues = Vec::new();
    if !title_metrics.is_optimal {
        issues.push(length_issue(
            "Title Tag",
            title_metrics.length,
            TITLE_RANGE,
            "Missing title tag",
            "Title",
        ));
    }
    if !description_metrics.is_optimal {
        issues.push(length_issue(
            "Meta Description",
            description_metrics.length,
            DESCRIPTION_RANGE,
            "Missing meta description",
            "Description",
        ));
    }

    // Not yet measured: constant until real page fetching exists.
    let metrics = SeoMetrics {
        title: title_metrics,
        description: description_metrics,
        headings: HeadingMetrics {
            h1_count: 1,
            has_proper_hierarchy: true,
        },
        images: ImageMetrics::default(),
        links: LinkMetrics::default(),
        performance: PerformanceMetrics::default(),
    };

    let mut recommendations = Vec::new();
    if !title_metrics.has_keywords {
        recommendations.push("Include target keywords in your title tag".to_string());
    }
    if !description_metrics.has_keywords {
        recommendations.push("Include target keywords in your meta description".to_string());
    }
    recommendations.push("Add schema markup for better search visibility".to_string());
    recommendations.push("Implement Open Graph tags for social sharing".to_string());

    SeoReport {
        score: compute_score(&metrics),
        issues,
        recommendations,
        metrics,
    }
}

/// Compute the aggregate score from a metric breakdown.
pub fn compute_score(metrics: &SeoMetrics) -> u8 {
    let mut score: i32 = 100;

    if !metrics.title.is_optimal {
        score -= 15;
    }
    if !metrics.title.has_keywords {
        score -= 10;
    }
    if !metrics.description.is_optimal {
        score -= 15;
    }
    if !metrics.description.has_keywords {
        score -= 10;
    }
    if metrics.headings.h1_count == 0 {
        score -= 20;
    }
    if metrics.headings.h1_count > 1 {
        score -= 10;
    }
    if metrics.images.without_alt > 0 {
        score -= (metrics.images.without_alt as i32 * 5).min(20);
    }

    score.clamp(0, 100) as u8
}

/// Presentation tone for a score: `good`, `medium` or `poor`.
pub fn score_color(score: u8) -> &'static str {
    if score >= 80 {
        "good"
    } else if score >= 60 {
        "medium"
    } else {
        "poor"
    }
}

/// Human-readable label for a score.
pub fn score_label(score: u8) -> &'static str {
    if score >= 80 {
        "Excellent"
    } else if score >= 60 {
        "Good"
    } else if score >= 40 {
        "Needs Improvement"
    } else {
        "Poor"
    }
}

fn contains_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    TARGET_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

fn in_range(length: usize, (min, max): (usize, usize)) -> bool {
    length >= min && length <= max
}

fn length_issue(
    category: &str,
    length: usize,
    (min, max): (usize, usize),
    missing_message: &str,
    label: &str,
) -> SeoIssue {
    let (kind, message) = if length == 0 {
        (IssueKind::Error, missing_message.to_string())
    } else {
        (
            IssueKind::Warning,
            format!("{label} length ({length}) is not optimal. Should be {min}-{max} characters."),
        )
    };
    SeoIssue {
        kind,
        category: category.to_string(),
        message,
        impact: Impact::High,
    }
}
