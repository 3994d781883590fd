//! Report formatting utilities for Discoverable outputs.

use std::fmt::Write;

use serde::Serialize;

use crate::domain::{Platform, SeoReport, VisibilityReport};
use crate::seo::{score_color, score_label};
use crate::visibility::presence_icon;

/// Render an SEO report as Markdown.
pub fn render_seo_markdown(url: &str, report: &SeoReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# SEO Report: {url}\n");
    let _ = writeln!(
        output,
        "- Score: {}/100 ({})",
        report.score,
        score_label(report.score)
    );
    let _ = writeln!(output, "- Tone: {}\n", score_color(report.score));
    append_issues(&mut output, report);
    append_list(
        &mut output,
        "Recommendations",
        &report.recommendations,
        "No recommendations.",
    );
    append_metrics(&mut output, report);
    output
}

/// Render a visibility report as Markdown.
pub fn render_visibility_markdown(domain: &str, report: &VisibilityReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# AI Visibility Report: {domain}\n");
    let _ = writeln!(output, "- Overall: {}/100\n", report.overall);
    let _ = writeln!(output, "### Platforms");
    for platform in Platform::ALL {
        let Some(entry) = report.platforms.get(&platform) else {
            continue;
        };
        let _ = writeln!(
            output,
            "- {} {}: {}/100 ({})",
            presence_icon(entry.presence),
            platform.as_str(),
            entry.score,
            entry.presence.as_str()
        );
        for note in &entry.factors {
            let _ = writeln!(output, "  - {note}");
        }
    }
    let _ = writeln!(output);
    append_factors(&mut output, report);
    append_list(
        &mut output,
        "Recommendations",
        &report.recommendations,
        "No recommendations.",
    );
    output
}

/// One-line terminal summary of an SEO report.
pub fn seo_summary(url: &str, report: &SeoReport) -> String {
    format!(
        "{url}: {}/100 ({}), {} issues",
        report.score,
        score_label(report.score),
        report.issues.len()
    )
}

/// One-line terminal summary of a visibility report.
pub fn visibility_summary(domain: &str, report: &VisibilityReport) -> String {
    format!("{domain}: {}/100 overall across 4 platforms", report.overall)
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

fn append_issues(output: &mut String, report: &SeoReport) {
    if report.issues.is_empty() {
        let _ = writeln!(output, "### Issues\nNo issues found.\n");
        return;
    }
    let _ = writeln!(output, "### Issues");
    for issue in &report.issues {
        let _ = writeln!(output, "- [{}] {}", issue.category, issue.message);
    }
    let _ = writeln!(output);
}

fn append_metrics(output: &mut String, report: &SeoReport) {
    let metrics = &report.metrics;
    let _ = writeln!(output, "### Metrics");
    let _ = writeln!(
        output,
        "- Title: {} chars, keywords: {}, optimal: {}",
        metrics.title.length, metrics.title.has_keywords, metrics.title.is_optimal
    );
    let _ = writeln!(
        output,
        "- Description: {} chars, keywords: {}, optimal: {}",
        metrics.description.length,
        metrics.description.has_keywords,
        metrics.description.is_optimal
    );
    let _ = writeln!(output, "- H1 count: {}", metrics.headings.h1_count);
    let _ = writeln!(output);
}

fn append_factors(output: &mut String, report: &VisibilityReport) {
    let factors = &report.factors;
    let _ = writeln!(output, "### Signals");
    let _ = writeln!(output, "- Content quality: {}", factors.content_quality);
    let _ = writeln!(output, "- Structured data: {}", factors.structured_data);
    let _ = writeln!(output, "- Citation potential: {}", factors.citation_potential);
    let _ = writeln!(output, "- Authority signals: {}", factors.authority_signals);
    let _ = writeln!(output, "- Freshness: {}", factors.freshness);
    let _ = writeln!(output, "- Topical relevance: {}", factors.topical_relevance);
    let _ = writeln!(output);
}

fn append_list(output: &mut String, title: &str, items: &[String], empty_message: &str) {
    if items.is_empty() {
        let _ = writeln!(output, "### {title}\n{empty_message}\n");
        return;
    }
    let _ = writeln!(output, "### {title}");
    for item in items {
        let _ = writeln!(output, "- {item}");
    }
    let _ = writeln!(output);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::{PageMetadata, analyze};
    use crate::visibility::assess;
    use crate::domain::VisibilityFactors;

    fn sample_seo_report() -> SeoReport {
        analyze(
            "https://example.com",
            "",
            Some(&PageMetadata {
                title: Some("Short".to_string()),
                description: None,
            }),
        )
    }

    fn sample_visibility_report() -> VisibilityReport {
        assess(VisibilityFactors {
            content_quality: 92,
            structured_data: 65,
            citation_potential: 85,
            authority_signals: 80,
            freshness: 90,
            topical_relevance: 95,
        })
    }

    #[test]
    fn renders_seo_markdown() {
        let report = sample_seo_report();
        let output = render_seo_markdown("https://example.com", &report);
        assert!(output.contains("# SEO Report: https://example.com"));
        assert!(output.contains("[Title Tag]"));
        assert!(output.contains("Missing meta description"));
        assert!(output.contains("Add schema markup for better search visibility"));
    }

    #[test]
    fn renders_visibility_markdown() {
        let report = sample_visibility_report();
        let output = render_visibility_markdown("example.com", &report);
        assert!(output.contains("# AI Visibility Report: example.com"));
        assert!(output.contains("chatgpt"));
        assert!(output.contains("perplexity"));
        assert!(output.contains("Structured data: 65"));
        assert!(output.contains("Implement comprehensive schema markup"));
    }

    #[test]
    fn renders_json_payload() {
        let report = sample_seo_report();
        let json = render_json(&report).expect("json");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert!(parsed["score"].is_u64());
        assert_eq!(parsed["metrics"]["headings"]["h1Count"], 1);
    }

    #[test]
    fn summaries_are_single_lines() {
        let seo = seo_summary("https://example.com", &sample_seo_report());
        let visibility = visibility_summary("example.com", &sample_visibility_report());
        assert!(!seo.contains('\n'));
        assert!(!visibility.contains('\n'));
        assert!(seo.contains("/100"));
        assert!(visibility.contains("overall"));
    }
}
