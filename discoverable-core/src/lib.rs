#![deny(missing_docs)]
//! Discoverable core library.
//!
//! This crate contains the domain types and analysis primitives that power
//! the broader Discoverable platform: on-page SEO analysis and AI platform
//! visibility assessment.

pub mod domain;
pub mod report;
pub mod seo;
pub mod signals;
pub mod visibility;

pub use domain::{
    DescriptionMetrics, HeadingMetrics, Impact, ImageMetrics, IssueKind, LinkMetrics,
    PerformanceMetrics, Platform, PlatformScore, Presence, SeoIssue, SeoMetrics, SeoReport,
    TitleMetrics, VisibilityFactors, VisibilityReport,
};
pub use report::{
    render_json, render_seo_markdown, render_visibility_markdown, seo_summary, visibility_summary,
};
pub use seo::{PageMetadata, analyze, compute_score, score_color, score_label};
pub use signals::{SignalSource, SimulatedSignals};
pub use visibility::{
    assess, check_visibility, presence_color, presence_for, presence_icon,
};
