//! OpenAPI specification for the Discoverable server.

use utoipa::OpenApi;

use discoverable_core::{
    DescriptionMetrics, HeadingMetrics, Impact, ImageMetrics, IssueKind, LinkMetrics,
    PerformanceMetrics, Platform, PlatformScore, Presence, SeoIssue, SeoMetrics, SeoReport,
    TitleMetrics, VisibilityFactors, VisibilityReport,
};

use crate::mail::Enquiry;
use crate::routes::{
    AnalyzeRequest, AnalyzeResponse, ContactResponse, ErrorResponse, HealthResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::contact,
        crate::routes::analyze,
        crate::routes::health,
        crate::routes::openapi_json
    ),
    components(
        schemas(
            Enquiry,
            ContactResponse,
            ErrorResponse,
            AnalyzeRequest,
            AnalyzeResponse,
            HealthResponse,
            SeoReport,
            SeoIssue,
            IssueKind,
            Impact,
            SeoMetrics,
            TitleMetrics,
            DescriptionMetrics,
            HeadingMetrics,
            ImageMetrics,
            LinkMetrics,
            PerformanceMetrics,
            VisibilityReport,
            VisibilityFactors,
            Platform,
            PlatformScore,
            Presence
        )
    ),
    tags(
        (name = "contact", description = "Lead capture"),
        (name = "analyze", description = "SEO and AI visibility analysis"),
        (name = "system", description = "System endpoints")
    )
)]
/// OpenAPI specification for the Discoverable server.
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn openapi_includes_expected_paths() {
        let doc = ApiDoc::openapi();
        let paths = doc.paths.paths;

        assert!(paths.contains_key("/contact"));
        assert!(paths.contains_key("/analyze"));
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/openapi.json"));
    }
}
