//! HTTP handlers for the Discoverable server.

use actix_web::{HttpResponse, Responder, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use discoverable_core::{SeoReport, SimulatedSignals, VisibilityReport, check_visibility, seo};

use crate::mail::{Enquiry, MailService};
use crate::openapi::ApiDoc;

/// Shared application state for handlers.
#[derive(Clone)]
pub struct AppState {
    /// Mail delivery service for enquiry handling.
    pub mail: MailService,
}

/// Error response payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Response payload for a submitted enquiry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    /// Always true on success.
    pub success: bool,
    /// Confirmation message.
    pub message: String,
    /// Message id assigned by the mail delivery service.
    pub id: String,
}

/// Request payload for the analysis endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// URL or domain to analyze.
    #[serde(default)]
    pub url: Option<String>,
    /// Page title, if known.
    #[serde(default)]
    pub title: Option<String>,
    /// Meta description, if known.
    #[serde(default)]
    pub description: Option<String>,
}

/// Response payload for the analysis endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    /// On-page SEO report.
    pub seo: SeoReport,
    /// AI platform visibility report.
    pub visibility: VisibilityReport,
}

/// Health check payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Server crate version.
    pub version: String,
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: message.to_string(),
    })
}

fn internal_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: message.to_string(),
    })
}

/// Validate an address against the form's email shape: a local part, a
/// single `@`, and a dotted domain, with no whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[utoipa::path(
    post,
    path = "/contact",
    request_body = Enquiry,
    responses(
        (status = 200, description = "Enquiry submitted", body = ContactResponse),
        (status = 400, description = "Invalid submission", body = ErrorResponse),
        (status = 500, description = "Mail delivery failed", body = ErrorResponse)
    ),
    tag = "contact"
)]
#[post("/api/contact")]
/// Submit a lead-capture enquiry.
pub async fn contact(state: web::Data<AppState>, payload: web::Json<Enquiry>) -> impl Responder {
    let enquiry = payload.into_inner();
    if !enquiry.has_required_fields() {
        return bad_request("Missing required fields");
    }
    if !is_valid_email(enquiry.email()) {
        return bad_request("Invalid email format");
    }

    let mail = state.mail.clone();
    let result = web::block(move || {
        let id = mail.send_notification(&enquiry)?;
        // Auto-reply is fire-and-forget; a failure must not fail the enquiry.
        if let Err(err) = mail.send_auto_reply(&enquiry) {
            log::warn!("auto-reply delivery failed: {err}");
        }
        Ok::<String, crate::mail::MailError>(id)
    })
    .await;

    match result {
        Ok(Ok(id)) => HttpResponse::Ok().json(ContactResponse {
            success: true,
            message: "Enquiry submitted successfully".to_string(),
            id,
        }),
        Ok(Err(err)) => {
            log::error!("notification delivery failed: {err}");
            internal_error("Failed to send email")
        }
        Err(err) => {
            log::error!("contact handler failed: {err}");
            internal_error("Internal server error")
        }
    }
}

#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis reports", body = AnalyzeResponse),
        (status = 400, description = "Missing url", body = ErrorResponse)
    ),
    tag = "analyze"
)]
#[post("/api/analyze")]
/// Run the SEO analyzer and visibility assessor for a URL.
pub async fn analyze(payload: web::Json<AnalyzeRequest>) -> impl Responder {
    let request = payload.into_inner();
    let Some(url) = request.url.filter(|value| !value.is_empty()) else {
        return bad_request("Missing url");
    };

    let metadata = seo::PageMetadata {
        title: request.title,
        description: request.description,
    };
    let seo_report = seo::analyze(&url, "", Some(&metadata));
    let visibility = check_visibility(&url, &SimulatedSignals::new());

    HttpResponse::Ok().json(AnalyzeResponse {
        seo: seo_report,
        visibility,
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    ),
    tag = "system"
)]
#[get("/api/health")]
/// Report service health.
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/openapi.json",
    responses(
        (status = 200, description = "OpenAPI document")
    ),
    tag = "system"
)]
#[get("/api/openapi.json")]
/// Serve the OpenAPI document.
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
