#![deny(missing_docs)]
//! Discoverable command-line interface.
//!
//! Runs the SEO analyzer and AI visibility assessor locally and renders
//! reports as text, Markdown, or JSON.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

use discoverable_core::{
    PageMetadata, SeoReport, SimulatedSignals, VisibilityReport, analyze, check_visibility,
    render_json, render_seo_markdown, render_visibility_markdown, seo_summary, visibility_summary,
};

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "discoverable", version, about = "Discoverable CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct PageArgs {
    /// URL of the page to analyze.
    #[arg(long)]
    url: String,
    /// Page title to evaluate.
    #[arg(long)]
    title: Option<String>,
    /// Meta description to evaluate.
    #[arg(long)]
    description: Option<String>,
}

#[derive(Args, Clone)]
struct OutputArgs {
    /// Output format for report data.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the report to a file instead of stdout.
    #[arg(long = "report-output")]
    report_output: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a page's on-page SEO health.
    Seo {
        #[command(flatten)]
        page: PageArgs,
        #[command(flatten)]
        report: OutputArgs,
    },
    /// Assess a domain's visibility across AI platforms.
    Visibility {
        /// Domain to assess.
        #[arg(long)]
        domain: String,
        #[command(flatten)]
        report: OutputArgs,
    },
    /// Run both analyses for a page and print a combined report.
    Audit {
        #[command(flatten)]
        page: PageArgs,
        #[command(flatten)]
        report: OutputArgs,
    },
}

/// Combined payload for the audit subcommand.
#[derive(Serialize)]
struct AuditReport {
    seo: SeoReport,
    visibility: VisibilityReport,
}

#[cfg(not(test))]
fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seo { page, report } => {
            let seo = run_seo(&page);
            emit_seo_report(&page.url, &seo, &report)?;
        }
        Commands::Visibility { domain, report } => {
            let visibility = check_visibility(&domain, &SimulatedSignals::new());
            emit_visibility_report(&domain, &visibility, &report)?;
        }
        Commands::Audit { page, report } => {
            let audit = AuditReport {
                seo: run_seo(&page),
                visibility: check_visibility(&page.url, &SimulatedSignals::new()),
            };
            emit_audit_report(&page.url, &audit, &report)?;
        }
    }

    Ok(())
}

fn run_seo(page: &PageArgs) -> SeoReport {
    let metadata = PageMetadata {
        title: page.title.clone(),
        description: page.description.clone(),
    };
    analyze(&page.url, "", Some(&metadata))
}

fn emit_seo_report(url: &str, report: &SeoReport, output: &OutputArgs) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Text => render_seo_text(url, report),
        OutputFormat::Markdown => render_seo_markdown(url, report),
        OutputFormat::Json => render_json(report)?,
    };
    emit_output(output, contents)
}

fn emit_visibility_report(
    domain: &str,
    report: &VisibilityReport,
    output: &OutputArgs,
) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Text => render_visibility_text(domain, report),
        OutputFormat::Markdown => render_visibility_markdown(domain, report),
        OutputFormat::Json => render_json(report)?,
    };
    emit_output(output, contents)
}

fn emit_audit_report(url: &str, report: &AuditReport, output: &OutputArgs) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Text => format!(
            "{}{}",
            render_seo_text(url, &report.seo),
            render_visibility_text(url, &report.visibility)
        ),
        OutputFormat::Markdown => format!(
            "{}\n{}",
            render_seo_markdown(url, &report.seo),
            render_visibility_markdown(url, &report.visibility)
        ),
        OutputFormat::Json => render_json(report)?,
    };
    emit_output(output, contents)
}

fn emit_output(output: &OutputArgs, contents: String) -> CliResult<()> {
    if let Some(path) = &output.report_output {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
    } else {
        print!("{contents}");
    }
    Ok(())
}

fn render_seo_text(url: &str, report: &SeoReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", seo_summary(url, report));
    for issue in &report.issues {
        let _ = writeln!(output, "  issue [{}]: {}", issue.category, issue.message);
    }
    for recommendation in &report.recommendations {
        let _ = writeln!(output, "  next: {recommendation}");
    }
    output
}

fn render_visibility_text(domain: &str, report: &VisibilityReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", visibility_summary(domain, report));
    for (platform, entry) in &report.platforms {
        let _ = writeln!(
            output,
            "  {}: {}/100 ({})",
            platform.as_str(),
            entry.score,
            entry.presence.as_str()
        );
    }
    for recommendation in &report.recommendations {
        let _ = writeln!(output, "  next: {recommendation}");
    }
    output
}

#[cfg(test)]
fn main() {}
