//! Resume pipeline: orchestrates acquisition, rendering and export.
//!
//! Flow: AcquisitionChain → render (+ enhancer) → save markdown → PDF → profile JSON.
//! Strictly sequential; every external call is awaited before the next starts.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::acquisition::prompt::LineSource;
use crate::acquisition::{Acquisition, AcquisitionChain, NoProfileReason, ProfileOrigin};
use crate::enhance::TextEnhancer;
use crate::errors::AppError;
use crate::export::{convert_to_pdf, save_markdown, save_profile_json, PdfRenderer};
use crate::render::render;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub enhance: bool,
    pub write_markdown: bool,
    pub write_pdf: bool,
    pub markdown_path: PathBuf,
    pub pdf_path: PathBuf,
    pub profile_json_path: PathBuf,
}

/// Paths of everything the run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub origin: ProfileOrigin,
    pub markdown: Option<PathBuf>,
    pub pdf: Option<PathBuf>,
    pub profile_json: PathBuf,
}

impl RunReport {
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Profile source: {}", describe_origin(&self.origin))];
        if let Some(path) = &self.markdown {
            lines.push(format!("Markdown: {}", path.display()));
        }
        if let Some(path) = &self.pdf {
            lines.push(format!("PDF: {}", path.display()));
        }
        lines.push(format!("Profile JSON: {}", self.profile_json.display()));
        lines
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(RunReport),
    Aborted(NoProfileReason),
}

pub async fn run_pipeline(
    chain: AcquisitionChain,
    input: &mut dyn LineSource,
    enhancer: &dyn TextEnhancer,
    pdf_renderer: &dyn PdfRenderer,
    options: &RunOptions,
) -> Result<RunOutcome, AppError> {
    // Step 1: acquire
    let (profile, origin) = match chain.run(input).await? {
        Acquisition::Acquired { profile, origin } => (profile, origin),
        Acquisition::NoProfile(reason) => {
            warn!("No profile acquired: {reason:?}");
            return Ok(RunOutcome::Aborted(reason));
        }
    };
    info!("Profile acquired from {}", describe_origin(&origin));

    // Step 2: render
    input.say("\nGenerating resume...");
    if options.enhance {
        input.say("   (Using AI enhancement - this may take a moment)");
    }
    let markdown = render(&profile, options.enhance, enhancer).await;

    // Step 3: outputs
    let markdown_path = if options.write_markdown {
        Some(save_markdown(&markdown, &options.markdown_path).await?)
    } else {
        None
    };

    let pdf_path = if options.write_pdf {
        convert_to_pdf(&markdown, &options.pdf_path, pdf_renderer).await
    } else {
        None
    };

    // Step 4: persist the profile so the next run can start from the file
    let profile_json = save_profile_json(&profile, &options.profile_json_path).await?;

    Ok(RunOutcome::Completed(RunReport {
        origin,
        markdown: markdown_path,
        pdf: pdf_path,
        profile_json,
    }))
}

fn describe_origin(origin: &ProfileOrigin) -> String {
    match origin {
        ProfileOrigin::Provider => "LinkedIn".to_string(),
        ProfileOrigin::Manual => "manual entry".to_string(),
        ProfileOrigin::File(path) => format!("file {}", path.display()),
    }
}
