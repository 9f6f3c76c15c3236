mod acquisition;
mod cli;
mod config;
mod enhance;
mod errors;
mod export;
mod llm_client;
mod models;
mod pipeline;
mod render;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::acquisition::prompt::{LineSource, StdinSource};
use crate::acquisition::provider::{LinkedInClient, ProfileProvider};
use crate::acquisition::{AcquisitionChain, NoProfileReason};
use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::enhance::{LlmEnhancer, PassThrough, TextEnhancer};
use crate::export::{CommandPdfRenderer, NoPdfRenderer, PdfRenderer};
use crate::llm_client::LlmClient;
use crate::pipeline::{run_pipeline, RunOptions, RunOutcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_updater={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume-updater v{}", env!("CARGO_PKG_VERSION"));

    let enhance = !cli.no_ai;
    let enhancer = build_enhancer(&config, enhance)?;
    let pdf_renderer: Box<dyn PdfRenderer> = if cli.wants(OutputFormat::Pdf) {
        Box::new(CommandPdfRenderer::new(config.pdf_engine.clone()))
    } else {
        Box::new(NoPdfRenderer)
    };

    let mut input = StdinSource;
    let chain = match &cli.command {
        Some(Commands::Update { from }) => {
            AcquisitionChain::from_file(from.clone().unwrap_or_else(|| cli.profile_json.clone()))
        }
        Some(Commands::Run) => full_chain(&config, &cli),
        None if cli.profile_json.exists() => {
            let answer =
                input.ask("Found existing profile data. Update existing resume? (y/n): ")?;
            if answer.eq_ignore_ascii_case("y") {
                AcquisitionChain::from_file(cli.profile_json.clone())
            } else {
                full_chain(&config, &cli)
            }
        }
        None => full_chain(&config, &cli),
    };

    let options = RunOptions {
        enhance,
        write_markdown: cli.wants(OutputFormat::Md),
        write_pdf: cli.wants(OutputFormat::Pdf),
        markdown_path: cli.markdown_out.clone(),
        pdf_path: cli.pdf_out.clone(),
        profile_json_path: cli.profile_json.clone(),
    };

    println!("\n{}", "=".repeat(60));
    println!("LinkedIn Resume Updater");
    println!("{}", "=".repeat(60));

    let outcome = run_pipeline(
        chain,
        &mut input,
        enhancer.as_ref(),
        pdf_renderer.as_ref(),
        &options,
    )
    .await?;

    match outcome {
        RunOutcome::Completed(report) => {
            println!("\n{}", "=".repeat(60));
            println!("Resume generation complete!");
            for line in report.summary_lines() {
                println!("  {line}");
            }
            println!("{}", "=".repeat(60));
            Ok(ExitCode::SUCCESS)
        }
        RunOutcome::Aborted(NoProfileReason::UserExited) => Ok(ExitCode::SUCCESS),
        RunOutcome::Aborted(NoProfileReason::FileLoad(message)) => {
            eprintln!("Error loading file: {message}");
            Ok(ExitCode::FAILURE)
        }
        RunOutcome::Aborted(NoProfileReason::InputClosed) => {
            eprintln!("Input closed before a profile was acquired");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// LLM-backed enhancer when enabled and keyed, otherwise a pass-through.
fn build_enhancer(config: &Config, enhance: bool) -> Result<Box<dyn TextEnhancer>> {
    if !enhance {
        return Ok(Box::new(PassThrough));
    }
    let llm = match &config.anthropic_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; resume text will not be AI-enhanced");
            None
        }
    };
    Ok(Box::new(LlmEnhancer::new(llm)))
}

fn full_chain(config: &Config, cli: &Cli) -> AcquisitionChain {
    let provider: Option<Box<dyn ProfileProvider>> = match config.linkedin_credentials() {
        Some((email, password)) => match LinkedInClient::new(email, password) {
            Ok(client) => Some(Box::new(client)),
            Err(e) => {
                warn!("LinkedIn client unavailable: {e}");
                None
            }
        },
        None => None,
    };
    let public_id = cli
        .public_id
        .clone()
        .or_else(|| config.linkedin_public_id.clone());
    AcquisitionChain::new(provider, public_id)
}
