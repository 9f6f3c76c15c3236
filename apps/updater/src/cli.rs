use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::acquisition::file::DEFAULT_PROFILE_PATH;
use crate::export::{DEFAULT_MARKDOWN_PATH, DEFAULT_PDF_PATH};

#[derive(Parser, Debug)]
#[command(
    name = "resume-updater",
    version,
    about = "Generate a resume from a LinkedIn profile, manual entry, or saved profile JSON"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Skip AI enhancement of summary and job descriptions")]
    pub no_ai: bool,
    #[arg(
        long = "format",
        value_enum,
        global = true,
        default_values = ["md", "pdf"],
        help = "Output formats to produce (repeatable)"
    )]
    pub formats: Vec<OutputFormat>,
    #[arg(long, global = true, help = "LinkedIn public profile id (defaults to LINKEDIN_PUBLIC_ID or your own profile)")]
    pub public_id: Option<String>,
    #[arg(long, global = true, default_value = DEFAULT_MARKDOWN_PATH)]
    pub markdown_out: PathBuf,
    #[arg(long, global = true, default_value = DEFAULT_PDF_PATH)]
    pub pdf_out: PathBuf,
    #[arg(long, global = true, default_value = DEFAULT_PROFILE_PATH)]
    pub profile_json: PathBuf,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full flow: LinkedIn, then manual entry or JSON file as fallback.
    Run,
    /// Re-render from a saved profile JSON without contacting LinkedIn.
    Update {
        #[arg(long, help = "Profile JSON to load (defaults to --profile-json)")]
        from: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Md,
    Pdf,
}

impl Cli {
    pub fn wants(&self, format: OutputFormat) -> bool {
        self.formats.contains(&format)
    }
}
