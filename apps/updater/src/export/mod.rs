//! Output pipeline: writes the markdown resume, the optional PDF, and the
//! profile JSON that lets a later run skip acquisition.
//!
//! Markdown is the source of truth: a PDF failure is a warning, while a failed
//! markdown or JSON write ends the run.

pub mod html;
pub mod pdf;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::Profile;

pub use html::{markdown_to_html, styled_html};
pub use pdf::{CommandPdfRenderer, NoPdfRenderer, PdfRenderer};

pub const DEFAULT_MARKDOWN_PATH: &str = "resume.md";
pub const DEFAULT_PDF_PATH: &str = "resume.pdf";

/// Writes the markdown document, replacing any existing file.
pub async fn save_markdown(content: &str, path: &Path) -> Result<PathBuf, AppError> {
    tokio::fs::write(path, content)
        .await
        .map_err(|e| AppError::file_write(path, e))?;
    info!("Resume saved to {}", path.display());
    Ok(path.to_path_buf())
}

/// Markdown → styled HTML → PDF. Returns `None` (with a warning) when the engine
/// is missing or fails.
pub async fn convert_to_pdf(
    markdown: &str,
    path: &Path,
    renderer: &dyn PdfRenderer,
) -> Option<PathBuf> {
    let document = styled_html(&markdown_to_html(markdown));
    match renderer.render(&document, path).await {
        Ok(()) => {
            info!("PDF resume saved to {}", path.display());
            Some(path.to_path_buf())
        }
        Err(e) => {
            warn!("PDF generation skipped: {e}");
            None
        }
    }
}

/// Pretty-printed profile JSON, readable by `acquisition::file::load_profile`.
pub async fn save_profile_json(profile: &Profile, path: &Path) -> Result<PathBuf, AppError> {
    let json = serde_json::to_string_pretty(profile)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| AppError::file_write(path, e))?;
    info!("Profile data saved to {}", path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquisition::file::load_profile;
    use crate::export::pdf::PdfError;
    use crate::models::{
        CertificationEntry, DateSpec, EducationEntry, ExperienceEntry, ProjectEntry, Skill,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Captures the HTML it is given and writes a placeholder file.
    struct CapturingRenderer {
        html: Mutex<Option<String>>,
    }

    #[async_trait]
    impl PdfRenderer for CapturingRenderer {
        async fn render(&self, html: &str, output: &Path) -> Result<(), PdfError> {
            *self.html.lock().unwrap() = Some(html.to_string());
            std::fs::write(output, b"%PDF-1.4")?;
            Ok(())
        }
    }

    fn rich_profile() -> Profile {
        Profile {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            summary: Some("Line one\nLine two".to_string()),
            website: Some("https://ada.dev".to_string()),
            experience: vec![
                ExperienceEntry {
                    title: "Analyst".to_string(),
                    start_date: DateSpec::new(1842, Some(3)),
                    end_date: Some(DateSpec::new(0, Some(0))),
                    ..Default::default()
                },
                ExperienceEntry {
                    title: "Translator".to_string(),
                    start_date: DateSpec::year(1840),
                    ..Default::default()
                },
            ],
            education: vec![EducationEntry {
                school_name: "Home".to_string(),
                start_date: None,
                end_date: Some(DateSpec::year(1835)),
                ..Default::default()
            }],
            skills: vec![Skill::new("Math"), Skill::new(""), Skill::new("Logic")],
            certifications: vec![CertificationEntry {
                name: "Fellow".to_string(),
                authority: Some(String::new()),
                date_obtained: None,
            }],
            projects: vec![ProjectEntry {
                title: "Note G".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_profile_json_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile_data.json");
        let profile = rich_profile();

        let written = save_profile_json(&profile, &path).await.unwrap();
        assert_eq!(written, path);

        let loaded = load_profile(&path).await.unwrap();
        assert_eq!(loaded, profile);
    }

    #[tokio::test]
    async fn test_profile_json_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile_data.json");
        save_profile_json(&rich_profile(), &path).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"firstName\": \"Ada\""));
    }

    #[tokio::test]
    async fn test_save_markdown_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.md");
        std::fs::write(&path, "old content that is longer").unwrap();

        save_markdown("# New", &path).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# New");
    }

    #[tokio::test]
    async fn test_save_markdown_reports_failing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("resume.md");

        let err = save_markdown("# New", &path).await.unwrap_err();
        assert!(matches!(&err, AppError::FileWrite { path: p, .. } if p == &path));
    }

    #[tokio::test]
    async fn test_convert_to_pdf_hands_styled_html_to_renderer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        let renderer = CapturingRenderer {
            html: Mutex::new(None),
        };

        let result = convert_to_pdf("# Ada\n\n- Did X\n", &path, &renderer).await;

        assert_eq!(result, Some(path.clone()));
        assert!(path.exists());
        let html = renderer.html.lock().unwrap().clone().unwrap();
        assert!(html.contains("<style>"));
        assert!(html.contains("<h1>Ada</h1>"));
        assert!(html.contains("<li>Did X</li>"));
    }

    #[tokio::test]
    async fn test_convert_to_pdf_without_engine_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");

        assert_eq!(convert_to_pdf("# Ada", &path, &NoPdfRenderer).await, None);
        assert!(!path.exists());
    }
}
