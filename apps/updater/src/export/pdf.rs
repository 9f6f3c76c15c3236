//! HTML → PDF. The engine is an external command; absent or failing engines
//! degrade the run to markdown-only output.

use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF engine '{0}' is not installed")]
    Unavailable(String),

    #[error("PDF engine failed: {0}")]
    Failed(String),

    #[error("I/O error preparing PDF: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str, output: &Path) -> Result<(), PdfError>;
}

/// Used when PDF output is not requested or no engine is configured.
pub struct NoPdfRenderer;

#[async_trait]
impl PdfRenderer for NoPdfRenderer {
    async fn render(&self, _html: &str, _output: &Path) -> Result<(), PdfError> {
        Err(PdfError::Unavailable("none".to_string()))
    }
}

/// Runs `<program> <input.html> <output.pdf>` (weasyprint's calling convention).
pub struct CommandPdfRenderer {
    program: String,
}

impl CommandPdfRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl PdfRenderer for CommandPdfRenderer {
    async fn render(&self, html: &str, output: &Path) -> Result<(), PdfError> {
        let mut input = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".html")
            .tempfile()?;
        input.write_all(html.as_bytes())?;
        input.flush()?;

        debug!("Running {} on {}", self.program, input.path().display());
        let result = tokio::process::Command::new(&self.program)
            .arg(input.path())
            .arg(output)
            .output()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PdfError::Unavailable(self.program.clone()))
            }
            Err(e) => return Err(PdfError::Io(e)),
        };

        if !output.status.success() {
            return Err(PdfError::Failed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_engine_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = CommandPdfRenderer::new("resume-updater-no-such-engine");
        let err = renderer
            .render("<p>x</p>", &dir.path().join("out.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, PdfError::Unavailable(name) if name == "resume-updater-no-such-engine"));
    }

    #[tokio::test]
    async fn test_no_renderer_is_unavailable() {
        let err = NoPdfRenderer
            .render("<p>x</p>", Path::new("out.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, PdfError::Unavailable(_)));
    }
}
