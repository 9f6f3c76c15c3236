//! Prose enhancement: optional, fail-open rewriting of resume text.
//!
//! `TextEnhancer` is the seam: `LlmEnhancer` calls the generative-text service,
//! `PassThrough` is the no-op used when no API key is configured. Callers go
//! through [`enhance`], which never fails: any error is logged and the original
//! text comes back unchanged.
//!
//! Output is nondeterministic. Two calls with the same input may differ.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::llm_client::prompts::enhance_system_prompt;
use crate::llm_client::{LlmClient, LlmError};

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("enhancement disabled: no API key configured")]
    Disabled,

    #[error("generative service error: {0}")]
    Llm(#[from] LlmError),

    #[error("generative service returned no usable text")]
    EmptyResponse,
}

#[async_trait]
pub trait TextEnhancer: Send + Sync {
    /// Rewrites `text`. `context` names the field, e.g. "job description".
    async fn rewrite(&self, text: &str, context: &str) -> Result<String, EnhanceError>;
}

/// Returns the input unchanged.
pub struct PassThrough;

#[async_trait]
impl TextEnhancer for PassThrough {
    async fn rewrite(&self, text: &str, _context: &str) -> Result<String, EnhanceError> {
        Ok(text.to_string())
    }
}

/// Enhancer backed by the LLM client. `None` client = no API key.
pub struct LlmEnhancer {
    llm: Option<LlmClient>,
}

impl LlmEnhancer {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TextEnhancer for LlmEnhancer {
    async fn rewrite(&self, text: &str, context: &str) -> Result<String, EnhanceError> {
        let llm = self.llm.as_ref().ok_or(EnhanceError::Disabled)?;
        let system = enhance_system_prompt(context);
        match llm.call_text(text, &system).await {
            Ok(rewritten) => Ok(rewritten),
            Err(LlmError::EmptyContent) => Err(EnhanceError::EmptyResponse),
            Err(e) => Err(EnhanceError::Llm(e)),
        }
    }
}

/// Fail-open wrapper: the rewritten text, or `text` itself on any failure.
pub async fn enhance(enhancer: &dyn TextEnhancer, text: &str, context: &str) -> String {
    match enhancer.rewrite(text, context).await {
        Ok(rewritten) if !rewritten.trim().is_empty() => {
            debug!("Enhanced {context} ({} → {} chars)", text.len(), rewritten.len());
            rewritten
        }
        Ok(_) => {
            warn!("AI enhancement of {context} returned empty text; keeping original");
            text.to_string()
        }
        Err(e) => {
            warn!("AI enhancement of {context} failed: {e}; keeping original");
            text.to_string()
        }
    }
}
