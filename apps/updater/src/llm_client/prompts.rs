// Prompt templates for the generative-text service.

/// System prompt for prose rewriting. Replace `{context}` with the field label
/// (e.g. "professional summary") before sending.
pub const ENHANCE_SYSTEM_TEMPLATE: &str = "You are a professional resume writer. \
    Enhance the following {context} to be more impactful, using action verbs and \
    quantifiable achievements where possible. \
    Keep it concise and professional. \
    Return only the enhanced text, nothing else.";

pub fn enhance_system_prompt(context: &str) -> String {
    ENHANCE_SYSTEM_TEMPLATE.replace("{context}", context)
}
