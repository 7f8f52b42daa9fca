mod clean;
mod engine;
mod prompt;

use doxysas_core::{extract, ApiSettings, GeneratedResult};

/// Precondition check for a generation call. Runs before any network
/// activity, so a missing code buffer or key never issues a request.
pub fn validate(code: &str, settings: &ApiSettings) -> Result<(), String> {
    if code.trim().is_empty() {
        return Err("Please enter some SAS code first".to_string());
    }
    if settings.api_key.is_empty() {
        return Err("Please enter your OpenRouter API key".to_string());
    }
    Ok(())
}

/// Run the full pipeline for one source buffer: extract names, build the
/// prompts, call the API once, clean the reply.
pub async fn generate(code: &str, settings: &ApiSettings) -> Result<GeneratedResult, String> {
    validate(code, settings)?;

    let code = code.trim();
    let macro_name = extract::macro_name(code);
    let internal = extract::internal_macro_calls(code);

    eprintln!(
        "[doxysas-gen] generating for {} ({} internal macros) via {}",
        macro_name,
        internal.len(),
        settings.model
    );

    let user_msg = prompt::user_message(code, &internal);
    let raw = engine::generate(settings, prompt::SYSTEM_PROMPT, &user_msg).await?;

    let doc = clean::clean_response(&raw);
    eprintln!(
        "[doxysas-gen] cleaned reply: {} chars, header {}",
        doc.full_doc.len(),
        if doc.header.is_empty() { "missing" } else { "found" }
    );

    Ok(GeneratedResult::new(
        &macro_name,
        code.to_string(),
        doc.full_doc,
        doc.header,
    ))
}
