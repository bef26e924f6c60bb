use translator_types::TranslateError;

use super::host::SelectionSource;

/// Trimmed selected text, or `NoSelection` when the host has none or it is
/// blank.
pub fn get_input_text(source: &dyn SelectionSource) -> Result<String, TranslateError> {
    let text = source.selected_text().map_err(|e| {
        tracing::info!("No text selected. ({})", e);
        TranslateError::from(e)
    })?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TranslateError::NoSelection);
    }
    Ok(trimmed.to_string())
}
