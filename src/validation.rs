//! Input validation for user-editable settings.

/// Validate an API base URL before it is saved or sent to the backend.
///
/// Accepts http/https URLs with a non-empty host. Returns a message
/// suitable for inline display next to the settings field.
pub fn validate_api_url(url: &str) -> Result<(), String> {
    let url = url.trim();
    if url.is_empty() {
        return Err("A URL da API não pode ser vazia".to_string());
    }
    if url.contains(char::is_whitespace) {
        return Err("A URL da API não pode conter espaços".to_string());
    }

    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| "A URL deve começar com http:// ou https://".to_string())?;

    let host = rest.split('/').next().unwrap_or("");
    if host.is_empty() {
        return Err("A URL da API precisa de um host".to_string());
    }

    Ok(())
}
