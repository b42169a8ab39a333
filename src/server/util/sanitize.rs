use crate::server::error::AppError;

/// Cleans user supplied text before storage.
///
/// Trims surrounding whitespace, removes ASCII control characters other than newline
/// and tab, and escapes `& < > " ' /` as HTML entities.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.trim().chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\n' | '\t' => out.push(c),
            c if c.is_ascii_control() => {}
            c => out.push(c),
        }
    }

    out
}

/// Sanitizes a required field.
///
/// # Returns
/// - `Ok(String)` - Cleaned, non-empty text
/// - `Err(AppError::BadRequest)` - Nothing left after cleaning, with `message`
pub fn sanitize_required(input: &str, message: &str) -> Result<String, AppError> {
    let value = sanitize(input);
    if value.is_empty() {
        return Err(AppError::BadRequest(message.to_string()));
    }

    Ok(value)
}

/// Sanitizes an optional field, mapping blank results to `None`.
pub fn sanitize_opt(input: Option<&str>) -> Option<String> {
    input.map(sanitize).filter(|value| !value.is_empty())
}
