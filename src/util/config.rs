//! Line helpers for the portal's `key = value` configuration files.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Split a `key = value` line.
///
/// Output:
/// - `Some((key, value))` with both sides trimmed and a trailing ` # comment`
///   removed from the value; `None` when the line has no `=` or an empty key.
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (key, value) = line.trim().split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let value = match value.find(" #") {
        Some(pos) => &value[..pos],
        None => value,
    };
    Some((key.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# theme = dark"));
        assert!(skip_comment_or_empty("// note"));
        assert!(skip_comment_or_empty("; legacy"));
        assert!(!skip_comment_or_empty("theme = dark"));
    }

    #[test]
    /// What: Key/value split keeps URLs intact and drops inline comments.
    fn key_value_split() {
        assert_eq!(
            parse_key_value(" data_url = https://desa.example.id/data/#top "),
            Some(("data_url".into(), "https://desa.example.id/data/#top".into()))
        );
        assert_eq!(
            parse_key_value("news_page_size = 8 # cards"),
            Some(("news_page_size".into(), "8".into()))
        );
        assert_eq!(parse_key_value("= value"), None);
        assert_eq!(parse_key_value("novalue"), None);
    }
}
