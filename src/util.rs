/// Strips leading and trailing spaces and tabs. Other whitespace (e.g. newlines) is left alone.
pub(crate) fn trim_blanks(s: &str) -> &str {
    s.trim_matches([' ', '\t'])
}

/// Normalizes a course number for searching: [`trim_blanks`], then uppercase ASCII letters.
pub(crate) fn normalize_key(key: &str) -> String {
    trim_blanks(key).to_ascii_uppercase()
}
