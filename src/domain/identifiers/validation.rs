/// Validates a question identifier string.
///
/// Checks:
/// - Non-empty
/// - Characters are ASCII digits only (any length)
pub fn validate_question_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

/// Validates a file-name fragment (prefix, extension) for safe filesystem use.
///
/// Checks:
/// - No path separators (/, \)
/// - Not "." or ".."
/// - No null bytes
/// - Characters are alphanumeric, '-', '_', or (optionally) '.'
///
/// An empty fragment is accepted; callers that need content check for it.
pub fn validate_file_fragment(fragment: &str, allow_dots: bool) -> bool {
    if fragment.contains('/') || fragment.contains('\\') || fragment.contains('\0') {
        return false;
    }
    if fragment == "." || fragment == ".." {
        return false;
    }
    fragment.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || (allow_dots && c == '.'))
}
