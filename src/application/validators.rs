/// Validates that the input looks like `local@domain.tld`.
/// Rules:
/// - No whitespace anywhere
/// - Exactly one `@`, with a non-empty local part before it
/// - Domain must contain a `.` that is neither its first nor its last
///   character
///
/// Input is checked as-is; surrounding whitespace is a validation error,
/// not noise to strip.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // At least one dot strictly inside the domain
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
