/// Checks a mobile number against `^\+?[0-9\s\-()]+$`: an optional leading
/// `+`, then at least one digit, whitespace, hyphen, or parenthesis.
pub fn is_valid_mobile(value: &str) -> bool {
    let body = value.strip_prefix('+').unwrap_or(value);
    if body.is_empty() {
        return false;
    }
    body.chars()
        .all(|ch| ch.is_ascii_digit() || ch.is_whitespace() || matches!(ch, '-' | '(' | ')'))
}
