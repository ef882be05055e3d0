use super::challenge::Challenge;

/// Trim surrounding whitespace and lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Exact match after normalizing both sides. No partial credit.
pub fn evaluate(raw_input: &str, challenge: &Challenge) -> bool {
    normalize(raw_input) == challenge.expected_answer.to_lowercase()
}
