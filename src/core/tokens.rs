/// Tokens longer than this many characters count toward overlap
const SIGNIFICANT_TOKEN_LEN: usize = 3;

/// Split a free-text field into whitespace-delimited tokens
///
/// Case is preserved exactly as provided; there is no stemming or
/// locale handling. Scores are only comparable across releases if
/// this stays literal.
#[inline]
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Whether a token is significant enough to count toward overlap
///
/// Filters short noise words ("a", "the", "und") out of the numerator.
#[inline]
pub fn is_significant(token: &str) -> bool {
    token.chars().count() > SIGNIFICANT_TOKEN_LEN
}

/// Token-overlap score (0-100) between two free-text fields
///
/// Counts the left side's significant tokens that appear anywhere in the
/// right side's full token list, then divides by the larger of the two
/// full token-list lengths. Only the numerator is asymmetric: short
/// tokens on the left never count, but they can still be matched on the
/// right. Empty text on either side scores 0.
pub fn overlap_score(a_text: &str, b_text: &str) -> f64 {
    if a_text.is_empty() || b_text.is_empty() {
        return 0.0;
    }

    let a_tokens = tokenize(a_text);
    let b_tokens = tokenize(b_text);

    let larger = a_tokens.len().max(b_tokens.len());
    if larger == 0 {
        return 0.0;
    }

    let shared = a_tokens
        .iter()
        .filter(|t| is_significant(t) && b_tokens.contains(t))
        .count();

    shared as f64 / larger as f64 * 100.0
}
