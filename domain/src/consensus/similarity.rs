//! Edit-distance similarity between responder answers

/// Answers scoring strictly above this are treated as the same answer.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

/// `1 - levenshtein(a, b) / max(len(a), len(b))`, in [0, 1].
///
/// Lengths count Unicode scalar values. Two empty strings are identical.
///
/// ```
/// use swarm_domain::consensus::similarity;
///
/// assert_eq!(similarity("", ""), 1.0);
/// assert_eq!(similarity("abcd", "abcx"), 0.75);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Whether two answers belong in the same cluster
pub fn are_similar(a: &str, b: &str) -> bool {
    similarity(a, b) > SIMILARITY_THRESHOLD
}
