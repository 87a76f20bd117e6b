//! Bag-of-characters similarity metrics
//!
//! Each metric builds a [`FrequencyModel`] from the two strings and reduces it
//! to a single score. Character order is ignored. All functions are reentrant
//! and allocate only their own model.

use crate::frequency::FrequencyModel;

/// Length sums below this are treated as zero-magnitude vectors
const MIN_VECTOR_LENGTH: f32 = 1e-6;

/// Cosine similarity of the two character-count vectors
///
/// Two empty strings are identical (1.0). If either string has no
/// characters the score is 0.0.
pub fn cosine_similarity(query: &str, subject: &str) -> f32 {
    let model = FrequencyModel::build(query, subject);
    if model.is_empty() {
        return 1.0;
    }

    let mut inner_prod = 0.0f32;
    let mut length_s = 0.0f32;
    let mut length_q = 0.0f32;
    for (s, q) in model.pairs() {
        let (s, q) = (s as f32, q as f32);
        inner_prod += s * q;
        length_s += s * s;
        length_q += q * q;
    }

    if length_q < MIN_VECTOR_LENGTH || length_s < MIN_VECTOR_LENGTH {
        return 0.0;
    }

    inner_prod / length_q.sqrt() / length_s.sqrt()
}

/// Dice coefficient over the distinct character sets
pub fn dice_similarity(query: &str, subject: &str) -> f32 {
    let model = FrequencyModel::build(query, subject);
    if model.is_empty() {
        return 1.0;
    }

    let mut intersection = 0usize;
    let mut size_s = 0usize;
    let mut size_q = 0usize;
    for (s, q) in model.pairs() {
        if s > 0 && q > 0 {
            intersection += 1;
        }
        if s > 0 {
            size_s += 1;
        }
        if q > 0 {
            size_q += 1;
        }
    }

    2.0 * intersection as f32 / (size_s + size_q) as f32
}

/// Jaccard index over the distinct character sets
pub fn jaccard_similarity(query: &str, subject: &str) -> f32 {
    let model = FrequencyModel::build(query, subject);
    if model.is_empty() {
        return 1.0;
    }

    let intersection = model.pairs().filter(|&(s, q)| s > 0 && q > 0).count();

    intersection as f32 / model.len() as f32
}

/// Euclidean distance between the character-count vectors
pub fn euclidean_distance(query: &str, subject: &str) -> f32 {
    let model = FrequencyModel::build(query, subject);

    model
        .pairs()
        .map(|(s, q)| {
            let d = s as f32 - q as f32;
            d * d
        })
        .sum::<f32>()
        .sqrt()
}
