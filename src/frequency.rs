//! Per-character frequency model shared by the bag-of-characters metrics

use ahash::AHashMap;

/// Occurrence counts of every character appearing in either string
///
/// Keys are Unicode scalar values; each entry holds
/// `(subject_count, query_count)`. No entry has both counts at zero.
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel {
    counts: AHashMap<char, (u32, u32)>,
}

impl FrequencyModel {
    /// Build the model in O(s + q)
    pub fn build(query: &str, subject: &str) -> Self {
        let mut counts: AHashMap<char, (u32, u32)> = AHashMap::new();

        for c in subject.chars() {
            counts.entry(c).or_default().0 += 1;
        }
        for c in query.chars() {
            counts.entry(c).or_default().1 += 1;
        }

        Self { counts }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct characters across both strings
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `(subject_count, query_count)` for a character, zero if absent
    #[cfg(test)]
    fn get(&self, c: char) -> (u32, u32) {
        self.counts.get(&c).copied().unwrap_or((0, 0))
    }

    #[cfg(test)]
    fn iter(&self) -> impl Iterator<Item = (char, u32, u32)> + '_ {
        self.counts.iter().map(|(&c, &(s, q))| (c, s, q))
    }

    /// Count pair values only, for the metrics that ignore the key
    pub fn pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.values().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs() {
        let model = FrequencyModel::build("", "");
        assert!(model.is_empty());
        assert_eq!(model.len(), 0);
    }

    #[test]
    fn test_counts_per_side() {
        let model = FrequencyModel::build("abb", "bcc");
        assert_eq!(model.len(), 3);
        assert_eq!(model.get('a'), (0, 1));
        assert_eq!(model.get('b'), (1, 2));
        assert_eq!(model.get('c'), (2, 0));
        assert_eq!(model.get('z'), (0, 0));
    }

    #[test]
    fn test_no_zero_entries() {
        let model = FrequencyModel::build("hello", "world");
        assert!(model.iter().all(|(_, s, q)| s > 0 || q > 0));
    }

    #[test]
    fn test_counts_code_points_not_bytes() {
        // Each CJK character is three UTF-8 bytes but one key
        let model = FrequencyModel::build("秀春刀", "秀春刀·修罗战场");
        assert_eq!(model.get('秀'), (1, 1));
        assert_eq!(model.get('·'), (1, 0));
        assert_eq!(model.len(), 8);
        let total_subject: u32 = model.pairs().map(|(s, _)| s).sum();
        assert_eq!(total_subject, 8);
    }
}
