//! String distance facade - one object exposing every metric

use crate::edit_distance::{EditDistanceEngine, EngineConfig};
use crate::error::Result;
use crate::similarity;
use crate::types::{Metric, Score};

/// Scores a query string against subject strings
///
/// The four bag-of-characters metrics need no state. Edit distance goes
/// through the owned [`EditDistanceEngine`] and its shared scratch buffer.
#[derive(Debug, Default)]
pub struct StringDistance {
    engine: EditDistanceEngine,
}

impl StringDistance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: EditDistanceEngine::with_config(config),
        }
    }

    pub fn engine(&self) -> &EditDistanceEngine {
        &self.engine
    }

    pub fn cosine_similarity(&self, query: &str, subject: &str) -> f32 {
        similarity::cosine_similarity(query, subject)
    }

    pub fn dice_similarity(&self, query: &str, subject: &str) -> f32 {
        similarity::dice_similarity(query, subject)
    }

    pub fn jaccard_similarity(&self, query: &str, subject: &str) -> f32 {
        similarity::jaccard_similarity(query, subject)
    }

    pub fn euclidean_distance(&self, query: &str, subject: &str) -> f32 {
        similarity::euclidean_distance(query, subject)
    }

    pub fn edit_distance(&self, query: &str, subject: &str) -> Result<f32> {
        self.engine.distance(query, subject)
    }

    /// Alias for [`StringDistance::edit_distance`]
    pub fn levenshtein_distance(&self, query: &str, subject: &str) -> Result<f32> {
        self.edit_distance(query, subject)
    }

    /// Score one pair with the chosen metric
    pub fn score(&self, metric: Metric, query: &str, subject: &str) -> Result<Score> {
        let value = match metric {
            Metric::Cosine => self.cosine_similarity(query, subject),
            Metric::Dice => self.dice_similarity(query, subject),
            Metric::Jaccard => self.jaccard_similarity(query, subject),
            Metric::Euclidean => self.euclidean_distance(query, subject),
            Metric::Edit => self.edit_distance(query, subject)?,
        };
        Ok(Score::new(metric, query, subject, value))
    }
}
