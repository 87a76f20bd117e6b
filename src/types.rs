//! Core data types for scoring results

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DistanceError;

/// One of the five scoring functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Cosine,
    Dice,
    Jaccard,
    Euclidean,
    Edit,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Cosine,
        Metric::Dice,
        Metric::Jaccard,
        Metric::Euclidean,
        Metric::Edit,
    ];

    /// Short name, identical to the serde representation
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Cosine => "cosine",
            Metric::Dice => "dice",
            Metric::Jaccard => "jaccard",
            Metric::Euclidean => "euclidean",
            Metric::Edit => "edit",
        }
    }

    /// Higher is closer for similarities, lower is closer for distances
    pub fn is_similarity(&self) -> bool {
        matches!(self, Metric::Cosine | Metric::Dice | Metric::Jaccard)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let metric = match s.trim().to_ascii_lowercase().as_str() {
            "cosine" | "cosine_similarity" => Metric::Cosine,
            "dice" | "dice_similarity" => Metric::Dice,
            "jaccard" | "jaccard_similarity" => Metric::Jaccard,
            "euclidean" | "euclidean_distance" => Metric::Euclidean,
            "edit" | "edit_distance" | "levenshtein" | "levenshtein_distance" => Metric::Edit,
            _ => return Err(DistanceError::UnknownMetric(s.to_string())),
        };
        Ok(metric)
    }
}

/// A single scoring result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub metric: Metric,
    pub query: String,
    pub subject: String,
    pub value: f32,
}

impl Score {
    pub fn new(metric: Metric, query: &str, subject: &str, value: f32) -> Self {
        Self {
            metric,
            query: query.to_string(),
            subject: subject.to_string(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("cosine".parse::<Metric>().unwrap(), Metric::Cosine);
        assert_eq!("Dice_Similarity".parse::<Metric>().unwrap(), Metric::Dice);
        assert_eq!(" jaccard ".parse::<Metric>().unwrap(), Metric::Jaccard);
        assert_eq!("euclidean_distance".parse::<Metric>().unwrap(), Metric::Euclidean);
        assert_eq!("levenshtein_distance".parse::<Metric>().unwrap(), Metric::Edit);
    }

    #[test]
    fn test_parse_unknown() {
        match "hamming".parse::<Metric>() {
            Err(DistanceError::UnknownMetric(name)) => assert_eq!(name, "hamming"),
            other => panic!("Expected unknown metric, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_names_match_display() {
        for metric in Metric::ALL {
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric));
            let back: Metric = serde_json::from_str(&json).unwrap();
            assert_eq!(back, metric);
        }
    }

    #[test]
    fn test_score_json_shape() {
        let score = Score::new(Metric::Jaccard, "abc", "abd", 0.5);
        let value: serde_json::Value = serde_json::to_value(&score).unwrap();
        assert_eq!(value["metric"], "jaccard");
        assert_eq!(value["query"], "abc");
        assert_eq!(value["subject"], "abd");
        assert_eq!(value["value"], 0.5);
    }

    #[test]
    fn test_similarity_direction() {
        assert!(Metric::Cosine.is_similarity());
        assert!(!Metric::Euclidean.is_similarity());
        assert!(!Metric::Edit.is_similarity());
    }
}
