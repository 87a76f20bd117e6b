//! Error types for distance computation

use thiserror::Error;

/// Errors raised while scoring strings
///
/// The frequency-based metrics are total; only the edit-distance engine
/// (which owns a growable scratch buffer) and metric name parsing can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// Scratch growth would exceed the engine's configured ceiling
    #[error("scratch buffer request of {requested} bytes exceeds limit of {limit} bytes")]
    OutOfMemory { requested: usize, limit: usize },

    /// The allocator refused to grow the scratch buffer
    #[error("failed to allocate {bytes} bytes of scratch memory")]
    AllocationFailed { bytes: usize },

    #[error("unknown metric: {0}")]
    UnknownMetric(String),
}

impl DistanceError {
    /// True for the resource-exhaustion variants
    pub fn is_out_of_memory(&self) -> bool {
        matches!(
            self,
            DistanceError::OutOfMemory { .. } | DistanceError::AllocationFailed { .. }
        )
    }
}

/// Result type for distance operations
pub type Result<T> = std::result::Result<T, DistanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_memory_message() {
        let err = DistanceError::OutOfMemory { requested: 1024, limit: 512 };
        assert_eq!(
            err.to_string(),
            "scratch buffer request of 1024 bytes exceeds limit of 512 bytes"
        );
        assert!(err.is_out_of_memory());
    }

    #[test]
    fn test_unknown_metric_is_not_oom() {
        let err = DistanceError::UnknownMetric("hamming".to_string());
        assert!(!err.is_out_of_memory());
        assert_eq!(err.to_string(), "unknown metric: hamming");
    }
}
