//! Python bindings for string distance using PyO3

use pyo3::exceptions::{PyMemoryError, PyValueError};
use pyo3::prelude::*;
use crate::edit_distance::EngineConfig;
use crate::error::DistanceError;
use crate::scorer::StringDistance;
use crate::similarity;
use crate::types::Metric;

fn to_py_err(err: DistanceError) -> PyErr {
    if err.is_out_of_memory() {
        PyMemoryError::new_err(err.to_string())
    } else {
        PyValueError::new_err(err.to_string())
    }
}

#[pyfunction]
pub fn py_cosine_similarity(query: &str, subject: &str) -> f32 {
    similarity::cosine_similarity(query, subject)
}

#[pyfunction]
pub fn py_dice_similarity(query: &str, subject: &str) -> f32 {
    similarity::dice_similarity(query, subject)
}

#[pyfunction]
pub fn py_jaccard_similarity(query: &str, subject: &str) -> f32 {
    similarity::jaccard_similarity(query, subject)
}

#[pyfunction]
pub fn py_euclidean_distance(query: &str, subject: &str) -> f32 {
    similarity::euclidean_distance(query, subject)
}

/// Python wrapper for the string distance scorer
#[pyclass]
pub struct PyStringDistance {
    inner: StringDistance,
}

#[pymethods]
impl PyStringDistance {
    #[new]
    #[pyo3(signature = (max_scratch_bytes=None))]
    fn new(max_scratch_bytes: Option<usize>) -> Self {
        let mut config = EngineConfig::default();
        if let Some(limit) = max_scratch_bytes {
            config.max_scratch_bytes = limit;
        }
        Self {
            inner: StringDistance::with_config(config),
        }
    }

    fn cosine_similarity(&self, query: &str, subject: &str) -> f32 {
        self.inner.cosine_similarity(query, subject)
    }

    fn dice_similarity(&self, query: &str, subject: &str) -> f32 {
        self.inner.dice_similarity(query, subject)
    }

    fn jaccard_similarity(&self, query: &str, subject: &str) -> f32 {
        self.inner.jaccard_similarity(query, subject)
    }

    fn euclidean_distance(&self, query: &str, subject: &str) -> f32 {
        self.inner.euclidean_distance(query, subject)
    }

    /// Weighted edit distance; the GIL is released while the DP runs
    fn edit_distance(&self, py: Python<'_>, query: &str, subject: &str) -> PyResult<f32> {
        py.allow_threads(|| self.inner.edit_distance(query, subject))
            .map_err(to_py_err)
    }

    fn levenshtein_distance(&self, py: Python<'_>, query: &str, subject: &str) -> PyResult<f32> {
        self.edit_distance(py, query, subject)
    }

    /// Score one pair by metric name, returned as a JSON object string
    fn score(&self, py: Python<'_>, metric: &str, query: &str, subject: &str) -> PyResult<String> {
        let metric: Metric = metric.parse().map_err(to_py_err)?;
        let score = py
            .allow_threads(|| self.inner.score(metric, query, subject))
            .map_err(to_py_err)?;
        serde_json::to_string(&score)
            .map_err(|e| PyValueError::new_err(format!("Failed to serialize score: {}", e)))
    }

    /// Current edit distance scratch buffer size in bytes
    fn scratch_capacity(&self) -> usize {
        self.inner.engine().scratch_capacity()
    }
}
