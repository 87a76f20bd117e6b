//! String distance - character-level similarity and distance scoring
//!
//! Scores a query string against a subject string for ranking use cases.
//! Cosine, dice, jaccard and euclidean treat the strings as bags of
//! characters; edit distance is a weighted Levenshtein computed with a
//! reusable scratch buffer.

pub mod types;
pub mod error;
pub mod frequency;
pub mod similarity;
pub mod edit_distance;
pub mod scorer;

pub use types::*;
pub use error::*;
pub use frequency::FrequencyModel;
pub use similarity::*;
pub use edit_distance::{EditDistanceEngine, EngineConfig, MODIFY_COST, REMOVE_COST};
pub use scorer::*;

// Python bindings
#[cfg(feature = "extension-module")]
pub mod py;

#[cfg(feature = "extension-module")]
use pyo3::prelude::*;

#[cfg(feature = "extension-module")]
#[pymodule]
fn string_distance(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;
    m.add_class::<PyStringDistance>()?;
    m.add_function(wrap_pyfunction!(py_cosine_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(py_dice_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(py_jaccard_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(py_euclidean_distance, m)?)?;
    Ok(())
}
