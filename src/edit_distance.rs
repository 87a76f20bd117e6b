//! Weighted edit distance with a reusable two-row scratch buffer
//!
//! Substituting a character costs [`MODIFY_COST`]; inserting or removing one
//! costs [`REMOVE_COST`]. Only two DP rows are live at a time, stored back to
//! back in one flat buffer and selected by a parity flag. The buffer belongs to
//! the engine, grows on demand and never shrinks, so calls on one engine are
//! serialized by a mutex.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::mem::size_of;
use tracing::{debug, warn};

use crate::error::{DistanceError, Result};

/// Cost of inserting or removing one character
pub const REMOVE_COST: f32 = 2.0;
/// Cost of substituting one character for a different one
pub const MODIFY_COST: f32 = 5.0;

pub const DEFAULT_MIN_SCRATCH_BYTES: usize = 512;
pub const DEFAULT_MAX_SCRATCH_BYTES: usize = 256 * 1024 * 1024;

const CELL_BYTES: usize = size_of::<f32>();

/// Scratch buffer limits for an [`EditDistanceEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// First size tried on growth; doubled until the request fits
    pub min_scratch_bytes: usize,
    /// Requests above this fail with [`DistanceError::OutOfMemory`]
    pub max_scratch_bytes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_scratch_bytes: DEFAULT_MIN_SCRATCH_BYTES,
            max_scratch_bytes: DEFAULT_MAX_SCRATCH_BYTES,
        }
    }
}

#[derive(Debug, Default)]
struct ScratchBuffer {
    cells: Vec<f32>,
}

impl ScratchBuffer {
    fn capacity_bytes(&self) -> usize {
        self.cells.len() * CELL_BYTES
    }

    /// Make room for at least `bytes`, growing by doubling from the minimum
    fn ensure(&mut self, bytes: usize, config: &EngineConfig) -> Result<()> {
        let current = self.capacity_bytes();
        if current >= bytes {
            return Ok(());
        }

        if bytes > config.max_scratch_bytes {
            warn!(
                requested = bytes,
                limit = config.max_scratch_bytes,
                "edit distance scratch request exceeds limit"
            );
            return Err(DistanceError::OutOfMemory {
                requested: bytes,
                limit: config.max_scratch_bytes,
            });
        }

        // Old contents are scratch; release before allocating the larger block
        self.cells = Vec::new();

        let mut size = config.min_scratch_bytes.max(CELL_BYTES);
        while size < bytes {
            size = size.saturating_mul(2);
        }
        let size = size.min(config.max_scratch_bytes);
        let len = size / CELL_BYTES;

        let mut cells = Vec::new();
        if cells.try_reserve_exact(len).is_err() {
            warn!(bytes = size, "edit distance scratch allocation failed");
            return Err(DistanceError::AllocationFailed { bytes: size });
        }
        cells.resize(len, 0.0);
        self.cells = cells;

        debug!(
            old_bytes = current,
            new_bytes = self.capacity_bytes(),
            requested = bytes,
            "grew edit distance scratch buffer"
        );
        Ok(())
    }
}

/// `None` is the absent character on the insert/remove edges
#[inline]
fn char_dist(x: Option<char>, y: Option<char>) -> f32 {
    match (x, y) {
        _ if x == y => 0.0,
        (None, _) | (_, None) => REMOVE_COST,
        _ => MODIFY_COST,
    }
}

/// Weighted edit distance engine
///
/// Safe to share between threads; concurrent calls on the same instance block
/// until the in-flight computation releases the scratch buffer. Use separate
/// instances for parallel work.
#[derive(Debug, Default)]
pub struct EditDistanceEngine {
    config: EngineConfig,
    scratch: Mutex<ScratchBuffer>,
}

impl EditDistanceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            scratch: Mutex::new(ScratchBuffer::default()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current scratch buffer size in bytes
    pub fn scratch_capacity(&self) -> usize {
        self.scratch.lock().capacity_bytes()
    }

    /// Minimum weighted cost to turn `subject` into `query`
    ///
    /// Runs in O(s·q) time using 2·q cells of scratch. Fails only when the
    /// scratch buffer cannot grow to that size.
    pub fn distance(&self, query: &str, subject: &str) -> Result<f32> {
        let query: Vec<char> = query.chars().collect();
        let subject: Vec<char> = subject.chars().collect();
        let l1 = subject.len();
        let l2 = query.len();

        // Distance from the empty prefix; no rows to compute
        if l1 == 0 || l2 == 0 {
            return Ok(l1.max(l2) as f32 * REMOVE_COST);
        }

        let bytes = l2
            .checked_mul(2 * CELL_BYTES)
            .ok_or(DistanceError::OutOfMemory {
                requested: usize::MAX,
                limit: self.config.max_scratch_bytes,
            })?;

        let mut scratch = self.scratch.lock();
        scratch.ensure(bytes, &self.config)?;
        let dp = &mut scratch.cells[..2 * l2];

        let mut curr = 0usize;
        let mut prev = 1usize;

        for i in 0..l1 {
            curr = 1 - curr;
            prev = 1 - prev;

            for j in 0..l2 {
                let diag = if i > 0 && j > 0 {
                    dp[prev * l2 + j - 1]
                } else {
                    i.max(j) as f32 * REMOVE_COST
                };
                let left = if j > 0 {
                    dp[curr * l2 + j - 1]
                } else {
                    (i + 1) as f32 * REMOVE_COST
                };
                let up = if i > 0 {
                    dp[prev * l2 + j]
                } else {
                    (j + 1) as f32 * REMOVE_COST
                };

                let exchange = char_dist(Some(subject[i]), Some(query[j])) + diag;
                let insert = char_dist(None, Some(query[j])) + left;
                let remove = char_dist(Some(subject[i]), None) + up;

                dp[curr * l2 + j] = exchange.min(insert).min(remove);
            }
        }

        Ok(dp[curr * l2 + l2 - 1])
    }
}
