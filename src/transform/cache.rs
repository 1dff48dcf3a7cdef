// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact-sequence transformation cache.
//!
//! Only full sequences are cached: a miss is evaluated from the base point
//! set, not from a cached prefix. Entries are written once and never evicted
//! for the lifetime of the cache, which is one run.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use triangle_orbits::variants::Variant;
//! use triangle_orbits::sequence::Sequence;
//! use triangle_orbits::state::Counters;
//! use triangle_orbits::transform::TransformCache;
//!
//! let variant = Variant::Standard;
//! let alphabet = variant.alphabet().unwrap();
//! let seed = variant.seed().point_set().unwrap();
//! let seq = Sequence::parse("ABD", &alphabet).unwrap();
//!
//! let mut cache = TransformCache::new();
//! let first = cache.apply(&seq, &seed, &alphabet).unwrap();
//! let again = cache.apply(&seq, &seed, &alphabet).unwrap();
//! assert!(Arc::ptr_eq(&first, &again));
//! assert_eq!(cache.statistics().get(Counters::Multiplications), 3);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::geometry::PointSet;
use crate::sequence::Sequence;
use crate::state::{Counters, Statistics};

/// Cache from exact sequence to its transformed point set.
///
/// The cache assumes one alphabet and one base point set for its whole
/// lifetime; mixing bases in one cache returns stale results.
#[derive(Debug, Default)]
pub struct TransformCache {
    entries: HashMap<Sequence, Arc<PointSet>>,
    statistics: Statistics,
}

impl TransformCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the point set for `sequence` applied to `base`.
    ///
    /// A hit returns the stored allocation and performs no multiplication.
    /// A miss folds the labels over `base`, stores the result under the full
    /// sequence and returns it. An unknown label fails without storing
    /// anything.
    pub fn apply(
        &mut self,
        sequence: &Sequence,
        base: &PointSet,
        alphabet: &Alphabet,
    ) -> Result<Arc<PointSet>> {
        if let Some(points) = self.entries.get(sequence) {
            self.statistics.increment(Counters::CacheHits);
            return Ok(Arc::clone(points));
        }
        self.statistics.increment(Counters::CacheMisses);

        // Resolve every label first so a bad sequence costs no work.
        let matrices = sequence
            .labels()
            .iter()
            .map(|&label| alphabet.matrix(label))
            .collect::<Result<Vec<_>>>()?;

        let mut result = base.clone();
        for matrix in matrices {
            result = result.transformed_by(matrix);
            self.statistics.increment(Counters::Multiplications);
        }

        let result = Arc::new(result);
        self.entries.insert(sequence.clone(), Arc::clone(&result));
        Ok(result)
    }

    /// Look up a sequence without evaluating it.
    pub fn get(&self, sequence: &Sequence) -> Option<&Arc<PointSet>> {
        self.entries.get(sequence)
    }

    /// Number of cached sequences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub(crate) fn statistics_mut(&mut self) -> &mut Statistics {
        &mut self.statistics
    }
}
