//! Branch-and-bound search for the word pairs with the most distinct
//! letters combined.
//!
//! Profiles are sorted descending by per-word uniqueness, which makes two
//! prunes sound: the outer loop stops once a word's own uniqueness falls
//! below what the best pair demands of it even when partnered with the
//! globally best single word, and the inner loop stops once the summed
//! uniqueness of the current pair can no longer reach the running best.
//! Both prunes compare with strict `<`, so pairs tying the maximum are
//! never skipped.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU32, Ordering};

use itertools::Itertools;
use rayon::prelude::*;

use crate::error::MuhkeusError;
use crate::profile::{popcount, WordProfile};

/// All pairs tied for the maximum combined uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestPairs {
    /// Combined uniqueness achieved by every pair in `pairs`.
    pub uniqueness: u32,
    /// Canonical `(lower index, higher index)` word-index pairs.
    pub pairs: BTreeSet<(usize, usize)>,
}

impl BestPairs {
    fn new() -> Self {
        BestPairs {
            uniqueness: 0,
            pairs: BTreeSet::new(),
        }
    }

    /// Merge two accumulators by the reset/extend rules of the search:
    /// the strictly better one wins outright, equals pool their ties.
    fn merge(mut self, mut other: Self) -> Self {
        if other.uniqueness > self.uniqueness {
            other
        } else {
            if other.uniqueness == self.uniqueness {
                self.pairs.append(&mut other.pairs);
            }
            self
        }
    }
}

fn canonical(i: usize, j: usize) -> (usize, usize) {
    if i <= j {
        (i, j)
    } else {
        (j, i)
    }
}

fn by_descending_uniqueness(profiles: &[WordProfile]) -> Vec<WordProfile> {
    profiles
        .iter()
        .copied()
        .sorted_by(|a, b| b.uniqueness.cmp(&a.uniqueness))
        .collect_vec()
}

/// Find every pair of distinct words whose union of letters is maximal.
///
/// Self-pairs are excluded and each unordered pair is reported once, lower
/// index first. An empty profile list has no first sorted element to bound
/// with and is rejected up front.
pub fn find_best_pairs(profiles: &[WordProfile]) -> Result<BestPairs, MuhkeusError> {
    let sorted = by_descending_uniqueness(profiles);
    let max_single = sorted.first().ok_or(MuhkeusError::EmptyCorpus)?.uniqueness;

    let mut best = BestPairs::new();
    let mut min_required = 0u32;

    for w1 in &sorted {
        if w1.uniqueness < min_required {
            break;
        }
        for w2 in &sorted {
            if w1.uniqueness + w2.uniqueness < best.uniqueness {
                break;
            }
            if w1.index == w2.index {
                continue;
            }
            let pair_uniqueness = popcount(w1.mask | w2.mask);
            if pair_uniqueness > best.uniqueness {
                best.uniqueness = pair_uniqueness;
                best.pairs.clear();
                best.pairs.insert(canonical(w1.index, w2.index));
                // Even paired with the best single word, a later word must
                // carry at least this much on its own.
                min_required = best.uniqueness.saturating_sub(max_single);
            } else if pair_uniqueness == best.uniqueness {
                best.pairs.insert(canonical(w1.index, w2.index));
            }
        }
    }
    Ok(best)
}

/// Parallel variant of [`find_best_pairs`] with identical output.
///
/// Outer iterations fan out across the rayon pool. The running best is a
/// shared monotone high-water mark; since both prunes stay strict, every
/// pair tying the final maximum survives in some worker's accumulator and
/// the merge keeps exactly the tied set, regardless of scheduling.
pub fn find_best_pairs_par(profiles: &[WordProfile]) -> Result<BestPairs, MuhkeusError> {
    let sorted = by_descending_uniqueness(profiles);
    let max_single = sorted.first().ok_or(MuhkeusError::EmptyCorpus)?.uniqueness;
    let high_water = AtomicU32::new(0);

    let best = sorted
        .par_iter()
        .map(|w1| {
            let mut local = BestPairs::new();
            let bound = high_water.load(Ordering::Relaxed);
            if w1.uniqueness < bound.saturating_sub(max_single) {
                return local;
            }
            for w2 in &sorted {
                if w1.uniqueness + w2.uniqueness < high_water.load(Ordering::Relaxed) {
                    break;
                }
                if w1.index == w2.index {
                    continue;
                }
                let pair_uniqueness = popcount(w1.mask | w2.mask);
                if pair_uniqueness > local.uniqueness {
                    local.uniqueness = pair_uniqueness;
                    local.pairs.clear();
                    local.pairs.insert(canonical(w1.index, w2.index));
                    high_water.fetch_max(pair_uniqueness, Ordering::Relaxed);
                } else if pair_uniqueness == local.uniqueness {
                    local.pairs.insert(canonical(w1.index, w2.index));
                }
            }
            local
        })
        .reduce(BestPairs::new, BestPairs::merge);

    Ok(best)
}
