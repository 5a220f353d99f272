//! Find the word pairs of a text corpus that together use the most
//! distinct letters.
//!
//! The pipeline runs strictly forward: raw bytes are normalized into
//! lowercase separator-delimited text, the distinct words are collected
//! into a fixed-order list, every word is reduced to a letter-presence
//! bitmask, and a branch-and-bound search over the masks returns the set
//! of all pairs tied for the maximum combined letter count.

pub mod error;
pub mod normalize;
pub mod profile;
pub mod search;
pub mod tokenize;

pub use error::MuhkeusError;
pub use normalize::{display_form, normalize, SEPARATOR};
pub use profile::{
    letter_mask, popcount, popcount_portable, word_profiles, WordProfile, ALPHABET_BITS,
    LETTER_MASK,
};
pub use search::{find_best_pairs, find_best_pairs_par, BestPairs};
pub use tokenize::unique_words;
