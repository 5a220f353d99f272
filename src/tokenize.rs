//! Distinct-word extraction from normalized text.

use itertools::Itertools;

use crate::normalize::SEPARATOR;

/// Collect the distinct words of normalized text into a fixed order.
///
/// The returned order is lexicographic and every later stage's word index
/// refers into it, so it must not change for the rest of the run. Runs of
/// separators produce no tokens; an empty or all-separator corpus yields
/// an empty list, which the search stage rejects.
pub fn unique_words(text: &str) -> Vec<String> {
    text.split(SEPARATOR)
        .filter(|token| !token.is_empty())
        .sorted()
        .dedup()
        .map(str::to_owned)
        .collect_vec()
}
