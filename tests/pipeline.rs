use std::collections::BTreeSet;

use muhkeus::{
    display_form, find_best_pairs, letter_mask, normalize, popcount, unique_words, word_profiles,
    BestPairs, MuhkeusError,
};

fn search_corpus(raw: &[u8]) -> (Vec<String>, BestPairs) {
    let words = unique_words(&normalize(raw));
    let profiles = word_profiles(&words);
    let best = find_best_pairs(&profiles).expect("corpus has words");
    (words, best)
}

#[test]
fn cat_dog_pair_uses_six_letters() {
    let (words, best) = search_corpus(b"cat dog");
    assert_eq!(words, ["cat", "dog"]);
    assert_eq!(best.uniqueness, 6);
    assert_eq!(best.pairs, BTreeSet::from([(0, 1)]));
}

#[test]
fn overlapping_letters_count_once_per_pair() {
    let (words, best) = search_corpus(b"abc abd");
    assert_eq!(words, ["abc", "abd"]);
    assert_eq!(best.uniqueness, 4);
    assert_eq!(best.pairs, BTreeSet::from([(0, 1)]));
}

#[test]
fn ties_accumulate_every_best_pair() {
    let (_, best) = search_corpus(b"ab cd ef");
    assert_eq!(best.uniqueness, 4);
    assert_eq!(best.pairs, BTreeSet::from([(0, 1), (0, 2), (1, 2)]));
}

#[test]
fn repeated_word_collapses_and_cannot_pair_with_itself() {
    let (words, best) = search_corpus(b"aa aa");
    assert_eq!(words, ["aa"]);
    assert_eq!(best.uniqueness, 0);
    assert!(best.pairs.is_empty());
}

#[test]
fn empty_corpus_is_rejected_before_the_search() {
    let words = unique_words(&normalize(b""));
    assert!(words.is_empty());
    let err = find_best_pairs(&word_profiles(&words)).unwrap_err();
    assert!(matches!(err, MuhkeusError::EmptyCorpus));
}

#[test]
fn pangram_word_wins_outright() {
    let mask = letter_mask("abcdefghijklmnopqrstuvwxyz");
    assert_eq!(mask, 0x03FF_FFFF);
    assert_eq!(popcount(mask), 26);

    let (words, best) = search_corpus(b"abcdefghijklmnopqrstuvwxyz zzz cab");
    assert_eq!(best.uniqueness, 26);
    // Both shorter words add nothing beyond the pangram, so both pairings tie.
    assert_eq!(best.pairs.len(), 2);
    for &(i, j) in &best.pairs {
        assert!(words[i] == "abcdefghijklmnopqrstuvwxyz" || words[j] == "abcdefghijklmnopqrstuvwxyz");
    }
}

#[test]
fn legacy_accent_bytes_become_scoring_letters() {
    let (words, best) = search_corpus(b"h\xA4n sy\xB6");
    assert_eq!(words, ["h{n", "sy|"]);
    // h, ä, n, s, y, ö: six distinct letters across the pair.
    assert_eq!(best.uniqueness, 6);
    assert_eq!(display_form(&words[0]), "hän");
    assert_eq!(display_form(&words[1]), "syö");
}

#[test]
fn utf8_corpus_folds_to_the_same_words_as_legacy_bytes() {
    let from_utf8 = unique_words(&normalize("Hän syö åtta".as_bytes()));
    let from_legacy = unique_words(&normalize(b"H\x84n sy\xB6 \x85tta"));
    assert_eq!(from_utf8, from_legacy);
    assert_eq!(from_utf8, ["h{n", "sy|", "}tta"]);
}

#[test]
fn newlines_and_apostrophes_follow_the_normalizer_contract() {
    let (words, _) = search_corpus(b"vaa'asta\nvaaasta");
    assert_eq!(words, ["vaaasta"]);
}
