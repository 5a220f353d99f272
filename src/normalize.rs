//! Corpus normalization and its display-form inverse.
//!
//! The corpus encodes ä, ö and å as single bytes: the final byte of each
//! letter's UTF-8 sequence, so plain UTF-8 text folds the same way (the
//! `0xC3` lead byte is swept out with the rest of the non-letter bytes).
//! They are remapped to `{`, `|` and `}` — ASCII placeholders sorting
//! directly above `z`, untouched by every other rule, so they survive the
//! punctuation sweep and occupy letter slots 26..=28 in the profiler.

/// Word separator in normalized text.
pub const SEPARATOR: char = ' ';

/// Placeholder standing for ä.
pub const A_UMLAUT: char = '{';
/// Placeholder standing for ö.
pub const O_UMLAUT: char = '|';
/// Placeholder standing for å.
pub const A_RING: char = '}';

/// Normalize raw corpus bytes into lowercase separator-delimited text.
///
/// Case folding is ASCII-only byte folding; the accented letters are case
/// folded by the byte table itself. Newlines become separators so line
/// breaks delimit words. Apostrophes are deleted rather than separated,
/// collapsing contracted and possessive forms into a single token, and
/// every remaining byte outside the letter range is dropped: punctuation,
/// digits, control bytes and stray multi-byte leads.
///
/// Total and idempotent; malformed input folds lossily instead of erroring.
pub fn normalize(raw: &[u8]) -> String {
    let mut text = String::with_capacity(raw.len());
    for &byte in raw {
        let mapped = match byte {
            0xA4 | 0x84 => b'{', // ä / Ä
            0xB6 | 0x96 => b'|', // ö / Ö
            0xA5 | 0x85 => b'}', // å / Å
            b'\n' => b' ',
            other => other.to_ascii_lowercase(),
        };
        match mapped {
            b' ' | b'a'..=b'}' => text.push(mapped as char),
            _ => {}
        }
    }
    text
}

/// Expand placeholders back to their UTF-8 letters for display.
///
/// Inverse of the substitution in [`normalize`] on words made of letters
/// and placeholders.
pub fn display_form(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            A_UMLAUT => out.push('ä'),
            O_UMLAUT => out.push('ö'),
            A_RING => out.push('å'),
            other => out.push(other),
        }
    }
    out
}
