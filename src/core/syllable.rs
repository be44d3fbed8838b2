//! Maximal-onset syllabification
//!
//! Partitions a phoneme sequence into syllables of exactly one vowel nucleus
//! each, so the assembler knows where boundary and stress markers go. The
//! segment content itself is never altered here.

use crate::core::error::ConvertError;
use crate::core::phoneme::Phoneme;
use lazy_static::lazy_static;
use std::collections::HashSet;

/// Consonant clusters attested as syllable onsets in General American
/// English, keyed on space-joined ARPAbet codes. NG never starts a
/// syllable, so it is the one single consonant missing from the table.
const ONSET_CLUSTERS: &[&str] = &[
    // Single consonants
    "B", "CH", "D", "DH", "F", "G", "HH", "JH", "K", "L", "M", "N", "P", "R", "S", "SH", "T",
    "TH", "V", "W", "Y", "Z", "ZH",
    // Stop + liquid
    "P R", "P L", "B R", "B L", "T R", "D R", "K R", "K L", "G R", "G L",
    // Stop + glide
    "T W", "D W", "K W", "G W", "P Y", "B Y", "T Y", "D Y", "K Y", "G Y",
    // Fricative + liquid/glide
    "F R", "F L", "F Y", "V Y", "TH R", "TH W", "SH R", "HH Y",
    // Nasal + glide
    "M Y", "N Y",
    // S + obstruent/sonorant
    "S P", "S T", "S K", "S M", "S N", "S L", "S W", "S F",
    // S + stop + liquid/glide
    "S P R", "S P L", "S P Y", "S T R", "S T Y", "S K R", "S K W", "S K Y",
];

lazy_static! {
    static ref ONSETS: HashSet<&'static str> = ONSET_CLUSTERS.iter().copied().collect();
}

/// Whether a consonant cluster is an attested onset. The empty cluster is
/// legal: a vowel may start a syllable directly (hiatus, or a preceding
/// coda taking the whole cluster).
pub fn is_legal_onset(codes: &[&str]) -> bool {
    codes.is_empty() || ONSETS.contains(codes.join(" ").as_str())
}

/// Compute syllable start positions for a phoneme sequence. Position 0 is
/// implicit; the returned indices are the starts of the second and later
/// syllables, in order.
///
/// Between two nuclei, the following syllable takes the longest suffix of
/// the intervocalic cluster that is a legal onset; the rest closes the
/// preceding syllable. Word-initial and word-final clusters attach to the
/// adjacent syllable, but a word-initial cluster that is not itself a legal
/// onset has no legal assignment at all and is an error. A sequence with no
/// vowel at all forms a single syllable.
pub fn syllable_breaks(sequence: &[Phoneme]) -> Result<Vec<usize>, ConvertError> {
    let nuclei: Vec<usize> = sequence
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_vowel())
        .map(|(i, _)| i)
        .collect();

    let first = match nuclei.first() {
        Some(&first) => first,
        None => return Ok(Vec::new()),
    };

    let codes: Vec<&str> = sequence.iter().map(|p| p.code()).collect();

    if !is_legal_onset(&codes[..first]) {
        return Err(ConvertError::Unsyllabifiable(codes[..first].join(" ")));
    }

    let mut breaks = Vec::with_capacity(nuclei.len() - 1);
    for pair in nuclei.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        // Leftmost legal start gives the longest onset; the nucleus itself
        // (empty onset) always qualifies.
        let mut start = next;
        for candidate in prev + 1..next {
            if is_legal_onset(&codes[candidate..next]) {
                start = candidate;
                break;
            }
        }
        breaks.push(start);
    }
    Ok(breaks)
}
