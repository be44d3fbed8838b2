//! Final transcription assembly
//!
//! Walks the phoneme sequence once, emitting the mapped IPA segments with
//! stress and syllable-boundary markers at the syllable starts computed by
//! the syllabifier, inside the configured brackets. Output is NFD.

use crate::core::phoneme::{Phoneme, Stress};
use unicode_normalization::UnicodeNormalization;

/// IPA primary stress marker
pub const PRIMARY_STRESS: &str = "ˈ";
/// IPA secondary stress marker
pub const SECONDARY_STRESS: &str = "ˌ";
/// Default syllable boundary marker
pub const SYLLABLE_MARKER: &str = ".";
/// Default transcription brackets
pub const BRACKETS: (&str, &str) = ("/", "/");

/// Output styling (brackets and boundary marker)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub left_bracket: String,
    pub right_bracket: String,
    pub syllable_marker: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            left_bracket: BRACKETS.0.to_string(),
            right_bracket: BRACKETS.1.to_string(),
            syllable_marker: SYLLABLE_MARKER.to_string(),
        }
    }
}

/// Build the delimited IPA transcription string.
///
/// `breaks` are the second-and-later syllable start positions from the
/// syllabifier; `segments` are the mapper outputs, one per phoneme. A
/// syllable whose nucleus bears stress digit 1/2 is prefixed with ˈ/ˌ in
/// place of the boundary marker; unstressed interior syllables get the
/// plain marker. Monosyllables carry no markers at all, so `K AE1 T`
/// assembles to `/kæt/`.
pub fn assemble(sequence: &[Phoneme], breaks: &[usize], segments: &[&str], style: &Style) -> String {
    debug_assert_eq!(sequence.len(), segments.len());

    let vowel_count = sequence.iter().filter(|p| p.is_vowel()).count();
    let multi_syllable = vowel_count > 1;

    let mut output = String::new();
    output.push_str(&style.left_bracket);

    let mut next_break = breaks.iter().copied().peekable();
    for (index, segment) in segments.iter().enumerate() {
        let starts_syllable = index == 0 || next_break.peek() == Some(&index);
        if starts_syllable {
            if next_break.peek() == Some(&index) {
                next_break.next();
            }
            if multi_syllable {
                output.push_str(syllable_prefix(sequence, breaks, index, style));
            }
        }
        output.push_str(segment);
    }

    output.push_str(&style.right_bracket);
    output.nfd().collect()
}

/// Marker emitted before the syllable starting at `start`: the nucleus
/// stress mark if stressed, otherwise the boundary marker (suppressed at
/// the word edge).
fn syllable_prefix<'a>(
    sequence: &[Phoneme],
    breaks: &[usize],
    start: usize,
    style: &'a Style,
) -> &'a str {
    let end = breaks
        .iter()
        .copied()
        .find(|&b| b > start)
        .unwrap_or(sequence.len());
    let stress = sequence[start..end].iter().find_map(|p| p.stress());
    match stress {
        Some(Stress::Primary) => PRIMARY_STRESS,
        Some(Stress::Secondary) => SECONDARY_STRESS,
        _ if start > 0 => &style.syllable_marker,
        _ => "",
    }
}
