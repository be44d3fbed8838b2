//! ARPAbet code -> IPA segment mapping
//!
//! The match table below is the authoritative phoneme correspondence chart
//! for this converter: one row per ARPAbet code, General American values.

use crate::core::error::ConvertError;
use crate::core::phoneme::{Phoneme, Stress};

/// Map one phoneme to its IPA segment.
///
/// Vowel segments depend on the stress digit only for the two reduced
/// vowels: unstressed AH -> ə and unstressed ER -> ɚ. Every other code maps
/// to the same segment regardless of stress.
pub fn map_segment(phoneme: &Phoneme) -> Result<&'static str, ConvertError> {
    if phoneme.stress() == Some(Stress::Unstressed) {
        match phoneme.code() {
            "AH" => return Ok("ə"),
            "ER" => return Ok("ɚ"),
            _ => {}
        }
    }
    base_segment(phoneme.code())
        .ok_or_else(|| ConvertError::UnknownPhoneme(phoneme.code().to_string()))
}

/// Stress-independent segment for a bare ARPAbet code.
/// Returns None for codes outside the 39-phoneme inventory.
pub fn base_segment(code: &str) -> Option<&'static str> {
    match code {
        // Vowels (15)
        "AA" => Some("ɑ"),  // odd
        "AE" => Some("æ"),  // at
        "AH" => Some("ʌ"),  // hut
        "AO" => Some("ɔ"),  // ought
        "AW" => Some("aʊ"), // cow
        "AY" => Some("aɪ"), // hide
        "EH" => Some("ɛ"),  // ed
        "ER" => Some("ɝ"),  // hurt
        "EY" => Some("eɪ"), // ate
        "IH" => Some("ɪ"),  // it
        "IY" => Some("i"),  // eat
        "OW" => Some("oʊ"), // oat
        "OY" => Some("ɔɪ"), // toy
        "UH" => Some("ʊ"),  // hood
        "UW" => Some("u"),  // two

        // Consonants (24)
        "B" => Some("b"),   // be
        "CH" => Some("tʃ"), // cheese
        "D" => Some("d"),   // dee
        "DH" => Some("ð"),  // thee
        "F" => Some("f"),   // fee
        "G" => Some("ɡ"),   // green
        "HH" => Some("h"),  // he
        "JH" => Some("dʒ"), // gee
        "K" => Some("k"),   // key
        "L" => Some("l"),   // lee
        "M" => Some("m"),   // me
        "N" => Some("n"),   // knee
        "NG" => Some("ŋ"),  // ping
        "P" => Some("p"),   // pee
        "R" => Some("ɹ"),   // read
        "S" => Some("s"),   // sea
        "SH" => Some("ʃ"),  // she
        "T" => Some("t"),   // tea
        "TH" => Some("θ"),  // theta
        "V" => Some("v"),   // vee
        "W" => Some("w"),   // we
        "Y" => Some("j"),   // yield
        "Z" => Some("z"),   // zee
        "ZH" => Some("ʒ"),  // seizure

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::phoneme::parse_phoneme;

    fn segment(token: &str) -> &'static str {
        map_segment(&parse_phoneme(token).unwrap()).unwrap()
    }

    #[test]
    fn test_consonant_mapping() {
        assert_eq!(segment("K"), "k");
        assert_eq!(segment("CH"), "tʃ");
        assert_eq!(segment("NG"), "ŋ");
        assert_eq!(segment("R"), "ɹ");
        assert_eq!(segment("ZH"), "ʒ");
    }

    #[test]
    fn test_vowel_mapping() {
        assert_eq!(segment("AE1"), "æ");
        assert_eq!(segment("AW1"), "aʊ");
        assert_eq!(segment("IY0"), "i");
        assert_eq!(segment("OY2"), "ɔɪ");
    }

    #[test]
    fn test_ah_reduction() {
        assert_eq!(segment("AH0"), "ə");
        assert_eq!(segment("AH1"), "ʌ");
        assert_eq!(segment("AH2"), "ʌ");
    }

    #[test]
    fn test_er_reduction() {
        assert_eq!(segment("ER0"), "ɚ");
        assert_eq!(segment("ER1"), "ɝ");
        assert_eq!(segment("ER2"), "ɝ");
    }

    #[test]
    fn test_no_other_reduction() {
        // Every vowel outside AH/ER maps identically at all stress levels
        for code in [
            "AA", "AE", "AO", "AW", "AY", "EH", "EY", "IH", "IY", "OW", "OY", "UH", "UW",
        ] {
            let unstressed = segment(&format!("{}0", code)).to_string();
            let primary = segment(&format!("{}1", code)).to_string();
            let secondary = segment(&format!("{}2", code)).to_string();
            assert_eq!(unstressed, primary, "{} reduced unexpectedly", code);
            assert_eq!(unstressed, secondary, "{} reduced unexpectedly", code);
        }
    }

    #[test]
    fn test_unknown_code() {
        let p = parse_phoneme("QX").unwrap();
        assert_eq!(
            map_segment(&p),
            Err(ConvertError::UnknownPhoneme("QX".to_string()))
        );
    }

    #[test]
    fn test_inventory_is_total() {
        // All 39 codes of the CMUdict inventory are present
        let inventory = [
            "AA", "AE", "AH", "AO", "AW", "AY", "B", "CH", "D", "DH", "EH", "ER", "EY", "F", "G",
            "HH", "IH", "IY", "JH", "K", "L", "M", "N", "NG", "OW", "OY", "P", "R", "S", "SH",
            "T", "TH", "UH", "UW", "V", "W", "Y", "Z", "ZH",
        ];
        assert_eq!(inventory.len(), 39);
        for code in inventory {
            assert!(base_segment(code).is_some(), "missing chart row: {}", code);
        }
    }
}
