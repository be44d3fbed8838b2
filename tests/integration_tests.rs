//! Integration tests - end-to-end ARPAbet to IPA conversion

use arpa2ipa::{convert, convert_styled, ConvertError, Style};

#[test]
fn test_monosyllable() {
    // Stress marks are dropped on single-syllable words
    assert_eq!(convert("K AE1 T").unwrap(), "/kæt/");
    assert_eq!(convert("D AO1 G").unwrap(), "/dɔɡ/");
}

#[test]
fn test_unstressed_ah_reduces() {
    assert_eq!(convert("AH0 B AW1 T").unwrap(), "/əˈbaʊt/");
}

#[test]
fn test_interior_syllable_boundary() {
    // N closes the first syllable, S opens the second
    assert_eq!(convert("P EH1 N S AH0 L").unwrap(), "/ˈpɛn.səl/");
}

#[test]
fn test_unstressed_er_reduces() {
    assert_eq!(convert("S IH1 NG ER0").unwrap(), "/ˈsɪŋ.ɚ/");
}

#[test]
fn test_secondary_stress() {
    assert_eq!(convert("AE1 B S T R AE2 K T").unwrap(), "/ˈæbˌstɹækt/");
}

#[test]
fn test_hiatus_splits_between_vowels() {
    assert_eq!(convert("K R IY0 EY1 T").unwrap(), "/kɹiˈeɪt/");
}

#[test]
fn test_three_syllables() {
    assert_eq!(convert("B AH0 N AE1 N AH0").unwrap(), "/bəˈnæ.nə/");
}

#[test]
fn test_no_vowel_abbreviation() {
    // Zero-vowel sequences form one syllable with no internal boundary
    assert_eq!(convert("S T").unwrap(), "/st/");
}

#[test]
fn test_single_vowel_never_has_boundary() {
    for transcription in ["AE1", "K AE1 T", "S T R EH1 NG K TH S", "DH AH0"] {
        let ipa = convert(transcription).unwrap();
        assert!(!ipa.contains('.'), "unexpected boundary in {}", ipa);
        assert!(!ipa.contains('ˈ'), "unexpected stress mark in {}", ipa);
    }
}

#[test]
fn test_exactly_one_primary_stress_marker() {
    for transcription in ["AH0 B AW1 T", "P EH1 N S AH0 L", "B AH0 N AE1 N AH0"] {
        let ipa = convert(transcription).unwrap();
        assert_eq!(ipa.matches('ˈ').count(), 1, "in {}", ipa);
    }
}

#[test]
fn test_determinism() {
    for transcription in ["K AE1 T", "AH0 B AW1 T", "AE1 B S T R AE2 K T"] {
        assert_eq!(
            convert(transcription).unwrap(),
            convert(transcription).unwrap()
        );
    }
}

#[test]
fn test_unknown_phoneme_reported() {
    assert_eq!(
        convert("K AE1 QX"),
        Err(ConvertError::UnknownPhoneme("QX".to_string()))
    );
}

#[test]
fn test_unsyllabifiable_reported() {
    assert_eq!(
        convert("NG AA1 T"),
        Err(ConvertError::Unsyllabifiable("NG".to_string()))
    );
}

#[test]
fn test_custom_style() {
    let style = Style {
        left_bracket: "[".to_string(),
        right_bracket: "]".to_string(),
        syllable_marker: "·".to_string(),
    };
    assert_eq!(
        convert_styled("P EH1 N S AH0 L", &style).unwrap(),
        "[ˈpɛn·səl]"
    );
}

#[test]
fn test_output_is_nfd() {
    use unicode_normalization::is_nfd;
    for transcription in ["K AE1 T", "S IH1 NG ER0", "AE1 B S T R AE2 K T"] {
        assert!(is_nfd(&convert(transcription).unwrap()));
    }
}
