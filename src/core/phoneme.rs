//! ARPAbet phoneme model and token parsing

use crate::core::error::ConvertError;

/// Stress digit carried by a vowel phoneme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stress {
    /// 0 = unstressed
    Unstressed,
    /// 1 = primary stress
    Primary,
    /// 2 = secondary stress
    Secondary,
}

impl Stress {
    fn from_digit(digit: u32) -> Option<Stress> {
        match digit {
            0 => Some(Stress::Unstressed),
            1 => Some(Stress::Primary),
            2 => Some(Stress::Secondary),
            _ => None,
        }
    }
}

/// One ARPAbet phoneme as written in a CMUdict transcription.
///
/// Vowels carry a stress digit ("AH0", "EY1"); consonants are the bare code
/// ("K", "TH"). A token is classified as a vowel iff it carries a digit,
/// which is the CMUdict convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phoneme {
    code: String,
    stress: Option<Stress>,
}

impl Phoneme {
    /// Bare ARPAbet code, digit stripped
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Stress digit (vowels only)
    pub fn stress(&self) -> Option<Stress> {
        self.stress
    }

    pub fn is_vowel(&self) -> bool {
        self.stress.is_some()
    }

    pub fn is_consonant(&self) -> bool {
        self.stress.is_none()
    }
}

/// Parse one ARPAbet token ("K", "AH0", ...) into a phoneme.
/// A trailing decimal digit is the stress marker; only 0/1/2 are valid.
pub fn parse_phoneme(token: &str) -> Result<Phoneme, ConvertError> {
    if token.is_empty() {
        return Err(ConvertError::UnknownPhoneme(String::new()));
    }

    let last = token.chars().last().unwrap_or_default();
    match last.to_digit(10) {
        Some(digit) => {
            let code = &token[..token.len() - last.len_utf8()];
            let stress = Stress::from_digit(digit)
                .ok_or_else(|| ConvertError::UnknownPhoneme(token.to_string()))?;
            if code.is_empty() {
                return Err(ConvertError::UnknownPhoneme(token.to_string()));
            }
            Ok(Phoneme {
                code: code.to_string(),
                stress: Some(stress),
            })
        }
        None => Ok(Phoneme {
            code: token.to_string(),
            stress: None,
        }),
    }
}

/// Parse a whole space-delimited transcription ("K AE1 T") into a sequence.
/// An empty transcription has no phonemes to look up and is rejected.
pub fn parse_sequence(transcription: &str) -> Result<Vec<Phoneme>, ConvertError> {
    let tokens: Vec<&str> = transcription.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ConvertError::UnknownPhoneme(String::new()));
    }
    tokens.into_iter().map(parse_phoneme).collect()
}
