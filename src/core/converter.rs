//! ARPAbet transcription -> IPA transcription pipeline

use crate::core::assembler::{assemble, Style};
use crate::core::error::ConvertError;
use crate::core::mapper::map_segment;
use crate::core::phoneme::parse_sequence;
use crate::core::syllable::syllable_breaks;

/// Convert one ARPAbet transcription ("K AE1 T") to a delimited IPA
/// transcription ("/kæt/") with default styling.
pub fn convert(transcription: &str) -> Result<String, ConvertError> {
    convert_styled(transcription, &Style::default())
}

/// Convert with explicit output styling.
pub fn convert_styled(transcription: &str, style: &Style) -> Result<String, ConvertError> {
    let sequence = parse_sequence(transcription)?;
    let segments = sequence
        .iter()
        .map(map_segment)
        .collect::<Result<Vec<_>, _>>()?;
    let breaks = syllable_breaks(&sequence)?;
    Ok(assemble(&sequence, &breaks, &segments, style))
}
