//! Pure conversion pipeline: parse -> map -> syllabify -> assemble

pub mod assembler;
pub mod converter;
pub mod error;
pub mod mapper;
pub mod phoneme;
pub mod syllable;
