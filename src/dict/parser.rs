//! CMUdict source-line parsing
//!
//! Source lines look like `CAT  K AE1 T`: the word and its transcription
//! separated by a run of two or more spaces. Lines starting with `;;;` are
//! comments. Alternate pronunciations carry a `(N)` label on the word
//! (`ALUMINIUM(2)`), which is stripped so variants share one headword.

use std::fs;
use std::path::Path;

/// Comment prefix used by CMUdict
const COMMENT_PREFIX: &str = ";;;";

/// One parsed dictionary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub word: String,
    pub transcription: String,
}

/// Read a whole source file. CMUdict carries a few invalid UTF-8 bytes, so
/// the read is lossy rather than failing on them.
pub fn read_source(path: &Path) -> Result<String, String> {
    let bytes =
        fs::read(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse one source line.
///
/// Returns `Ok(None)` for blank and comment lines, `Err` for lines that do
/// not split into exactly two fields on a run of two or more spaces.
pub fn parse_line(line: &str) -> Result<Option<DictEntry>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    let separator = line
        .find("  ")
        .ok_or_else(|| format!("expected two values separated with spaces: \"{}\"", line))?;
    let word = strip_variant_label(&line[..separator]);
    let transcription = line[separator..].trim_start();
    if word.is_empty() || transcription.is_empty() || transcription.contains("  ") {
        return Err(format!(
            "expected two values separated with spaces: \"{}\"",
            line
        ));
    }

    Ok(Some(DictEntry {
        word: word.to_string(),
        transcription: transcription.to_string(),
    }))
}

/// Strip a trailing `(N)` variant label from a word, if present.
fn strip_variant_label(word: &str) -> &str {
    if !word.ends_with(')') {
        return word;
    }
    match word.rfind('(') {
        Some(open) => {
            let digits = &word[open + 1..word.len() - 1];
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                &word[..open]
            } else {
                word
            }
        }
        None => word,
    }
}
