//! Tab-delimited output rows with duplicate suppression
//!
//! Variant pronunciations can convert to identical rows once their `(N)`
//! labels are stripped; exact-duplicate rows are dropped so the output file
//! stays one row per distinct (word, transcription) pair.

use std::collections::HashSet;
use std::io::Write;

/// Writer for `<word>\t<ipa>` rows
pub struct RowWriter<W: Write> {
    inner: W,
    dedup: bool,
    seen: HashSet<String>,
}

impl<W: Write> RowWriter<W> {
    pub fn new(inner: W, dedup: bool) -> Self {
        Self {
            inner,
            dedup,
            seen: HashSet::new(),
        }
    }

    /// Write one row. Returns false if the row was an exact duplicate and
    /// was suppressed.
    pub fn write_row(&mut self, word: &str, ipa: &str) -> Result<bool, String> {
        let row = format!("{}\t{}\n", word, ipa);
        if self.dedup && !self.seen.insert(row.clone()) {
            return Ok(false);
        }
        self.inner
            .write_all(row.as_bytes())
            .map_err(|e| format!("failed to write output row: {}", e))?;
        Ok(true)
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W, String> {
        self.inner
            .flush()
            .map_err(|e| format!("failed to flush output: {}", e))?;
        Ok(self.inner)
    }
}
