//! CMUdict source parsing and tab-delimited output

pub mod parser;
pub mod writer;

pub use parser::{parse_line, read_source, DictEntry};
pub use writer::RowWriter;
