pub mod config;
pub mod core;
pub mod dict;

pub use self::core::assembler::Style;
pub use self::core::converter::{convert, convert_styled};
pub use self::core::error::ConvertError;
