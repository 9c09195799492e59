pub mod display;
pub mod print;
pub mod serialize;

pub use display::{DisplayConsole, DisplayReverse};
pub use print::{PrintConsole, PrintReverse};
pub use serialize::{SerializeJson, SerializeXml};

/// Reverses by Unicode scalar value.
pub(crate) fn reversed(text: &str) -> String {
    text.chars().rev().collect()
}
