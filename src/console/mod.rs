//! Console boundary: token scanning and number rendering.

mod format;
mod scanner;

pub use format::format_number;
pub use scanner::{parse_number, parse_selection, Scanner};
