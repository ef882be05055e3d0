//! The terminal output surface and the timed primitives that write to it.
//!
//! Everything here is tick-driven: hosts call `advance(dt)` from their frame
//! loop and the typed output appears as time accumulates.

pub mod output;
pub mod script;
pub mod typed_line;

pub use output::{LineStyle, LineUpdate, Terminal, TerminalLine};
pub use script::{Cue, Script, Step};
pub use typed_line::TypedLine;
