//! Text command surface: parse a line, run it against a session.

mod parse;
mod session;

pub use parse::{Command, HELP};
pub use session::{Outcome, Session};
