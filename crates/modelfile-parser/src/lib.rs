//! Single-pass Modelfile parser.
//!
//! Converts a textual model-definition document into an ordered sequence
//! of [`Command`] instructions.  The lexer is a hand-rolled finite-state
//! machine consuming one character at a time:
//!
//! * bare arguments end at the first newline;
//! * quote-delimited blocks may span lines, with a delimiter of any
//!   width (`"`, `""`, `"""`, …) that must be matched to close;
//! * `MESSAGE` instructions carry a validated role, prefixed onto the
//!   payload as `"<role>: "`.
//!
//! The first lexing error aborts the whole parse, and a document without
//! a `FROM` (aliased to `model`) instruction is rejected.

pub mod lexer;
pub mod types;

pub use lexer::{Lexer, parse, parse_str};
pub use types::{Command, ModelfileError, Result};
