//! Error types produced while parsing.
//!
//! A single error kind exists: a syntax error raised when a token that cannot
//! start an expression appears where one is expected. Errors carry the span
//! of the offending token and render a stable message.

pub mod errors;
