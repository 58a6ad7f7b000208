//! Command handlers.
//!
//! Handlers are thin wrappers that build the services through the axum
//! composition root and format results for the terminal.

pub mod generate;
pub mod serve;
pub mod validate;
