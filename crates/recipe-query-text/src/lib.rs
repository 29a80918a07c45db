//! recipe-query-text
//!
//! Turns raw free-form input into tokens and ranks category suggestions for
//! each one. Everything here is pure and deterministic.
pub mod classify;
pub mod tokenize;

pub use classify::{classify, parse};
pub use tokenize::tokenize;
