//! recipe-query-cli
//!
//! Terminal front end over a single search session. The binary lives in
//! `src/bin/main.rs`; command parsing and the JSON handoff retriever are
//! kept here so they can be tested.
pub mod handoff;
pub mod repl;
