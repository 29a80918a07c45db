//! recipe-query-session
//!
//! The in-memory state behind one search box: the live parse, the confirmed
//! chips with the structured query derived from them, and the bounded log
//! of executed searches.
pub mod chips;
pub mod confirmation;
pub mod history;
pub mod session;

pub use chips::ChipRegistry;
pub use confirmation::LiveParse;
pub use history::SearchHistory;
pub use session::SearchSession;
