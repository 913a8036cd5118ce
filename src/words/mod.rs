//! Solution word sourcing
//!
//! Remote retrieval with a fixed local fallback.

pub mod remote;

pub use remote::{FALLBACK_WORD, fallback_word, fetch_solution, spawn_fetch};
