//! Domain types shared by the engine, the session and the view.

pub mod refined;
pub mod types;

pub use refined::{OutOfRange, Percentage, Score};
pub use types::{CodeAnalysis, Issue, Severity};
