pub mod sqlite;
pub mod tables;

pub use sqlite::{Database, InitOutcome};
