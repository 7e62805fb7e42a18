//! Batch outcome types and helpers.

mod error;
mod outcome;

pub use error::BatchError;
pub use outcome::BatchOutcome;
