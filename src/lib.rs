//! Deterministic lucky/fizz/buzz classification of integer ranges.
//!
//! `lucky-fizzbuzz` classifies each integer in an inclusive range, renders the
//! labels as a space-joined string and can append an occurrence report for the
//! `fizz`, `buzz`, `fizzbuzz`, `lucky` and `integer` buckets. Every operation
//! is a pure function of its inputs.
//!
//! ```
//! assert_eq!(lucky_fizzbuzz::render(1, 6), "1 2 lucky 4 buzz fizz");
//! ```

pub mod classify;
pub mod generate;
pub mod report;
pub mod stats;
pub mod types;

pub use classify::classify;
pub use report::{render, report};
