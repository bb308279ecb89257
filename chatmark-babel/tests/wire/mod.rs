//! Wire markup format tests
//!
//! Tests for Wire ↔ RichDocument conversion.

mod export;
mod import;
mod round_trip;
