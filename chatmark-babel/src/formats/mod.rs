//! Format implementations
//!
//! This module contains all format implementations that convert between
//! [`RichDocument`](crate::model::RichDocument) and text representations.

pub mod raw;
pub mod tag;
pub mod wire;

pub use raw::RawFormat;
pub use tag::TagFormat;
pub use wire::WireFormat;
