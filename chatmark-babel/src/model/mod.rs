//! Core data structures shared by the conversion pipelines.
//!
//! - [`RichDocument`], [`Block`], [`StyleRange`] and [`StyleType`] mirror the raw content
//!   state of a rich text editor: a list of blocks, each with its text and the inline style
//!   ranges recorded over it.
//! - [`InlineElement`] is the typed display unit produced by rendering wire markup.

pub mod document;
pub mod inline;

pub use document::{Block, RichDocument, StyleRange, StyleType};
pub use inline::{InlineElement, LinkAttributes};
