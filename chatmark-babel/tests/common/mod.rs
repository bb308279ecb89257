//! Shared helpers for the integration tests.

use chatmark_babel::{Block, RichDocument, StyleType};
use std::path::PathBuf;

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// A one-block document with the given ranges.
pub fn block_doc(text: &str, ranges: &[(StyleType, usize, usize)]) -> RichDocument {
    let block = ranges
        .iter()
        .fold(Block::plain(text), |block, (style, offset, length)| {
            block.with_style(style.clone(), *offset, *length)
        });
    RichDocument::new(vec![block])
}
