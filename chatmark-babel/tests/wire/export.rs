//! Export tests (RichDocument → Wire)

use crate::common::{block_doc, fixture};
use chatmark_babel::{convert_document_to_wire, FormatRegistry, StyleType};
use std::collections::HashMap;

#[test]
fn test_plain_block() {
    assert_eq!(convert_document_to_wire(&block_doc("just text", &[])), "just text\n");
}

#[test]
fn test_bold_hello() {
    let doc = block_doc("hello", &[(StyleType::Bold, 0, 5)]);
    assert_eq!(convert_document_to_wire(&doc), "*hello*\n");
}

#[test]
fn test_italic_hi() {
    let doc = block_doc("hi", &[(StyleType::Italic, 0, 2)]);
    assert_eq!(convert_document_to_wire(&doc), "_hi_\n");
}

#[test]
fn test_editor_state_fixture_to_wire() {
    let registry = FormatRegistry::default();
    let doc = registry
        .parse(&fixture("editor-state.json"), "raw")
        .expect("fixture parses");
    let wire = registry.serialize(&doc, "wire", &HashMap::new()).unwrap();
    assert_eq!(
        wire,
        "*Reminder*: class starts at _10_\n\nBring your notebook\n"
    );
}

#[test]
fn test_nested_ranges_are_spliced_sequentially() {
    // Same span bold and italic: the second marker pair lands inside the first one.
    let doc = block_doc(
        "both",
        &[(StyleType::Bold, 0, 4), (StyleType::Italic, 0, 4)],
    );
    assert_eq!(convert_document_to_wire(&doc), "*b_oth*_\n");
}
