//! Tag format tests

use crate::common::block_doc;
use chatmark_babel::format::Format;
use chatmark_babel::formats::TagFormat;
use chatmark_babel::{FormatRegistry, StyleType};
use insta::assert_snapshot;
use std::collections::HashMap;

#[test]
fn test_tag_from_editor_document() {
    let doc = block_doc("Reply STOP to opt out", &[(StyleType::Bold, 6, 4)]);
    let output = TagFormat::default().serialize(&doc).unwrap();
    assert_snapshot!(output, @r###"
    <document>
      <block>
        <text>Reply </text>
        <bold>STOP</bold>
        <text> to opt out</text>
      </block>
    </document>
    "###);
}

#[test]
fn test_tag_without_link_detection() {
    let registry = FormatRegistry::default();
    let doc = registry.parse("go to https://example.com\n", "wire").unwrap();

    let mut options = HashMap::new();
    options.insert("detect-links".to_string(), "false".to_string());
    let output = registry.serialize(&doc, "tag", &options).unwrap();

    assert!(output.contains("<text>go to https://example.com</text>"));
    assert!(!output.contains("<link"));
}

#[test]
fn test_tag_rejects_unknown_option() {
    let mut options = HashMap::new();
    options.insert("ast-full".to_string(), "true".to_string());
    let result = TagFormat::default().serialize_with_options(&block_doc("x", &[]), &options);
    assert!(result.is_err());
}
