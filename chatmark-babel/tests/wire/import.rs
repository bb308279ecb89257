//! Import tests (Wire → RichDocument)

use crate::common::fixture;
use chatmark_babel::{convert_wire_to_document, Block, RichDocument, StyleType};

#[test]
fn test_order_confirmation_fixture() {
    let doc = convert_wire_to_document(&fixture("order-confirmation.txt"));

    assert_eq!(
        doc,
        RichDocument::new(vec![
            Block::plain("Hi Asha,").with_style(StyleType::Italic, 3, 4),
            Block::plain(""),
            Block::plain("Your order #4521 is confirmed.").with_style(StyleType::Bold, 11, 5),
            Block::plain("Track it here: https://shop.example.com/orders/4521?ref=wa"),
            Block::plain(""),
            Block::plain("Items:"),
            Block::plain("- 2x ``masala chai``"),
            Block::plain("- 1x ~biscuits~ (out of stock)"),
            Block::plain(""),
            Block::plain("Thank you for shopping with us!")
                .with_style(StyleType::Italic, 0, 31)
                .with_style(StyleType::Bold, 0, 31),
        ])
    );
}

#[test]
fn test_italic_bold_nesting() {
    let doc = convert_wire_to_document("*_both_*");
    assert_eq!(
        doc.blocks,
        vec![Block::plain("both")
            .with_style(StyleType::Bold, 0, 4)
            .with_style(StyleType::Italic, 0, 4)]
    );
}

#[test]
fn test_arbitrary_text_never_fails() {
    for input in ["*", "**", "_*_", "*a_b*c_", "``", "<b>hi</b>", "[x](y)", "\n\n\n", "# *t*"] {
        let doc = convert_wire_to_document(input);
        assert!(doc.blocks.iter().all(|b| b.style_ranges.iter().all(|r| r.end() <= b.char_len())));
    }
}

#[test]
fn test_heading_line_is_verbatim() {
    let doc = convert_wire_to_document("# *Offer*\ntoday only\n");
    assert_eq!(doc.texts(), vec!["# *Offer*", "today only"]);
}

#[test]
fn test_link_markup_keeps_text() {
    let doc = convert_wire_to_document("read [the docs](https://example.com)");
    assert_eq!(doc.blocks, vec![Block::plain("read the docs")]);
}
