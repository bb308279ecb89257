use crate::common::fixture;
use chatmark_babel::{render_wire_as_inline, InlineElement};

#[test]
fn test_render_order_confirmation_fixture() {
    let wire = fixture("order-confirmation.txt");
    let elements = render_wire_as_inline(&wire);

    assert_eq!(
        elements,
        vec![
            InlineElement::plain("Hi "),
            InlineElement::italic("Asha"),
            InlineElement::plain(",\n\nYour order "),
            InlineElement::bold("#4521"),
            InlineElement::plain(" is confirmed.\nTrack it here: "),
            InlineElement::link("https://shop.example.com/orders/4521?ref=wa"),
            InlineElement::plain("\n\nItems:\n- 2x "),
            InlineElement::code("masala chai"),
            InlineElement::plain("\n- 1x "),
            InlineElement::strike("biscuits"),
            InlineElement::plain(" (out of stock)\n\n"),
            InlineElement::bold_italic("Thank you for shopping with us!"),
            InlineElement::plain("\n"),
        ]
    );
}

#[test]
fn test_link_followed_by_non_ascii_text() {
    assert_eq!(
        render_wire_as_inline("visit https://glific.orgमें"),
        vec![
            InlineElement::plain("visit "),
            InlineElement::link("https://glific.org"),
            InlineElement::plain("में"),
        ]
    );
    assert_eq!(
        render_wire_as_inline("https://example.comé"),
        vec![InlineElement::link("https://example.com"), InlineElement::plain("é")]
    );
}

#[test]
fn test_template_body_with_placeholders() {
    // Speed-send templates keep their {{n}} placeholders as plain text
    let elements = render_wire_as_inline("Hello {{1}}, your code is *{{2}}*");
    assert_eq!(
        elements,
        vec![
            InlineElement::plain("Hello {{1}}, your code is "),
            InlineElement::bold("{{2}}"),
        ]
    );
}

#[test]
fn test_bold_italic_is_matched_before_single_markers() {
    let elements = render_wire_as_inline("*a* _*b*_ _c_");
    assert_eq!(
        elements,
        vec![
            InlineElement::bold("a"),
            InlineElement::plain(" "),
            InlineElement::bold_italic("b"),
            InlineElement::plain(" "),
            InlineElement::italic("c"),
        ]
    );
}

#[test]
fn test_inner_markers_are_not_reprocessed() {
    assert_eq!(
        render_wire_as_inline("*bold with _italic_ inside*"),
        vec![InlineElement::bold("bold with _italic_ inside")]
    );
}

#[test]
fn test_links_in_markers_win() {
    assert_eq!(
        render_wire_as_inline("*https://example.com*"),
        vec![
            InlineElement::plain("*"),
            InlineElement::link("https://example.com"),
            InlineElement::plain("*"),
        ]
    );
}

#[test]
fn test_rendering_twice_is_stable() {
    let first = render_wire_as_inline("see _this_ and https://example.com/x");
    let second = render_wire_as_inline(first.clone());
    assert_eq!(first, second);
}
