use chatmark_babel::{render_wire_as_inline, InlineElement};
use proptest::prelude::*;

proptest! {
    #[test]
    fn text_without_markers_is_one_plain_segment(text in "[a-zA-Z0-9 ,.!?]{1,64}") {
        prop_assert_eq!(render_wire_as_inline(text.as_str()), vec![InlineElement::plain(text.clone())]);
    }

    #[test]
    fn rendering_keeps_visible_text_order(words in prop::collection::vec("[a-z]{1,8}", 1..8)) {
        let wire = words
            .iter()
            .enumerate()
            .map(|(i, word)| match i % 3 {
                0 => format!("*{word}*"),
                1 => format!("_{word}_"),
                _ => word.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ");

        let visible: String = render_wire_as_inline(wire.as_str())
            .iter()
            .map(|element| element.text().to_string())
            .collect();
        prop_assert_eq!(visible, words.join(" "));
    }
}
