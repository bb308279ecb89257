//! Wire → RichDocument → Wire stability

use chatmark_babel::{convert_document_to_wire, convert_wire_to_document, StyleType};
use proptest::prelude::*;

fn reencode(wire: &str) -> String {
    convert_document_to_wire(&convert_wire_to_document(wire))
}

#[test]
fn test_simple_message_round_trips() {
    let wire = "Hello *team*,\n\nthe _new_ menu is *live*\n";
    assert_eq!(reencode(wire), wire);
}

#[test]
fn test_document_round_trip_keeps_text_and_styles() {
    let wire = "*Sale* ends _tonight_\n";
    let doc = convert_wire_to_document(wire);
    assert_eq!(doc.texts(), vec!["Sale ends tonight"]);
    let styles: Vec<_> = doc.blocks[0].style_ranges.iter().map(|r| r.style.clone()).collect();
    assert_eq!(styles, vec![StyleType::Bold, StyleType::Italic]);

    let again = convert_wire_to_document(&convert_document_to_wire(&doc));
    assert_eq!(again, doc);
}

#[test]
fn test_second_pass_is_stable_for_lossy_input() {
    let wire = "done ~x~ with ``code`` and `ls`";
    let once = reencode(wire);
    assert_eq!(reencode(&once), once);
}

#[test]
fn test_literal_asterisks_are_not_doubled() {
    for wire in ["2 * 3 * 4\n", "x *\n* y\n", "*a\n\nb*\n", "*total* 2 * 3 * 4\n"] {
        assert_eq!(reencode(wire), wire);
        assert_eq!(reencode(&reencode(wire)), wire);
    }
}

fn styled_word() -> impl Strategy<Value = String> {
    ("[a-z]{1,8}", 0..3u8).prop_map(|(word, style)| match style {
        0 => word,
        1 => format!("*{word}*"),
        _ => format!("_{word}_"),
    })
}

fn styled_line() -> impl Strategy<Value = String> {
    prop::collection::vec(styled_word(), 1..6).prop_map(|words| words.join(" "))
}

fn arithmetic_line() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-z0-9]{1,6}", any::<bool>()), 1..6).prop_map(|terms| {
        let mut line = String::new();
        for (index, (term, starred)) in terms.iter().enumerate() {
            if index > 0 {
                line.push_str(if *starred { " * " } else { " " });
            }
            line.push_str(term);
        }
        line
    })
}

proptest! {
    #[test]
    fn lone_asterisks_survive_round_trips(lines in prop::collection::vec(arithmetic_line(), 1..4)) {
        let wire = lines.iter().map(|line| format!("{line}\n")).collect::<String>();
        prop_assert_eq!(reencode(&wire), wire);
    }

    #[test]
    fn bold_italic_messages_are_stable(lines in prop::collection::vec(styled_line(), 1..4)) {
        let wire = lines.iter().map(|line| format!("{line}\n")).collect::<String>();
        prop_assert_eq!(reencode(&wire), wire);
    }
}
