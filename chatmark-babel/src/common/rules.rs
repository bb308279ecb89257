//! Marker-pair rules for WhatsApp-style markup.
//!
//! Rules are applied in the order they are listed here. Rendering walks [`MARKER_RULES`]
//! after links and combined bold+italic have been extracted.

use crate::model::InlineElement;
use once_cell::sync::Lazy;
use regex::Regex;

/// A `*...*` run with no inner asterisk. Newlines are allowed inside the run.
pub static BOLD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*[^*]*\*").expect("bold run pattern is valid"));

/// http(s) urls, with an optional `www.` prefix and a restricted path charset.
///
/// The boundary after the top level domain is ASCII only, so a url running straight into
/// non-ASCII text (`https://glific.orgमें`) still ends at the domain.
pub static LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)https?://(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,4}(?-u:\b)(?:[-a-zA-Z0-9@:%_+.~#?&/=]*)",
    )
    .expect("link pattern is valid")
});

/// `_*text*_` and `*_text_*`, in that order. Group 1 is the inner text.
pub static BOLD_ITALIC: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"_\*(.*?)\*_").expect("bold-italic pattern is valid"),
        Regex::new(r"\*_(.*?)_\*").expect("italic-bold pattern is valid"),
    ]
});

/// A single-style marker: a symbol repeated on both sides of the content.
pub struct MarkerRule {
    pub name: &'static str,
    pub build: fn(String) -> InlineElement,
    pub pattern: Regex,
}

impl MarkerRule {
    fn new(name: &'static str, symbol: char, width: usize, build: fn(String) -> InlineElement) -> Self {
        MarkerRule {
            name,
            build,
            pattern: marker_pattern(symbol, width),
        }
    }
}

/// Builds `(?:S){n}(.+?)(?:S){n}` for an escaped symbol `S`.
pub fn marker_pattern(symbol: char, width: usize) -> Regex {
    let escaped = regex::escape(&symbol.to_string());
    let pattern = format!("(?:{escaped}){{{width}}}(.+?)(?:{escaped}){{{width}}}");
    Regex::new(&pattern).expect("marker pattern is valid")
}

/// Single-style rules in application order: bold, italic, strikethrough, code.
pub static MARKER_RULES: Lazy<Vec<MarkerRule>> = Lazy::new(|| {
    vec![
        MarkerRule::new("bold", '*', 1, InlineElement::bold),
        MarkerRule::new("italic", '_', 1, InlineElement::italic),
        MarkerRule::new("strikethrough", '~', 1, InlineElement::strike),
        MarkerRule::new("code", '`', 2, InlineElement::code),
    ]
});
