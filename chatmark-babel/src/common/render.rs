//! Wire markup → inline display elements.
//!
//! Rendering is a fold of ordered rules over a segment list. Every rule only rewrites
//! [`InlineElement::PlainText`] segments, so content classified by an earlier rule is
//! never looked at again:
//!
//! 1. links (only when the input is a plain string)
//! 2. `_*bold italic*_` and `*_bold italic_*`
//! 3. `*bold*`, `_italic_`, `~strike~`, ``` ``code`` ```
//!
//! Inner content is not re-processed, so `*_a_ b*` renders as bold `_a_ b`.

use crate::common::rules::{BOLD_ITALIC, LINK, MARKER_RULES};
use crate::model::InlineElement;
use regex::Regex;
use tracing::{debug, trace};

/// Input accepted by [`render_wire_as_inline`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderSource<'a> {
    /// Raw wire text.
    Text(&'a str),
    /// Segments already partially rendered by a previous pass.
    Segments(Vec<InlineElement>),
}

impl<'a> From<&'a str> for RenderSource<'a> {
    fn from(text: &'a str) -> Self {
        RenderSource::Text(text)
    }
}

impl<'a> From<&'a String> for RenderSource<'a> {
    fn from(text: &'a String) -> Self {
        RenderSource::Text(text.as_str())
    }
}

impl From<Vec<InlineElement>> for RenderSource<'_> {
    fn from(segments: Vec<InlineElement>) -> Self {
        RenderSource::Segments(segments)
    }
}

/// Knobs for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Detect http(s) links when the input is a plain string.
    pub detect_links: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { detect_links: true }
    }
}

/// Render wire markup (or partially rendered segments) into inline elements.
pub fn render_wire_as_inline<'a>(source: impl Into<RenderSource<'a>>) -> Vec<InlineElement> {
    render_wire_as_inline_with_options(source, &RenderOptions::default())
}

/// Render with explicit [`RenderOptions`].
pub fn render_wire_as_inline_with_options<'a>(
    source: impl Into<RenderSource<'a>>,
    options: &RenderOptions,
) -> Vec<InlineElement> {
    let mut segments = match source.into() {
        RenderSource::Text(text) => {
            let segments = vec![InlineElement::plain(text)];
            if options.detect_links {
                replace_matches(segments, &LINK, |m| InlineElement::link(m))
            } else {
                segments
            }
        }
        RenderSource::Segments(segments) => segments,
    };

    for pattern in BOLD_ITALIC.iter() {
        segments = replace_captures(segments, pattern, InlineElement::bold_italic);
    }

    for rule in MARKER_RULES.iter() {
        segments = replace_captures(segments, &rule.pattern, rule.build);
        trace!(rule = rule.name, segments = segments.len(), "applied marker rule");
    }

    debug!(segments = segments.len(), "rendered wire markup");
    segments
}

/// Split every plain segment around matches of `pattern`, building an element from the
/// whole match.
fn replace_matches<F>(segments: Vec<InlineElement>, pattern: &Regex, build: F) -> Vec<InlineElement>
where
    F: Fn(&str) -> InlineElement,
{
    split_plain(segments, pattern, |caps| build(&caps[0]))
}

/// Split every plain segment around matches of `pattern`, building an element from
/// capture group 1.
fn replace_captures(
    segments: Vec<InlineElement>,
    pattern: &Regex,
    build: fn(String) -> InlineElement,
) -> Vec<InlineElement> {
    split_plain(segments, pattern, |caps| {
        build(caps.get(1).map_or("", |m| m.as_str()).to_string())
    })
}

fn split_plain<F>(segments: Vec<InlineElement>, pattern: &Regex, build: F) -> Vec<InlineElement>
where
    F: Fn(&regex::Captures<'_>) -> InlineElement,
{
    let mut output = Vec::with_capacity(segments.len());

    for segment in segments {
        let text = match segment {
            InlineElement::PlainText { text } => text,
            other => {
                output.push(other);
                continue;
            }
        };

        let mut last = 0;
        for caps in pattern.captures_iter(&text) {
            let whole = caps.get(0).expect("group 0 is always present");
            push_plain(&mut output, &text[last..whole.start()]);
            output.push(build(&caps));
            last = whole.end();
        }
        push_plain(&mut output, &text[last..]);
    }

    output
}

fn push_plain(output: &mut Vec<InlineElement>, text: &str) {
    if !text.is_empty() {
        output.push(InlineElement::plain(text));
    }
}
