//! Wire markup → rich document.
//!
//! Pipeline: wire string → bold markers doubled → Comrak AST → blocks with style ranges
//!
//! WhatsApp bold is a single asterisk, which CommonMark reads as emphasis. Before parsing,
//! every `*...*` run is wrapped in one more pair of asterisks so that Comrak sees strong
//! emphasis (`*bold*` → `**bold**`). Underscore italics already parse as emphasis.
//!
//! When Comrak does not turn a doubled run into strong emphasis (`2 * 3 * 4`), the added
//! asterisks survive as literal text. Text is therefore aligned back against the doubled
//! source while blocks are built, and every literal asterisk that the pre-pass added is
//! dropped. Without this, each wire → document → wire pass would double them again.
//!
//! Line structure is kept: every line break inside a paragraph starts a new block, and
//! source lines that no node covers (blank lines, link reference definitions) are kept as
//! blocks of their own. Top level constructs WhatsApp has no notion of (headings, lists,
//! quotes, code blocks, html blocks) are copied verbatim, line by line, from the input.
//!
//! Nothing here fails: unbalanced markers are left to Comrak, and whatever it makes of
//! them is accepted.

use crate::common::rules::BOLD_RUN;
use crate::model::{Block, RichDocument, StyleRange, StyleType};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, Options};
use tracing::debug;

/// A character of the doubled wire text, flagged when the bold pre-pass added it.
type MarkedChar = (char, bool);

/// Parse wire markup into a rich document.
pub fn convert_wire_to_document(wire: &str) -> RichDocument {
    // Step 1: Double single-asterisk bold markers
    let marked = mark_doubled_bold(wire);
    let normalized: String = marked.iter().map(|(c, _)| c).collect();

    // Step 2: Parse with Comrak
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, &normalized, &options);

    // Step 3: Rebuild blocks, following source lines
    let source_lines: Vec<&str> = wire.lines().collect();
    let marked_lines: Vec<&[MarkedChar]> = marked.split(|(c, _)| *c == '\n').collect();
    let mut builder = BlockBuilder::default();
    let mut next_line = 1;

    for node in root.children() {
        let sourcepos = node.data.borrow().sourcepos;
        let start = sourcepos.start.line.max(next_line);
        let end = sourcepos.end.line.min(source_lines.len());

        builder.push_source_lines(&source_lines, next_line, start);

        if matches!(node.data.borrow().value, NodeValue::Paragraph) {
            builder.paragraph(node, SourceCursor::over_lines(&marked_lines, start, end));
        } else {
            builder.push_source_lines(&source_lines, start, end + 1);
        }

        next_line = next_line.max(sourcepos.end.line + 1);
    }

    builder.push_source_lines(&source_lines, next_line, source_lines.len() + 1);

    let doc = builder.finish();
    debug!(blocks = doc.blocks.len(), "converted wire markup to document");
    doc
}

/// Wrap every `*...*` run in an extra pair of asterisks, one entry per character of
/// the result.
fn mark_doubled_bold(wire: &str) -> Vec<MarkedChar> {
    let mut marked = Vec::with_capacity(wire.len() + 2);
    let mut last = 0;

    for run in BOLD_RUN.find_iter(wire) {
        marked.extend(wire[last..run.start()].chars().map(|c| (c, false)));
        marked.push(('*', true));
        marked.extend(run.as_str().chars().map(|c| (c, false)));
        marked.push(('*', true));
        last = run.end();
    }
    marked.extend(wire[last..].chars().map(|c| (c, false)));

    marked
}

fn default_comrak_options() -> Options<'static> {
    // Plain CommonMark: `~` and bare urls must stay literal text.
    Options::default()
}

/// Walks the doubled source of one paragraph in step with the text Comrak produced.
///
/// Parsed text is a subsequence of the source with delimiters, escapes and link syntax
/// removed, so every emitted character is matched against the next equal source
/// character. Characters that cannot be matched (decoded entities) leave the cursor
/// where it is.
#[derive(Default)]
struct SourceCursor {
    chars: Vec<MarkedChar>,
    pos: usize,
}

impl SourceCursor {
    /// Cursor over source lines `[from, to]` (1-based, inclusive).
    fn over_lines(lines: &[&[MarkedChar]], from: usize, to: usize) -> Self {
        let mut chars = Vec::new();
        for line in from..=to {
            if let Some(marked) = lines.get(line - 1) {
                if line > from {
                    chars.push(('\n', false));
                }
                chars.extend_from_slice(marked);
            }
        }
        SourceCursor { chars, pos: 0 }
    }

    /// Advance past the source character `c` came from. Returns true when that
    /// character was added by the bold pre-pass.
    fn added_by_prepass(&mut self, c: char) -> bool {
        // Code spans turn line endings into spaces.
        let found = self.chars[self.pos..]
            .iter()
            .position(|(source, _)| *source == c || (c == ' ' && *source == '\n'));

        match found {
            Some(offset) => {
                let (_, added) = self.chars[self.pos + offset];
                self.pos += offset + 1;
                added
            }
            None => false,
        }
    }
}

/// Accumulates blocks while walking the Comrak AST.
#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    text: String,
    len: usize,
    ranges: Vec<StyleRange>,
    /// Styles currently open, with the index of their range in `ranges`.
    open: Vec<(StyleType, usize)>,
    source: SourceCursor,
}

impl BlockBuilder {
    /// Emit source lines `[from, to)` (1-based) as unstyled blocks.
    fn push_source_lines(&mut self, lines: &[&str], from: usize, to: usize) {
        for line in from..to {
            if let Some(text) = lines.get(line - 1) {
                self.blocks.push(Block::plain(*text));
            }
        }
    }

    fn paragraph<'a>(&mut self, node: &'a AstNode<'a>, source: SourceCursor) {
        self.source = source;
        for child in node.children() {
            self.inline(child);
        }
        self.end_block();
    }

    fn inline<'a>(&mut self, node: &'a AstNode<'a>) {
        let data = node.data.borrow();

        match &data.value {
            NodeValue::Text(text) => self.push_text(text),
            NodeValue::HtmlInline(html) => self.push_text(html),
            NodeValue::Code(code) => {
                self.open_style(StyleType::Code);
                self.push_text(&code.literal);
                self.close_style();
            }
            NodeValue::SoftBreak | NodeValue::LineBreak => self.break_line(),
            NodeValue::Strong => self.styled(node, StyleType::Bold),
            NodeValue::Emph => self.styled(node, StyleType::Italic),
            _ => {
                // Links, images and anything else contribute their text
                for child in node.children() {
                    self.inline(child);
                }
            }
        }
    }

    fn styled<'a>(&mut self, node: &'a AstNode<'a>, style: StyleType) {
        self.open_style(style);
        for child in node.children() {
            self.inline(child);
        }
        self.close_style();
    }

    fn push_text(&mut self, text: &str) {
        for c in text.chars() {
            if self.source.added_by_prepass(c) {
                continue;
            }
            self.text.push(c);
            self.len += 1;
        }
    }

    fn open_style(&mut self, style: StyleType) {
        self.open.push((style.clone(), self.ranges.len()));
        self.ranges.push(StyleRange::new(style, self.len, 0));
    }

    fn close_style(&mut self) {
        if let Some((_, index)) = self.open.pop() {
            let range = &mut self.ranges[index];
            range.length = self.len - range.offset;
        }
    }

    /// Close the current block and continue the open styles on a new one.
    fn break_line(&mut self) {
        let open = std::mem::take(&mut self.open);
        for (_, index) in &open {
            let range = &mut self.ranges[*index];
            range.length = self.len - range.offset;
        }
        self.end_block();
        for (style, _) in open {
            self.open_style(style);
        }
    }

    fn end_block(&mut self) {
        let mut ranges = std::mem::take(&mut self.ranges);
        ranges.retain(|range| range.length > 0);
        self.blocks
            .push(Block::new(std::mem::take(&mut self.text), ranges));
        self.len = 0;
    }

    fn finish(self) -> RichDocument {
        RichDocument::new(self.blocks)
    }
}
