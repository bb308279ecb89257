//! Conversion between rich editor documents and WhatsApp-style markup
//!
//!     Messages are composed in a rich text editor, sent as WhatsApp-style plain text
//!     (`*bold*`, `_italic_`, `~strike~`, ``` ``code`` ```), and displayed again as typed
//!     inline elements. This crate holds the three conversions between those shapes:
//!
//!     - Editor → Wire: [`convert_document_to_wire`], splicing markers into block text
//!     - Wire → Editor: [`convert_wire_to_document`], via Comrak
//!     - Wire → Display: [`render_wire_as_inline`], an ordered regex rule fold
//!
//!     This is a pure lib: no I/O, no process state, no printing. The cli crate is the
//!     shell around it.
//!
//! Architecture
//!
//!     The data model lives in ./model (the editor's raw content shape and the inline
//!     elements), and the conversions live in ./common, independent of any file format.
//!     The pieces of marker knowledge shared by parsing and rendering are in
//!     ./common/rules.rs.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── wire                # WhatsApp markup (parse + serialize)
//!     │   ├── raw                 # editor raw content JSON (parse + serialize)
//!     │   └── tag                 # XML-like view of rendered elements (serialize)
//!     ├── lib.rs
//!     ├── model                   # RichDocument, StyleRange, InlineElement
//!     └── common                  # the conversion core
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait, exactly as the
//!     conversions are exposed to the cli: parse() into a RichDocument and serialize() out
//!     of one, with a name and file extensions. The FormatRegistry selects between them.
//!
//! Lossy Conversions
//!
//!     Wire markup only knows bold and italic as editor styles. Everything else (underline,
//!     code, strikethrough ranges) is dropped on export, so full round tripping is only
//!     possible for bold/italic documents. For those, wire → document → wire is stable.
//!
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod model;
pub mod registry;

pub use common::from_wire::convert_wire_to_document;
pub use common::render::{
    render_wire_as_inline, render_wire_as_inline_with_options, RenderOptions, RenderSource,
};
pub use common::to_wire::{convert_document_to_wire, convert_document_to_wire_with_rules, WireRules};
pub use error::FormatError;
pub use format::Format;
pub use model::{Block, InlineElement, LinkAttributes, RichDocument, StyleRange, StyleType};
pub use registry::FormatRegistry;
