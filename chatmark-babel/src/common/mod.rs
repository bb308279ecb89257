//! Format agnostic conversion core.
//!
//! - [`rules`]: the ordered marker-pair regex set shared by wire parsing and rendering
//! - [`to_wire`]: rich document → wire markup (style-range splicing)
//! - [`from_wire`]: wire markup → rich document (comrak backed)
//! - [`render`]: wire markup → typed inline elements

pub mod from_wire;
pub mod render;
pub mod rules;
pub mod to_wire;
