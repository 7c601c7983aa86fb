//! Cistercian numerals: a single glyph holds a number in `[0, 9999]`, one stroke per
//! decimal order drawn on a quadrant of a shared central line.
//!
//! [`StrokeMapping`] holds the strokes for one canvas size, [`arabic_to_cistercian`]
//! overlays them into a [`CompositeNumber`] and [`cistercian_to_arabic`] reads a glyph
//! back from its pixels.

pub mod canvas;
pub mod consts;
pub mod digits;
pub mod error;
pub mod geometry;
pub mod mapping;
pub mod number;
pub mod order;

pub use canvas::{Board, Canvas};
pub use digits::Stroke;
pub use error::{CodecError, Result};
pub use geometry::{Geometry, HorizontalPosition, VerticalPosition};
pub use mapping::{build_mapping, StrokeMapping};
pub use number::{arabic_to_cistercian, cistercian_to_arabic, decode, encode, encode_with_size, find_contained_strokes, Arabic, CompositeNumber};
pub use order::Order;
