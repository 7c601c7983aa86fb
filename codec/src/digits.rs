// the strokes for the units digits 1-9, drawn on the top-right quadrant of the stem.
// 5, 7, 8 and 9 contain the strokes of earlier digits plus an additional line:
//
//  1      2      3      4      5      6      7      8      9
//  x x x  x _ _  x _ _  x _ x  x x x  x _ x  x x x  x _ x  x x x
//  x _ _  x _ _  x x _  x x _  x x _  x _ x  x _ x  x _ x  x _ x
//  x _ _  x x x  x _ x  x _ _  x _ _  x _ _  x _ _  x x x  x x x
//
// higher orders are reflections of these, see `order`.

use tracing::trace;

use crate::canvas::{Board, Canvas};
use crate::error::{CodecError, Result};
use crate::geometry::{Geometry, HorizontalPosition, VerticalPosition};
use crate::order::Order;

use HorizontalPosition::{Left, Middle, Right};
use VerticalPosition::{Top, TopThird};

/// A canvas holding exactly one digit at one decimal order, tagged with its value.
///
/// Two strokes are equal when their geometry and pixels are equal.
#[derive(Clone, Debug)]
pub struct Stroke {
    value: u32,
    geometry: Geometry,
    canvas: Canvas,
}

impl Stroke {
    pub fn zero(geometry: Geometry) -> Result<Self> {
        let canvas = Canvas::new(geometry.height(), geometry.width(), false)?;
        Ok(Stroke { value: 0, geometry, canvas })
    }

    pub(crate) fn from_parts(value: u32, geometry: Geometry, canvas: Canvas) -> Self {
        Stroke { value, geometry, canvas }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn order(&self) -> Option<Order> {
        Order::of_value(self.value)
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn height(&self) -> usize {
        self.geometry.height()
    }

    pub fn width(&self) -> usize {
        self.geometry.width()
    }

    pub fn pixel_count(&self) -> usize {
        self.canvas.pixel_count()
    }
}

impl PartialEq for Stroke {
    fn eq(&self, other: &Self) -> bool {
        self.geometry == other.geometry && self.canvas == other.canvas
    }
}

impl Eq for Stroke {}

impl AsRef<Canvas> for Stroke {
    fn as_ref(&self) -> &Canvas {
        &self.canvas
    }
}

impl Board for Stroke {
    fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.canvas.to_matrix()
    }
}

// a horizontal line at `location`, starting from the central line and going in `direction`
pub fn add_horizontal_line(canvas: &mut Canvas, geometry: &Geometry, location: VerticalPosition, direction: HorizontalPosition) {
    let row = geometry.resolve_vertical(location).min(geometry.last_row());
    let (start, end) = if direction == Right { (Middle, Right) } else { (Left, Middle) };
    canvas.draw_horizontal(geometry.resolve_horizontal(start), geometry.resolve_horizontal(end), row);
}

pub fn add_vertical_line(canvas: &mut Canvas, geometry: &Geometry, column: HorizontalPosition, start: VerticalPosition, end: VerticalPosition) {
    let (start, end) = (geometry.resolve_vertical(start), geometry.resolve_vertical(end));
    let (start, end) = if start < end { (start, end) } else { (end, start) };
    let col = geometry.resolve_horizontal(column).min(geometry.last_col());
    canvas.draw_vertical(start, end, col);
}

// diagonals start on the central line at `start` and run outwards to `end` on the `direction` edge
pub fn add_diagonal_line(canvas: &mut Canvas, geometry: &Geometry, start: VerticalPosition, end: VerticalPosition, direction: HorizontalPosition) {
    canvas.draw_diagonal(
        geometry.resolve_horizontal(Middle),
        geometry.resolve_horizontal(direction),
        geometry.resolve_vertical(start),
        geometry.resolve_vertical(end),
    );
}

pub fn build_digit(geometry: Geometry, digit: u32) -> Result<Stroke> {
    if !(1..=9).contains(&digit) {
        return Err(CodecError::InvalidKey(digit.to_string()));
    }
    let mut canvas = Canvas::new(geometry.height(), geometry.width(), true)?;

    // the basic line of each digit
    match digit {
        1 => add_horizontal_line(&mut canvas, &geometry, Top, Right),
        2 => add_horizontal_line(&mut canvas, &geometry, TopThird, Right),
        3 => add_diagonal_line(&mut canvas, &geometry, Top, TopThird, Right),
        4 | 5 => add_diagonal_line(&mut canvas, &geometry, TopThird, Top, Right),
        _ => add_vertical_line(&mut canvas, &geometry, Right, Top, TopThird),
    }

    // digits that contain an earlier digit get their additional line
    match digit {
        5 | 7 => add_horizontal_line(&mut canvas, &geometry, Top, Right),
        8 | 9 => add_horizontal_line(&mut canvas, &geometry, TopThird, Right),
        _ => {}
    }
    if digit == 9 {
        add_horizontal_line(&mut canvas, &geometry, Top, Right);
    }

    trace!(digit, height = geometry.height(), width = geometry.width(), "built digit stroke");
    Ok(Stroke { value: digit, geometry, canvas })
}
