// a fixed-size binary raster that every stroke and composite glyph is drawn on.
//
// cells are a mask, not counts: drawing only ever sets pixels, and combining two
// canvases takes the pixelwise max (union), so a pixel shared by two strokes stays 1:
// x _     _ x     x x
// x _  +  x x  =  x x
//
// the central stem is the full-height column at floor(width / 2).

use crate::error::{CodecError, Result};

pub trait Board {
    // a board of pixels, rendered as rows of 0/1 cells
    fn to_matrix(&self) -> Vec<Vec<u8>>;

    fn render(&self) -> String {
        let mut out = String::new();
        for row in self.to_matrix() {
            let cells: Vec<&str> = row.iter().map(|&pixel| cell(pixel == 1)).collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }
        out
    }

    fn print(&self) {
        print!("{}", self.render());
    }
}

#[cfg(feature = "human_readable")]
fn cell(set: bool) -> &'static str {
    if set { "x" } else { " " }
}

#[cfg(not(feature = "human_readable"))]
fn cell(set: bool) -> &'static str {
    if set { "1" } else { "0" }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Canvas {
    height: usize,
    width: usize,
    // row-major, height * width cells
    cells: Vec<bool>,
}

impl Canvas {
    pub fn new(height: usize, width: usize, seeded: bool) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(CodecError::InvalidDimensions { height, width });
        }
        let mut canvas = Canvas { height, width, cells: vec![false; height * width] };
        if seeded {
            // every non-zero symbol has the central line
            canvas.draw_vertical(0, height, width / 2);
        }
        Ok(canvas)
    }

    pub fn from_matrix<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut canvas = Canvas::new(height, width, false)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(CodecError::SizeMismatch { expected: (height, width), found: (height, row.len()) });
            }
            for (j, &pixel) in row.iter().enumerate() {
                if pixel != 0 {
                    canvas.set(i as isize, j as isize);
                }
            }
        }
        Ok(canvas)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    // out-of-bounds pixels are skipped, not errors
    fn set(&mut self, row: isize, col: isize) {
        if row < 0 || col < 0 {
            return;
        }
        let (row, col) = (row as usize, col as usize);
        if row < self.height && col < self.width {
            self.cells[row * self.width + col] = true;
        }
    }

    pub fn draw_vertical(&mut self, row_start: usize, row_end: usize, col: usize) {
        for row in row_start..row_end.min(self.height) {
            self.set(row as isize, col as isize);
        }
    }

    pub fn draw_horizontal(&mut self, col_start: usize, col_end: usize, row: usize) {
        for col in col_start..col_end.min(self.width) {
            self.set(row as isize, col as isize);
        }
    }

    // sets the start pixel, walks one column per row until either axis reaches its
    // (exclusive) end, then closes the line on the pixel at (row_end, col_end - 1)
    pub fn draw_diagonal(&mut self, col_start: usize, col_end: usize, row_start: usize, row_end: usize) {
        self.set(row_start as isize, col_start as isize);
        for (col, row) in walk(col_start, col_end).zip(walk(row_start, row_end)) {
            self.set(row, col);
        }
        self.set(row_end as isize, col_end.saturating_sub(1) as isize);
    }

    pub fn pixel_count(&self) -> usize {
        self.cells.iter().filter(|&&pixel| pixel).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&pixel| pixel)
    }

    pub fn flip_horizontal(&self) -> Canvas {
        let mut flipped = self.clone();
        for row in flipped.cells.chunks_mut(self.width) {
            row.reverse();
        }
        flipped
    }

    pub fn flip_vertical(&self) -> Canvas {
        let cells = self.cells.chunks(self.width).rev().flatten().copied().collect();
        Canvas { height: self.height, width: self.width, cells }
    }

    pub fn union(&self, other: &Canvas) -> Result<Canvas> {
        self.check_shape(other)?;
        let cells = self.cells.iter().zip(&other.cells).map(|(&a, &b)| a || b).collect();
        Ok(Canvas { height: self.height, width: self.width, cells })
    }

    pub fn intersection_count(&self, other: &Canvas) -> Result<usize> {
        self.check_shape(other)?;
        Ok(self.cells.iter().zip(&other.cells).filter(|&(&a, &b)| a && b).count())
    }

    // true if every pixel of `other` is also set here
    pub fn contains(&self, other: &Canvas) -> Result<bool> {
        Ok(self.intersection_count(other)? == other.pixel_count())
    }

    fn check_shape(&self, other: &Canvas) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(CodecError::SizeMismatch { expected: self.shape(), found: other.shape() });
        }
        Ok(())
    }
}

impl Board for Canvas {
    fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.cells.chunks(self.width).map(|row| row.iter().map(|&pixel| pixel as u8).collect()).collect()
    }
}

impl AsRef<Canvas> for Canvas {
    fn as_ref(&self) -> &Canvas {
        self
    }
}

// the indices visited going from start toward end, end excluded
fn walk(start: usize, end: usize) -> Box<dyn Iterator<Item = isize>> {
    let (start, end) = (start as isize, end as isize);
    if start < end {
        Box::new(start..end)
    } else {
        Box::new(((end + 1)..=start).rev())
    }
}
