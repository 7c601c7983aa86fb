// semantic positions on a symbol and their pixel coordinates for one canvas size:
//
//  LEFT  MIDDLE  RIGHT
//    _     x     _      TOP
//    _     x     _
//    _     x     _      TOP_THIRD     round(height / 3)
//    _     x     _
//    _     x     _      BOTTOM_THIRD  2 * round(height / 3)
//    _     x     _
//    _     x     _
//                       BOTTOM        height
//
// BOTTOM and RIGHT resolve one past the last index; callers that need a pixel clamp them.

use std::fmt;
use std::str::FromStr;

use crate::error::{CodecError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalPosition {
    Top,
    Bottom,
    TopThird,
    BottomThird,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalPosition {
    Left,
    Right,
    Middle,
}

impl FromStr for VerticalPosition {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top" => Ok(VerticalPosition::Top),
            "bottom" => Ok(VerticalPosition::Bottom),
            "top_third" => Ok(VerticalPosition::TopThird),
            "bottom_third" => Ok(VerticalPosition::BottomThird),
            _ => Err(CodecError::InvalidToken(s.to_string())),
        }
    }
}

impl FromStr for HorizontalPosition {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(HorizontalPosition::Left),
            "right" => Ok(HorizontalPosition::Right),
            "mid" => Ok(HorizontalPosition::Middle),
            _ => Err(CodecError::InvalidToken(s.to_string())),
        }
    }
}

impl fmt::Display for VerticalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VerticalPosition::Top => "top",
            VerticalPosition::Bottom => "bottom",
            VerticalPosition::TopThird => "top_third",
            VerticalPosition::BottomThird => "bottom_third",
        })
    }
}

impl fmt::Display for HorizontalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HorizontalPosition::Left => "left",
            HorizontalPosition::Right => "right",
            HorizontalPosition::Middle => "mid",
        })
    }
}

/// Canvas dimensions together with the derived third-height and mid-width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Geometry {
    height: usize,
    width: usize,
    third_height: usize,
    mid_width: usize,
}

impl Geometry {
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(CodecError::InvalidDimensions { height, width });
        }
        Ok(Geometry {
            height,
            width,
            // round(height / 3); the fraction is never exactly one half
            third_height: (height + 1) / 3,
            mid_width: width / 2,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn third_height(&self) -> usize {
        self.third_height
    }

    pub fn mid_width(&self) -> usize {
        self.mid_width
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn resolve_vertical(&self, position: VerticalPosition) -> usize {
        match position {
            VerticalPosition::Top => 0,
            VerticalPosition::Bottom => self.height,
            VerticalPosition::TopThird => self.third_height,
            VerticalPosition::BottomThird => 2 * self.third_height,
        }
    }

    pub fn resolve_horizontal(&self, position: HorizontalPosition) -> usize {
        match position {
            HorizontalPosition::Left => 0,
            HorizontalPosition::Right => self.width,
            HorizontalPosition::Middle => self.mid_width,
        }
    }

    // textual tokens, as written in recipes and on the command line
    pub fn resolve_vertical_token(&self, token: &str) -> Result<usize> {
        Ok(self.resolve_vertical(token.parse()?))
    }

    pub fn resolve_horizontal_token(&self, token: &str) -> Result<usize> {
        Ok(self.resolve_horizontal(token.parse()?))
    }

    pub fn last_row(&self) -> usize {
        self.height - 1
    }

    pub fn last_col(&self) -> usize {
        self.width - 1
    }
}
