// default symbol sizes: the smallest size the composite strokes stay apart at,
// and the size used for showing a number on screen
pub const DEFAULT_HEIGHT: usize = 7;
pub const DEFAULT_WIDTH: usize = 5;

pub const DISPLAY_HEIGHT: usize = 17;
pub const DISPLAY_WIDTH: usize = 15;

pub const MAX_VALUE: u32 = 9999;
