// data consts
pub const DATA_MIN_VALUE: u32 = 0;
pub const DATA_MAX_VALUE: u32 = 9; // 9999 is max, lower values selected for quicker training
pub const DATA_MIN_HEIGHT: usize = 7;
pub const DATA_MAX_HEIGHT: usize = 100;
pub const DATA_MIN_WIDTH: usize = 5;
pub const DATA_MAX_WIDTH: usize = 100;

// network input is INPUT_SIZE x INPUT_SIZE
pub const INPUT_SIZE: u32 = 28;

pub const BATCH_SIZE: usize = 512;
