mod offset_lines_2d;

pub use offset_lines_2d::{OffsetLines2D, DEFAULT_SPACING_MULTIPLIER, MAX_LINES_PER_EDGE};
