pub mod inset_side;
pub mod segment;

pub use inset_side::InsetSide;
pub use segment::Segment;
