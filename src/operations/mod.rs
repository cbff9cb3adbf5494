pub mod estimate;
pub mod offset;
pub mod parse;
pub mod query;
pub mod trace;
