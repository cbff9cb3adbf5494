mod infill_estimate;

pub use infill_estimate::{InfillEstimate, SpacingLength, SpacingResult};
