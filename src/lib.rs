//! Serpentine cable length estimation for a closed 2D region.
//!
//! The region is given as a path description (the `d` attribute of an SVG
//! path). For each spacing radius, lines parallel to every boundary edge are
//! inset at increasing depth, stitched into one zig-zag cable run, and
//! measured:
//!
//! ```
//! use cable_infill::InfillEstimate;
//!
//! let lengths = InfillEstimate::new("M0,0 L10,0 L10,10 L0,10 Z", &[2.0, 4.0])
//!     .execute()?;
//! assert_eq!(lengths.len(), 2);
//! # Ok::<(), cable_infill::InfillError>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use config::InfillConfig;
pub use document::SvgDocument;
pub use error::{InfillError, Result};
pub use geometry::{InsetSide, Segment};
pub use math::Point2;
pub use operations::estimate::{InfillEstimate, SpacingLength, SpacingResult};
