//! Integration module for wiring detection backends to the tracker.
//!
//! The tracking core never runs inference or touches pixels itself; this
//! module provides the seam where a detection collaborator plugs in, plus
//! a pipeline that drives tracker and statistics together, one frame at a
//! time.

mod builder;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use pipeline::TrackerPipeline;
