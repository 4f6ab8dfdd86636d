//! Online multi-object tracking and analytics.
//!
//! The crate takes an unordered set of per-frame object detections and
//! assigns each one a temporally stable identity, keeps a bounded trail of
//! center points per identity, recovers identities across short detection
//! gaps, and folds every frame into running statistics (total detections,
//! weighted mean confidence, per-class counts, unique identities).
//!
//! Association is greedy IoU matching against the previous frame's boxes —
//! no motion model, no re-identification. It is meant for a few dozen
//! objects per frame; cost grows quadratically with active plus lost tracks.
//!
//! The tracker is single-writer: call [`IouTracker::update`] exactly once
//! per frame, in acquisition order. Nothing in the crate performs I/O.

pub mod integration;
pub mod stats;
pub mod tracker;

pub use integration::{DetectionBuilder, DetectionSource, TrackerPipeline};
pub use stats::{DetectionStats, StatsSummary};
pub use tracker::{Detection, IouTracker, Rect, TrackError, TrackSnapshot, TrackerConfig};
