//! Pipeline combining detection, tracking and statistics.

use std::collections::BTreeMap;

use crate::stats::{DetectionStats, StatsSummary};
use crate::tracker::{IouTracker, TrackSnapshot, TrackerConfig};

use super::DetectionSource;

/// End-to-end per-frame pipeline: any [`DetectionSource`] feeding the
/// tracker, with running statistics folded in after each frame.
///
/// Frames must be processed strictly in acquisition order by a single
/// caller. If acquisition runs elsewhere, hand frames over through a
/// bounded single-slot channel (latest frame wins) — never call
/// `process_frame` concurrently.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: IouTracker,
    stats: DetectionStats,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    /// Create a new pipeline with the given detector and tracker config.
    pub fn new(detector: D, config: TrackerConfig) -> Self {
        Self {
            detector,
            tracker: IouTracker::new(config),
            stats: DetectionStats::new(),
        }
    }

    /// Create a new pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> Self {
        Self::new(detector, TrackerConfig::default())
    }

    /// Process a single frame end to end.
    ///
    /// Runs detection on the input image, updates the tracker, and folds
    /// the frame into the running statistics. Returns the frame's
    /// detection-index → identity mapping; trails and colors are
    /// available through [`overlays`](Self::overlays) and the tracker
    /// accessor.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<BTreeMap<usize, u64>, D::Error> {
        let detections = self.detector.detect(input, width, height)?;
        let assignments = self.tracker.update(&detections);
        self.stats.update(&detections, &assignments);
        Ok(assignments)
    }

    /// Render state for every active track, for overlay painting.
    pub fn overlays(&self) -> Vec<TrackSnapshot> {
        self.tracker.snapshot()
    }

    /// Current statistics, for on-screen display.
    pub fn summary(&self) -> StatsSummary {
        self.stats.summary()
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &IouTracker {
        &self.tracker
    }

    /// Get a reference to the statistics aggregator.
    pub fn stats(&self) -> &DetectionStats {
        &self.stats
    }
}
