//! Running detection statistics.

use std::collections::{BTreeMap, BTreeSet};

use crate::tracker::Detection;

/// Aggregates per-frame detections and association results into running
/// totals.
///
/// Consumes only the association output (the detection → identity
/// mapping), never the track store's internals. All collections grow
/// with the number of distinct classes and identities ever seen, not
/// with frame count.
#[derive(Debug, Default)]
pub struct DetectionStats {
    total_detections: u64,
    avg_confidence: f64,
    class_counts: BTreeMap<String, u64>,
    seen_identities: BTreeSet<u64>,
}

/// Point-in-time view of the running statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    /// Detections across all frames, monotonic
    pub total_detections: u64,
    /// Weighted running mean confidence, as a percentage
    pub avg_confidence: f64,
    /// Identities ever matched, including expired ones
    pub unique_objects: usize,
    /// Detections per class label across all frames
    pub class_counts: BTreeMap<String, u64>,
}

impl DetectionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one frame's detections and identity assignments into the
    /// running totals. A frame with no detections changes nothing.
    ///
    /// The mean confidence is a weighted incremental mean over all
    /// detections ever seen, with each frame's confidence sum scaled to
    /// percent before mixing. The formula is kept exactly as the
    /// downstream display expects it; replacing it with a plain
    /// arithmetic mean would change observable output.
    pub fn update(&mut self, detections: &[Detection], assignments: &BTreeMap<usize, u64>) {
        if detections.is_empty() {
            return;
        }

        let frame_count = detections.len() as u64;
        self.total_detections += frame_count;
        self.seen_identities.extend(assignments.values().copied());

        let mut frame_confidence = 0.0f64;
        for detection in detections {
            *self.class_counts.entry(detection.label.clone()).or_insert(0) += 1;
            frame_confidence += detection.score as f64;
        }

        self.avg_confidence = (self.avg_confidence
            * (self.total_detections - frame_count) as f64
            + frame_confidence * 100.0)
            / self.total_detections as f64;
    }

    /// Current totals. Pure read; valid before the first `update`.
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            total_detections: self.total_detections,
            avg_confidence: self.avg_confidence,
            unique_objects: self.seen_identities.len(),
            class_counts: self.class_counts.clone(),
        }
    }
}
