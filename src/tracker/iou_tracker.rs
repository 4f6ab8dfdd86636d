//! Frame-by-frame tracking facade.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::tracker::association::{Detection, associate};
use crate::tracker::identity::IdentityAllocator;
use crate::tracker::rect::Rect;
use crate::tracker::store::{TrackError, TrackStore};

/// Configuration for the [`IouTracker`].
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Minimum IoU (exclusive) for a detection to claim a track
    pub iou_threshold: f32,
    /// Trail length bound per identity
    pub max_history: usize,
    /// Lost frames tolerated before a track is deleted
    pub max_lost_frames: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            iou_threshold: 0.3,
            max_history: 30,
            max_lost_frames: 30,
        }
    }
}

/// Render state for one active track, snapshotted for the drawing
/// collaborator.
#[derive(Debug, Clone)]
pub struct TrackSnapshot {
    pub identity: u64,
    pub bbox: Rect,
    pub trail: Vec<(f32, f32)>,
    pub color: [u8; 3],
}

/// Online multi-object tracker with greedy IoU association.
///
/// Single-writer: `update` must be called exactly once per frame, in
/// acquisition order, and never concurrently — the previous frame's
/// track state is the association's only input besides the detections.
pub struct IouTracker {
    store: TrackStore,
    allocator: IdentityAllocator,
    config: TrackerConfig,
    frame_id: u64,
}

impl IouTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            store: TrackStore::new(),
            allocator: IdentityAllocator::new(),
            config,
            frame_id: 0,
        }
    }

    /// Process one frame of detections.
    ///
    /// Associates the detections against the active then the lost
    /// tracks, commits the matches, and advances the lifecycle clock:
    /// unmatched active tracks become lost, stale lost tracks age and
    /// eventually expire. An empty frame still ages and expires tracks.
    ///
    /// Returns the detection-index → identity mapping for this frame.
    pub fn update(&mut self, detections: &[Detection]) -> BTreeMap<usize, u64> {
        self.frame_id += 1;

        let boxes: Vec<Rect> = detections.iter().map(|d| d.bbox).collect();
        let assignments = associate(
            &self.store,
            &boxes,
            self.config.iou_threshold,
            &mut self.allocator,
        );
        self.store.commit(&assignments, &boxes, self.config.max_history);

        let matched: BTreeSet<u64> = assignments.values().copied().collect();
        self.store.age(&matched, self.config.max_lost_frames);

        debug!(
            "frame {}: {} detections, {} active, {} lost",
            self.frame_id,
            detections.len(),
            self.store.active_count(),
            self.store.lost_count()
        );

        assignments
    }

    /// Recent center points of a live identity, oldest first.
    pub fn history_of(&self, identity: u64) -> Result<Vec<(f32, f32)>, TrackError> {
        self.store.history_of(identity)
    }

    /// Deterministic render color of a live identity.
    pub fn color_of(&self, identity: u64) -> Result<[u8; 3], TrackError> {
        self.store.color_of(identity)
    }

    /// Render state of every active track, ascending by identity.
    pub fn snapshot(&self) -> Vec<TrackSnapshot> {
        self.store
            .iter_active()
            .map(|track| TrackSnapshot {
                identity: track.identity,
                bbox: track.last_box,
                trail: track.trail.iter().copied().collect(),
                color: crate::tracker::identity::color_for(track.identity),
            })
            .collect()
    }

    pub fn store(&self) -> &TrackStore {
        &self.store
    }

    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }
}
