//! Per-identity track state.

use std::collections::VecDeque;

use crate::tracker::rect::Rect;
use crate::tracker::track_state::TrackState;

/// One followed object across frames.
///
/// A track is created the first frame its identity is allocated and owns
/// the identity's last known box, a bounded trail of recent center points,
/// and the lost-frame counter used by the forgiveness window.
#[derive(Debug, Clone)]
pub struct Track {
    /// Stable identity, unique for the tracker's lifetime
    pub identity: u64,
    /// Lifecycle state
    pub state: TrackState,
    /// Last known bounding box
    pub last_box: Rect,
    /// Recent center points, oldest first, bounded by the tracker's
    /// history length
    pub trail: VecDeque<(f32, f32)>,
    /// Consecutive frames without a match; 0 while Active
    pub frames_lost: u32,
}

impl Track {
    /// Create a fresh active track. The trail starts empty; the first
    /// center is appended by the same frame's `observe` call.
    pub fn new(identity: u64, bbox: Rect) -> Self {
        Self {
            identity,
            state: TrackState::Active,
            last_box: bbox,
            trail: VecDeque::new(),
            frames_lost: 0,
        }
    }

    /// Fold a matching detection into the track: update the last known
    /// box and append its center, evicting the oldest point once the
    /// trail exceeds `max_history`.
    pub fn observe(&mut self, bbox: Rect, max_history: usize) {
        self.last_box = bbox;
        self.trail.push_back(bbox.center());
        while self.trail.len() > max_history {
            self.trail.pop_front();
        }
    }

    /// Return a lost track to the active state. The trail is retained
    /// and keeps accumulating from where it left off.
    pub fn reactivate(&mut self) {
        self.state = TrackState::Active;
        self.frames_lost = 0;
    }

    /// Move an active track to the lost state. The counter starts at 0
    /// at the moment of loss and is aged on subsequent frames.
    pub fn mark_lost(&mut self) {
        self.state = TrackState::Lost;
        self.frames_lost = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_track_is_active_with_empty_trail() {
        let track = Track::new(3, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(track.identity, 3);
        assert_eq!(track.state, TrackState::Active);
        assert_eq!(track.frames_lost, 0);
        assert!(track.trail.is_empty());
    }

    #[test]
    fn test_observe_appends_center() {
        let mut track = Track::new(0, Rect::new(0.0, 0.0, 10.0, 10.0));
        track.observe(Rect::new(0.0, 0.0, 10.0, 10.0), 30);
        track.observe(Rect::new(2.0, 2.0, 12.0, 12.0), 30);
        assert_eq!(
            track.trail.iter().copied().collect::<Vec<_>>(),
            vec![(5.0, 5.0), (7.0, 7.0)]
        );
    }

    #[test]
    fn test_trail_is_bounded_fifo() {
        let mut track = Track::new(0, Rect::default());
        for i in 0..40 {
            let offset = i as f32;
            track.observe(Rect::new(offset, 0.0, offset + 10.0, 10.0), 30);
        }
        assert_eq!(track.trail.len(), 30);
        // The 30 most recent centers survive, in chronological order.
        assert_eq!(track.trail.front().copied(), Some((15.0, 5.0)));
        assert_eq!(track.trail.back().copied(), Some((44.0, 5.0)));
    }

    #[test]
    fn test_lost_and_reactivate_keep_trail() {
        let mut track = Track::new(0, Rect::new(0.0, 0.0, 10.0, 10.0));
        track.observe(Rect::new(0.0, 0.0, 10.0, 10.0), 30);
        track.mark_lost();
        assert_eq!(track.state, TrackState::Lost);
        assert_eq!(track.frames_lost, 0);

        track.frames_lost = 5;
        track.reactivate();
        assert_eq!(track.state, TrackState::Active);
        assert_eq!(track.frames_lost, 0);
        assert_eq!(track.trail.len(), 1);
    }
}
