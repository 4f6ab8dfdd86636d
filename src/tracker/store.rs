//! Authoritative per-identity track state and lifecycle transitions.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use thiserror::Error;

use crate::tracker::identity::color_for;
use crate::tracker::rect::Rect;
use crate::tracker::track::Track;

/// Errors surfaced by track state queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    /// The queried identity is in neither the active nor the lost set.
    /// Callers must only query identities returned by a current or prior
    /// frame's association result, and expired identities are gone for
    /// good.
    #[error("unknown track identity {0}")]
    UnknownIdentity(u64),
}

/// Owns every live track, split into the active and lost sets.
///
/// A track is in exactly one of the two sets at any time. Both sets are
/// keyed by identity in `BTreeMap`s, so all iteration — including the
/// association engine's tie-breaking scan — runs in ascending-identity
/// order, which makes matching reproducible.
#[derive(Debug, Default)]
pub struct TrackStore {
    active: BTreeMap<u64, Track>,
    lost: BTreeMap<u64, Track>,
}

impl TrackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity and last known box of every active track, ascending by
    /// identity.
    pub fn active_boxes(&self) -> Vec<(u64, Rect)> {
        self.active.iter().map(|(&id, t)| (id, t.last_box)).collect()
    }

    /// Identity and last known box of every lost track, ascending by
    /// identity. Lost tracks are always within the forgiveness window;
    /// anything past it has already been deleted.
    pub fn lost_boxes(&self) -> Vec<(u64, Rect)> {
        self.lost.iter().map(|(&id, t)| (id, t.last_box)).collect()
    }

    /// Active tracks in ascending-identity order.
    pub fn iter_active(&self) -> impl Iterator<Item = &Track> {
        self.active.values()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn lost_count(&self) -> usize {
        self.lost.len()
    }

    /// Look up a track in either set.
    pub fn get(&self, identity: u64) -> Option<&Track> {
        self.active.get(&identity).or_else(|| self.lost.get(&identity))
    }

    fn contains(&self, identity: u64) -> bool {
        self.active.contains_key(&identity) || self.lost.contains_key(&identity)
    }

    /// Fold a frame's association result into the store.
    ///
    /// For every assigned (detection, identity) pair: a lost identity is
    /// reactivated with its trail intact, an unseen identity gets a fresh
    /// track, and in all cases the detection box replaces the last known
    /// box and its center is appended to the bounded trail.
    pub fn commit(
        &mut self,
        assignments: &BTreeMap<usize, u64>,
        boxes: &[Rect],
        max_history: usize,
    ) {
        for (&det_idx, &identity) in assignments {
            let bbox = boxes[det_idx];
            if let Some(mut track) = self.lost.remove(&identity) {
                debug!("track {identity} reactivated after {} lost frames", track.frames_lost);
                track.reactivate();
                self.active.insert(identity, track);
            } else if !self.active.contains_key(&identity) {
                self.active.insert(identity, Track::new(identity, bbox));
            }
            if let Some(track) = self.active.get_mut(&identity) {
                track.observe(bbox, max_history);
            }
        }
    }

    /// Advance the lifecycle clock after a frame's `commit`.
    ///
    /// Tracks that were already lost before this frame age by one, and
    /// any whose counter passes `max_lost_frames` is deleted permanently.
    /// Active tracks absent from `matched` then move to the lost set with
    /// a counter of 0; they start aging on the next frame.
    pub fn age(&mut self, matched: &BTreeSet<u64>, max_lost_frames: u32) {
        let mut expired = Vec::new();
        for (&identity, track) in self.lost.iter_mut() {
            track.frames_lost += 1;
            if track.frames_lost > max_lost_frames {
                expired.push(identity);
            }
        }
        for identity in expired {
            self.lost.remove(&identity);
            debug!("track {identity} expired, history discarded");
        }

        let newly_lost: Vec<u64> = self
            .active
            .keys()
            .copied()
            .filter(|id| !matched.contains(id))
            .collect();
        for identity in newly_lost {
            if let Some(mut track) = self.active.remove(&identity) {
                track.mark_lost();
                self.lost.insert(identity, track);
                debug!("track {identity} lost");
            }
        }
    }

    /// Deterministic render color for a live identity.
    pub fn color_of(&self, identity: u64) -> Result<[u8; 3], TrackError> {
        if self.contains(identity) {
            Ok(color_for(identity))
        } else {
            Err(TrackError::UnknownIdentity(identity))
        }
    }

    /// The identity's recent center points, oldest first. Empty for a
    /// track created this frame before its first `commit`.
    pub fn history_of(&self, identity: u64) -> Result<Vec<(f32, f32)>, TrackError> {
        self.get(identity)
            .map(|t| t.trail.iter().copied().collect())
            .ok_or(TrackError::UnknownIdentity(identity))
    }
}
