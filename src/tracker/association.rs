//! Greedy detection-to-track association.

use std::collections::BTreeMap;

use log::trace;

use crate::tracker::identity::IdentityAllocator;
use crate::tracker::rect::{Rect, iou_matrix};
use crate::tracker::store::TrackStore;

/// One detection from the current frame.
///
/// Ephemeral input owned by the caller; the engine keeps nothing of it
/// beyond the box committed into the matched track.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Bounding box in corner form (x1, y1, x2, y2)
    pub bbox: Rect,
    /// Class label
    pub label: String,
    /// Confidence score in [0, 1]
    pub score: f32,
}

impl Detection {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, label: impl Into<String>, score: f32) -> Self {
        Self {
            bbox: Rect::new(x1, y1, x2, y2),
            label: label.into(),
            score,
        }
    }

    pub fn from_rect(bbox: Rect, label: impl Into<String>, score: f32) -> Self {
        Self {
            bbox,
            label: label.into(),
            score,
        }
    }
}

/// Match a frame's detection boxes against the store.
///
/// Three greedy passes, deterministic given input order:
/// 1. active tracks — each detection, in input order, claims the
///    unclaimed active track with the highest IoU strictly above the
///    threshold; equal IoU keeps the lowest identity, because tracks are
///    scanned in ascending-identity order and only a strictly better IoU
///    displaces the current best;
/// 2. lost tracks — same greedy rule for the detections still unmatched,
///    claiming the identity for reactivation;
/// 3. fresh identities — every remaining detection gets a newly
///    allocated identity.
///
/// The store is not mutated here; the returned detection-index →
/// identity mapping is applied by `TrackStore::commit`.
pub fn associate(
    store: &TrackStore,
    boxes: &[Rect],
    iou_threshold: f32,
    allocator: &mut IdentityAllocator,
) -> BTreeMap<usize, u64> {
    let mut assignments = BTreeMap::new();
    let mut unmatched: Vec<usize> = (0..boxes.len()).collect();

    greedy_pass(boxes, &mut unmatched, &store.active_boxes(), iou_threshold, &mut assignments);
    greedy_pass(boxes, &mut unmatched, &store.lost_boxes(), iou_threshold, &mut assignments);

    for det_idx in unmatched {
        let identity = allocator.allocate();
        trace!("detection {det_idx} starts track {identity}");
        assignments.insert(det_idx, identity);
    }

    assignments
}

/// One greedy matching pass over a candidate track set. Matched
/// detections are removed from `unmatched` (input order preserved) and
/// each candidate is claimed at most once.
fn greedy_pass(
    boxes: &[Rect],
    unmatched: &mut Vec<usize>,
    candidates: &[(u64, Rect)],
    iou_threshold: f32,
    assignments: &mut BTreeMap<usize, u64>,
) {
    if candidates.is_empty() || unmatched.is_empty() {
        return;
    }

    let candidate_rects: Vec<Rect> = candidates.iter().map(|&(_, r)| r).collect();
    let ious = iou_matrix(boxes, &candidate_rects);
    let mut claimed = vec![false; candidates.len()];

    unmatched.retain(|&det_idx| {
        let mut best_iou = iou_threshold;
        let mut best_col = None;
        for col in 0..candidates.len() {
            if claimed[col] {
                continue;
            }
            let iou = ious[[det_idx, col]];
            if iou > best_iou {
                best_iou = iou;
                best_col = Some(col);
            }
        }
        match best_col {
            Some(col) => {
                let identity = candidates[col].0;
                claimed[col] = true;
                trace!("detection {det_idx} matched track {identity} (iou {best_iou:.3})");
                assignments.insert(det_idx, identity);
                false
            }
            None => true,
        }
    });
}
