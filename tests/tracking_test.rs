use std::collections::BTreeMap;

use trailtrack_rs::tracker::color_for;
use trailtrack_rs::{Detection, DetectionStats, IouTracker, TrackError, TrackerConfig};

fn person(x1: f32, y1: f32, x2: f32, y2: f32) -> Detection {
    Detection::new(x1, y1, x2, y2, "person", 0.9)
}

#[test]
fn test_track_lifecycle_end_to_end() {
    let mut tracker = IouTracker::new(TrackerConfig::default());

    // Frame 1: one detection, first identity.
    let m1 = tracker.update(&[person(0.0, 0.0, 10.0, 10.0)]);
    assert_eq!(m1, BTreeMap::from([(0, 0)]));
    assert_eq!(tracker.history_of(0).unwrap().len(), 1);

    // Frame 2: moved slightly, IoU about 0.81 keeps the identity.
    let m2 = tracker.update(&[person(1.0, 1.0, 11.0, 11.0)]);
    assert_eq!(m2, BTreeMap::from([(0, 0)]));
    assert_eq!(tracker.history_of(0).unwrap().len(), 2);

    // Frame 3: no detections, the track goes lost with a zeroed counter.
    tracker.update(&[]);
    let track = tracker.store().get(0).unwrap();
    assert_eq!(track.frames_lost, 0);

    // Frames 4-33: still nothing; the track stays within the window.
    for _ in 0..30 {
        tracker.update(&[]);
    }
    assert_eq!(tracker.store().get(0).unwrap().frames_lost, 30);

    // Frame 34: one frame past the window, deleted for good.
    tracker.update(&[]);
    assert_eq!(tracker.history_of(0), Err(TrackError::UnknownIdentity(0)));
    assert_eq!(tracker.color_of(0), Err(TrackError::UnknownIdentity(0)));
}

#[test]
fn test_recovery_from_brief_gap() {
    let mut tracker = IouTracker::new(TrackerConfig::default());

    tracker.update(&[person(100.0, 100.0, 200.0, 200.0)]);
    tracker.update(&[person(105.0, 105.0, 205.0, 205.0)]);

    // Six empty frames: lost but not forgotten.
    for _ in 0..6 {
        tracker.update(&[]);
    }
    assert_eq!(tracker.store().get(0).unwrap().frames_lost, 5);

    // Reappears near its last known box and gets its identity back,
    // with the trail continuing where it left off.
    let m = tracker.update(&[person(110.0, 110.0, 210.0, 210.0)]);
    assert_eq!(m, BTreeMap::from([(0, 0)]));
    let track = tracker.store().get(0).unwrap();
    assert_eq!(track.frames_lost, 0);
    assert_eq!(tracker.history_of(0).unwrap().len(), 3);
}

#[test]
fn test_two_objects_keep_separate_identities() {
    let mut tracker = IouTracker::new(TrackerConfig::default());

    let m1 = tracker.update(&[
        person(0.0, 0.0, 10.0, 10.0),
        person(100.0, 100.0, 110.0, 110.0),
    ]);
    assert_eq!(m1, BTreeMap::from([(0, 0), (1, 1)]));

    // Swap the input order; identities follow the boxes, not the order.
    let m2 = tracker.update(&[
        person(101.0, 101.0, 111.0, 111.0),
        person(1.0, 1.0, 11.0, 11.0),
    ]);
    assert_eq!(m2, BTreeMap::from([(0, 1), (1, 0)]));
}

#[test]
fn test_history_keeps_thirty_most_recent_centers() {
    let mut tracker = IouTracker::new(TrackerConfig::default());

    // Drift one pixel per frame so every frame matches the previous box.
    for i in 0..45 {
        let offset = i as f32;
        tracker.update(&[person(offset, 0.0, offset + 10.0, 10.0)]);
    }

    let trail = tracker.history_of(0).unwrap();
    assert_eq!(trail.len(), 30);
    assert_eq!(trail[0], (20.0, 5.0));
    assert_eq!(trail[29], (49.0, 5.0));
}

#[test]
fn test_statistics_follow_tracking() {
    let mut tracker = IouTracker::new(TrackerConfig::default());
    let mut stats = DetectionStats::new();

    for i in 0..3 {
        let offset = i as f32;
        let dets = vec![person(offset, 0.0, offset + 10.0, 10.0)];
        let assignments = tracker.update(&dets);
        stats.update(&dets, &assignments);
    }

    let summary = stats.summary();
    assert_eq!(summary.total_detections, 3);
    assert_eq!(summary.class_counts, BTreeMap::from([("person".to_string(), 3)]));
    assert_eq!(summary.unique_objects, 1);
    assert!((summary.avg_confidence - 90.0).abs() < 1e-4);
}

#[test]
fn test_unique_objects_survive_track_expiry() {
    let mut tracker = IouTracker::new(TrackerConfig::default());
    let mut stats = DetectionStats::new();

    let dets = vec![person(0.0, 0.0, 10.0, 10.0)];
    let assignments = tracker.update(&dets);
    stats.update(&dets, &assignments);

    for _ in 0..32 {
        let assignments = tracker.update(&[]);
        stats.update(&[], &assignments);
    }
    assert!(tracker.history_of(0).is_err());

    // The statistics remember the identity even though the track is gone.
    assert_eq!(stats.summary().unique_objects, 1);
}

#[test]
fn test_colors_are_stable_for_a_tracker_lifetime() {
    let mut tracker = IouTracker::new(TrackerConfig::default());
    tracker.update(&[person(0.0, 0.0, 10.0, 10.0)]);

    let first = tracker.color_of(0).unwrap();
    tracker.update(&[person(1.0, 1.0, 11.0, 11.0)]);
    assert_eq!(tracker.color_of(0).unwrap(), first);

    // The palette is a pure function of the identity, so a different
    // tracker instance derives the same triple.
    assert_eq!(first, color_for(0));
}
