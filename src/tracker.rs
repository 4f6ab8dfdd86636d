mod association;
mod identity;
mod iou_tracker;
mod rect;
mod store;
mod track;
mod track_state;

pub use association::{Detection, associate};
pub use identity::{IdentityAllocator, color_for};
pub use iou_tracker::{IouTracker, TrackSnapshot, TrackerConfig};
pub use rect::{Rect, iou_matrix};
pub use store::{TrackError, TrackStore};
pub use track::Track;
pub use track_state::TrackState;
