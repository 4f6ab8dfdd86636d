/// Track lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// Matched by a detection in the most recent frame
    #[default]
    Active,
    /// Unmatched, waiting out the forgiveness window before deletion
    Lost,
}
