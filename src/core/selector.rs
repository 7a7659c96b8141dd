use crate::core::window::Window;

/// Default number of candidate windows kept for merging.
pub const DEFAULT_TOP_ZONE_COUNT: usize = 10;

/// Take the leading `count` windows of the ranked sequence.
#[must_use]
pub fn select_top(ranked: Option<&[Window]>, count: usize) -> Vec<Window> {
    ranked.unwrap_or_default().iter().take(count).copied().collect()
}
