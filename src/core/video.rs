use std::collections::HashSet;

/// Fire-once bookkeeping for lazily started videos.
///
/// Elements are registered by index when observation starts; the first
/// intersecting notification for an index yields `true` and forgets it, so a
/// video is never started twice and never paused on leaving the viewport.
#[derive(Debug, Default)]
pub struct LazyTrigger {
    pending: HashSet<usize>,
}

impl LazyTrigger {
    pub fn observe(&mut self, id: usize) {
        self.pending.insert(id);
    }

    #[inline]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// True exactly once per observed element: on its first intersecting entry.
    pub fn on_intersection(&mut self, id: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.pending.remove(&id)
    }
}

/// Indices of videos to pause when `started` begins playing: every other video
/// that is not already paused.
pub fn videos_to_pause(started: usize, paused: &[bool]) -> Vec<usize> {
    paused
        .iter()
        .enumerate()
        .filter(|&(i, &is_paused)| i != started && !is_paused)
        .map(|(i, _)| i)
        .collect()
}
