//! Scroll-Reveal Controller rules
//!
//! Elements start hidden and become visible the first time they intersect the
//! viewport; they never hide again. Platforms provide a `VisibilityWatcher`,
//! the browser one lives in `leptos-reveal`.

/// Fraction of an element's area that must be in view
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Next state after an intersection report
    pub fn observe(self, intersecting: bool) -> Self {
        match (self, intersecting) {
            (RevealState::Hidden, true) => RevealState::Visible,
            (state, _) => state,
        }
    }

    /// Whether this report is the one that reveals the element
    pub fn reveals(self, intersecting: bool) -> bool {
        self == RevealState::Hidden && self.observe(intersecting) == RevealState::Visible
    }
}

/// Viewport-intersection capability
pub trait VisibilityWatcher {
    type Element;

    /// Start watching an element
    fn observe(&mut self, element: &Self::Element);

    /// Release every subscription
    fn unobserve_all(&mut self);
}

/// Rescan: watch each candidate that is still hidden. Revealed elements stay
/// revealed and are never watched again. Returns how many were watched.
pub fn watch_hidden<W, I>(watcher: &mut W, candidates: I) -> usize
where
    W: VisibilityWatcher + ?Sized,
    I: IntoIterator<Item = (W::Element, RevealState)>,
{
    let mut watched = 0;
    for (element, state) in candidates {
        if state == RevealState::Hidden {
            watcher.observe(&element);
            watched += 1;
        }
    }
    watched
}

/// Watcher for non-browser targets: records what it was asked to watch
#[derive(Debug, Default)]
pub struct RecordingWatcher<E> {
    observed: Vec<E>,
    released: bool,
}

impl<E: Clone> RecordingWatcher<E> {
    pub fn new() -> Self {
        Self { observed: Vec::new(), released: false }
    }

    pub fn observed(&self) -> &[E] {
        &self.observed
    }

    pub fn released(&self) -> bool {
        self.released
    }
}

impl<E: Clone> VisibilityWatcher for RecordingWatcher<E> {
    type Element = E;

    fn observe(&mut self, element: &E) {
        self.observed.push(element.clone());
        self.released = false;
    }

    fn unobserve_all(&mut self) {
        self.observed.clear();
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_way() {
        let state = RevealState::Hidden.observe(false);
        assert_eq!(state, RevealState::Hidden);

        let state = state.observe(true);
        assert_eq!(state, RevealState::Visible);

        assert_eq!(state.observe(false), RevealState::Visible);
    }

    #[test]
    fn test_only_first_intersection_reveals() {
        assert!(RevealState::Hidden.reveals(true));
        assert!(!RevealState::Hidden.reveals(false));
        assert!(!RevealState::Visible.reveals(true));
    }

    #[test]
    fn test_rescan_after_load_watches_only_new_hidden_cards() {
        let mut watcher = RecordingWatcher::new();
        let first = [("news-1", RevealState::Hidden), ("news-2", RevealState::Hidden)];
        assert_eq!(watch_hidden(&mut watcher, first), 2);

        // news-1 scrolled into view; "Load more" rendered news-3
        let rescan = [("news-1", RevealState::Visible), ("news-2", RevealState::Hidden), ("news-3", RevealState::Hidden)];
        assert_eq!(watch_hidden(&mut watcher, rescan), 2);

        assert_eq!(watcher.observed(), &["news-1", "news-2", "news-2", "news-3"]);
    }

    #[test]
    fn test_recording_watcher_release() {
        let mut watcher = RecordingWatcher::new();
        watcher.observe(&"hero-title");
        watcher.observe(&"hero-stats");
        assert_eq!(watcher.observed(), &["hero-title", "hero-stats"]);

        watcher.unobserve_all();
        assert!(watcher.observed().is_empty());
        assert!(watcher.released());
    }
}
