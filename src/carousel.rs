use crate::content::{MediaItem, MediaKind, MediaSet};

/// Delay before an image slide advances on its own, in milliseconds.
pub const AUTO_ADVANCE_MS: f64 = 6_000.0;

/// State machine behind one media carousel: the index of the displayed item
/// plus a latched visibility flag. Timer ownership stays with the component;
/// the machine only answers whether a timer should be pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    media: MediaSet,
    index: usize,
    visible: bool,
}

impl CarouselState {
    pub fn new(media: MediaSet) -> Self {
        Self {
            media,
            index: 0,
            visible: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn current(&self) -> &MediaItem {
        self.media
            .get(self.index)
            .expect("carousel index should stay within the media set")
    }

    /// Step to the next item, wrapping past the end.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.media.len();
    }

    /// Step to the previous item, wrapping past the start.
    pub fn retreat(&mut self) {
        self.index = (self.index + self.media.len() - 1) % self.media.len();
    }

    /// Latch the carousel as on-screen. Never reverts.
    pub fn mark_visible(&mut self) {
        self.visible = true;
    }

    /// True when an auto-advance timer should be pending: only while the
    /// carousel is on screen and the current item is a still image. Videos
    /// advance on their playback-ended signal, never on a timer.
    pub fn timer_armed(&self) -> bool {
        self.visible && self.current().kind() == MediaKind::Image
    }

    /// Advance in response to the playback-ended signal of the video at
    /// `index`. Ended events from non-current items are ignored, so a
    /// paused or background video can never advance the carousel.
    pub fn playback_ended(&mut self, index: usize) {
        if index == self.index {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(sources: &[&'static str]) -> CarouselState {
        CarouselState::new(
            MediaSet::from_sources(sources).expect("test media should be non-empty"),
        )
    }

    // Mirrors the component wiring: every state change cancels the pending
    // one-shot and re-arms it from the current state.
    struct AutoAdvance {
        fire_at: Option<u64>,
    }

    impl AutoAdvance {
        fn new() -> Self {
            Self { fire_at: None }
        }

        fn settle(&mut self, state: &CarouselState, now: u64) {
            self.fire_at = state.timer_armed().then(|| now + AUTO_ADVANCE_MS as u64);
        }

        fn tick(&mut self, state: &mut CarouselState, now: u64) {
            if self.fire_at.is_some_and(|at| now >= at) {
                state.advance();
                self.settle(state, now);
            }
        }
    }

    #[test]
    fn test_advance_cycles_with_period_n() {
        for n in 1..5 {
            let sources = vec!["/images/x.png"; n];
            let mut state = carousel(&sources);
            for step in 1..=2 * n {
                state.advance();
                assert_eq!(state.index(), step % n, "length {n}, step {step}");
            }
        }
    }

    #[test]
    fn test_retreat_is_inverse_of_advance() {
        let mut state = carousel(&["/a.png", "/b.png", "/c.png"]);
        for _ in 0..3 {
            let before = state.index();
            state.advance();
            state.retreat();
            assert_eq!(state.index(), before);
            state.retreat();
            state.advance();
            assert_eq!(state.index(), before);
            state.advance();
        }
    }

    #[test]
    fn test_retreat_wraps_backward_from_zero() {
        let mut state = carousel(&["/a.png", "/b.png", "/c.png"]);
        assert_eq!(state.index(), 0);
        state.retreat();
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_visibility_latch_is_monotonic() {
        let mut state = carousel(&["/a.png"]);
        assert!(!state.visible());
        state.mark_visible();
        assert!(state.visible());
        state.mark_visible();
        assert!(state.visible());
    }

    #[test]
    fn test_no_timer_while_hidden() {
        let mut state = carousel(&["/a.png", "/b.mp4", "/c.png"]);
        let mut timer = AutoAdvance::new();
        for _ in 0..3 {
            assert!(!state.timer_armed());
            timer.settle(&state, 0);
            assert_eq!(timer.fire_at, None);
            state.advance();
        }
    }

    #[test]
    fn test_timer_armed_only_for_visible_images() {
        let mut state = carousel(&["/a.png", "/b.mp4"]);
        state.mark_visible();
        assert!(state.timer_armed());
        state.advance();
        assert!(!state.timer_armed());
    }

    #[test]
    fn test_image_advances_after_delay() {
        // two stills: flips at 6s, back to the first at 12s
        let mut state = carousel(&["/a.png", "/b.png"]);
        state.mark_visible();
        let mut timer = AutoAdvance::new();
        timer.settle(&state, 0);

        timer.tick(&mut state, 5_999);
        assert_eq!(state.index(), 0);
        timer.tick(&mut state, 6_000);
        assert_eq!(state.index(), 1);
        timer.tick(&mut state, 11_999);
        assert_eq!(state.index(), 1);
        timer.tick(&mut state, 12_000);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_manual_navigation_cancels_pending_timer() {
        let mut state = carousel(&["/a.png", "/b.png", "/c.png"]);
        state.mark_visible();
        let mut timer = AutoAdvance::new();
        timer.settle(&state, 0);

        // manual advance at 3s restarts the 6s window
        state.advance();
        timer.settle(&state, 3_000);
        assert_eq!(state.index(), 1);

        timer.tick(&mut state, 6_000);
        assert_eq!(state.index(), 1, "cancelled timer must not double-advance");
        timer.tick(&mut state, 8_999);
        assert_eq!(state.index(), 1);
        timer.tick(&mut state, 9_000);
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_video_advances_only_on_playback_end() {
        // a lone video ignores elapsed time and wraps to itself
        let mut state = carousel(&["/a.mp4"]);
        state.mark_visible();
        let mut timer = AutoAdvance::new();
        timer.settle(&state, 0);

        timer.tick(&mut state, 600_000);
        assert_eq!(state.index(), 0);
        assert!(!state.timer_armed());

        state.playback_ended(0);
        assert_eq!(state.index(), 0);
        assert!(!state.timer_armed());
    }

    #[test]
    fn test_playback_end_hands_off_to_image_timer() {
        let mut state = carousel(&["/a.png", "/b.mp4"]);
        state.mark_visible();
        state.advance();
        assert!(!state.timer_armed());

        state.playback_ended(1);
        assert_eq!(state.index(), 0);
        assert!(state.timer_armed());
    }

    #[test]
    fn test_stale_playback_end_is_ignored() {
        let mut state = carousel(&["/a.mp4", "/b.mp4"]);
        state.mark_visible();
        state.playback_ended(1);
        assert_eq!(state.index(), 0);
        state.playback_ended(0);
        assert_eq!(state.index(), 1);
    }
}
