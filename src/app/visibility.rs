use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Fraction of an element that must be on screen before it counts as visible.
pub const VISIBILITY_THRESHOLD: f64 = 0.2;

/// One-shot visibility signal for scroll-triggered sections. Flips to true
/// the first time `target` crosses the threshold, then stops observing, so
/// scrolling back out never reverts it. On the server this stays false and
/// hydration takes over in the browser.
pub fn use_visibility_once(target: NodeRef<html::Div>) -> Signal<bool> {
    let (visible, set_visible) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_visible.set(true);
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![VISIBILITY_THRESHOLD]),
    );

    visible.into()
}
