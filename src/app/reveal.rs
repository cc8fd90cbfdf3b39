use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::RevealLatch;

use super::components::site_config;

/// Latches `true` the first time `target` crosses the reveal threshold.
///
/// The observer disconnects itself once the latch fires; leptos-use tears it
/// down on unmount if it never does.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let threshold = site_config().reveal_threshold;
    let latch = StoredValue::new(RevealLatch::default());
    let (visible, set_visible) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let hit = entries.iter().any(|entry| entry.is_intersecting());
            let flipped = latch.try_update_value(|l| l.observe(hit)).unwrap_or(false);
            if flipped {
                set_visible.set(true);
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    visible.into()
}

/// Classes for a card that pops in once revealed.
pub fn pop_in(visible: bool) -> &'static str {
    if visible {
        "opacity-100 scale-100"
    } else {
        "opacity-0 scale-75"
    }
}

/// Classes for an element that slides in from the left or right.
pub fn slide_in(visible: bool, from_left: bool) -> &'static str {
    match (visible, from_left) {
        (true, _) => "opacity-100 translate-x-0",
        (false, true) => "opacity-0 -translate-x-12",
        (false, false) => "opacity-0 translate-x-12",
    }
}
