use leptos::{html, prelude::*};
use leptos_use::{
    js, use_intersection_observer_with_options, use_supported, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{Animation, MountAction, RevealLatch, Visibility, REVEAL_THRESHOLD};

/// Wraps its children in a block that animates in the first time it scrolls
/// into view.
#[component]
pub fn AnimatedSection(#[prop(optional)] animation: Animation, children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (latch, set_latch) = signal(RevealLatch::new(REVEAL_THRESHOLD));
    let is_supported = use_supported(|| js!("IntersectionObserver" in &window()));

    // the observer is only started once support is confirmed
    let UseIntersectionObserverReturn { resume, stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let seen = Visibility::new(entry.is_intersecting(), entry.intersection_ratio());
                let mut next = latch.get_untracked();
                if next.observe(seen) {
                    set_latch.set(next);
                }
            }
        },
        UseIntersectionObserverOptions::default()
            .immediate(false)
            .thresholds(vec![REVEAL_THRESHOLD]),
    );

    // effects only run in the browser
    Effect::new(move |_| {
        let mut next = latch.get_untracked();
        match next.on_mount(is_supported.get()) {
            MountAction::Observe => resume(),
            MountAction::Idle => {
                if next != latch.get_untracked() {
                    log::debug!("IntersectionObserver unavailable, showing content");
                    set_latch.set(next);
                }
            }
        }
    });

    Effect::watch(
        move || latch.with(RevealLatch::is_revealed),
        move |revealed, _, _| {
            if *revealed {
                stop();
            }
        },
        true,
    );

    view! {
        <div node_ref=target class=move || animation.classes(latch.with(RevealLatch::state))>
            {children()}
        </div>
    }
}
