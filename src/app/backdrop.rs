use leptos::prelude::*;

use crate::cosmetics::{binary_rain, drifting_dots, star_field, Particle, RainDrop};

// Particles are only generated after mount so the server-rendered markup and
// the hydrated markup agree.

#[component]
pub fn StarField(
    #[prop(default = 50)] count: usize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (stars, set_stars) = signal(Vec::<Particle>::new());
    Effect::new(move |_| set_stars.set(star_field(count, js_sys::Math::random)));

    view! {
        <div class=format!("absolute inset-0 overflow-hidden pointer-events-none {class}")>
            <For
                each=move || stars.get().into_iter().enumerate()
                key=|(i, _)| *i
                children=|(_, star)| {
                    view! {
                        <div class="absolute rounded-full bg-cyan-400 animate-twinkle" style=star.style() />
                    }
                }
            />
        </div>
    }
}

/// Small dots pulsing in place behind a section.
#[component]
pub fn DriftingDots(
    count: usize,
    /// Tailwind classes for the dot color and motion.
    dot_class: &'static str,
    #[prop(default = 4.0)] size: f64,
) -> impl IntoView {
    let (dots, set_dots) = signal(Vec::<Particle>::new());
    Effect::new(move |_| set_dots.set(drifting_dots(count, size, js_sys::Math::random)));

    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none">
            <For
                each=move || dots.get().into_iter().enumerate()
                key=|(i, _)| *i
                children=move |(_, dot)| {
                    view! { <div class=format!("absolute rounded-full {dot_class}") style=dot.style() /> }
                }
            />
        </div>
    }
}

#[component]
pub fn BinaryRain(columns: usize) -> impl IntoView {
    let (drops, set_drops) = signal(Vec::<RainDrop>::new());
    Effect::new(move |_| set_drops.set(binary_rain(columns, js_sys::Math::random)));

    view! {
        <div class="absolute inset-0 opacity-10 overflow-hidden pointer-events-none">
            <For
                each=move || drops.get().into_iter().enumerate()
                key=|(i, _)| *i
                children=|(_, drop)| {
                    view! {
                        <div
                            class="absolute font-code text-cyan-400 text-xl animate-rain"
                            style=format!(
                                "left: {}%; top: -20px; animation-duration: {:.2}s; animation-delay: {:.2}s",
                                drop.left,
                                drop.duration,
                                drop.delay,
                            )
                        >
                            {drop.digit.to_string()}
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Faint cyan grid behind the hero and project sections.
#[component]
pub fn GridBackdrop(
    #[prop(default = "opacity-20")] opacity: &'static str,
    #[prop(optional)] animated: bool,
) -> impl IntoView {
    let motion = if animated { "animate-grid-pan" } else { "" };
    view! {
        <div class=format!("absolute inset-0 pointer-events-none {opacity}")>
            <div class=format!("absolute inset-0 grid-backdrop {motion}") />
        </div>
    }
}
