use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_throttle_fn, use_window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::data::PROFILE;
use crate::error::SiteError;
use crate::scroll_spy::{active_section, nav_alpha, scroll_progress, Bounds, SectionId};

use super::components::site_config;

/// Smooth-scroll the viewport to the top of a section.
pub fn scroll_to_section(id: SectionId) -> Result<(), SiteError> {
    let el = document()
        .get_element_by_id(id.anchor())
        .ok_or(SiteError::SectionNotFound(id.anchor()))?;
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    Ok(())
}

pub fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

fn section_bounds(id: SectionId) -> Option<Bounds> {
    let rect = document().get_element_by_id(id.anchor())?.get_bounding_client_rect();
    Some(Bounds {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

#[component]
pub fn Navigation() -> impl IntoView {
    let config = site_config().scroll_spy;
    let (active, set_active) = signal(SectionId::default());
    let (is_open, set_is_open) = signal(false);
    let (scroll_y, set_scroll_y) = signal(0.0_f64);
    let (progress, set_progress) = signal(0.0_f64);

    let on_scroll = move || {
        let next = active_section(
            SectionId::ALL.map(|id| (id, section_bounds(id))),
            config.threshold_px,
            active.get_untracked(),
        );
        if next != active.get_untracked() {
            log::debug!("active section: {next}");
            set_active.set(next);
        }

        let win = window();
        let y = win.scroll_y().unwrap_or_default();
        let viewport = win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let height = document()
            .body()
            .map(|b| b.scroll_height() as f64)
            .unwrap_or_default();
        set_scroll_y.set(y);
        set_progress.set(scroll_progress(y, height, viewport));
    };
    let throttled_scroll = use_throttle_fn(on_scroll, config.throttle_ms);
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        throttled_scroll();
    });

    let select = move |id: SectionId| match scroll_to_section(id) {
        Ok(()) => set_is_open.set(false),
        Err(e) => log::warn!("{e}"),
    };

    view! {
        <nav
            class="fixed top-0 left-0 right-0 z-50 backdrop-blur-xl border-b border-cyan-500/20"
            style=move || {
                format!(
                    "background-color: rgba(10, 14, 23, {:.3})",
                    nav_alpha(scroll_y.get(), config.fade_distance_px),
                )
            }
        >
            <div class="container mx-auto px-6">
                <div class="flex items-center justify-between h-20">
                    <div class="flex items-center gap-2 animate-fade-in">
                        <div class="w-10 h-10 rounded-lg bg-gradient-to-br from-cyan-400 to-purple-600 flex items-center justify-center font-code text-white">
                            "</>"
                        </div>
                        <span class="font-display text-xl bg-gradient-to-r from-cyan-400 to-purple-500 bg-clip-text text-transparent">
                            {PROFILE.handle}
                        </span>
                    </div>

                    <div class="hidden lg:flex items-center gap-1">
                        {SectionId::ALL
                            .into_iter()
                            .map(|id| {
                                view! {
                                    <button
                                        on:click=move |_| select(id)
                                        class=move || {
                                            if active.get() == id {
                                                "relative px-4 py-2 font-body text-sm transition-colors duration-300 text-cyan-400"
                                            } else {
                                                "relative px-4 py-2 font-body text-sm transition-colors duration-300 text-gray-400 hover:text-white"
                                            }
                                        }
                                    >
                                        {id.label()}
                                        <Show when=move || active.get() == id>
                                            <div class="absolute bottom-0 left-0 right-0 h-0.5 bg-gradient-to-r from-cyan-400 to-purple-500" />
                                        </Show>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        on:click=move |_| set_is_open.update(|open| *open = !*open)
                        aria-label="Toggle navigation menu"
                        class="lg:hidden w-10 h-10 rounded-lg bg-cyan-500/10 border border-cyan-500/30 flex items-center justify-center text-cyan-400 hover:bg-cyan-500/20 transition-colors active:scale-95"
                    >
                        {move || if is_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <div
                class="h-0.5 bg-gradient-to-r from-cyan-400 to-purple-500 origin-left"
                style=move || format!("transform: scaleX({:.4})", progress.get())
            />
        </nav>

        <div class=move || {
            format!(
                "fixed top-20 right-0 bottom-0 w-64 bg-[#0d1117]/95 backdrop-blur-xl border-l border-cyan-500/30 z-40 lg:hidden transition-transform duration-300 {}",
                if is_open.get() { "translate-x-0" } else { "translate-x-full" },
            )
        }>
            <div class="p-6 space-y-4">
                {SectionId::ALL
                    .into_iter()
                    .map(|id| {
                        view! {
                            <button
                                on:click=move |_| select(id)
                                class=move || {
                                    if active.get() == id {
                                        "block w-full text-left px-4 py-3 rounded-lg font-body transition-all duration-300 bg-cyan-500/20 text-cyan-400 border border-cyan-500/50"
                                    } else {
                                        "block w-full text-left px-4 py-3 rounded-lg font-body transition-all duration-300 text-gray-400 hover:bg-cyan-500/10 hover:text-white"
                                    }
                                }
                            >
                                {id.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>

        <Show when=move || is_open.get()>
            <div
                on:click=move |_| set_is_open.set(false)
                class="fixed inset-0 bg-black/50 backdrop-blur-sm z-30 lg:hidden"
            />
        </Show>
    }
}
