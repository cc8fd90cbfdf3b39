use std::time::Duration;

use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::loading::{display_percent, LoadingProgress, Tick, MAX_PROGRESS};

use super::backdrop::StarField;
use super::components::site_config;

#[component]
pub fn LoadingScreen(on_complete: Callback<()>) -> impl IntoView {
    let config = site_config().loading;
    let progress = StoredValue::new(LoadingProgress::new(config.max_increment));
    let (percent, set_percent) = signal(0.0_f64);
    let interval = StoredValue::new(None::<IntervalHandle>);

    // cleared by leptos-use if we unmount while it is pending
    let UseTimeoutFnReturn {
        start: schedule_complete,
        ..
    } = use_timeout_fn(
        move |_: ()| on_complete.run(()),
        config.completion_delay_ms as f64,
    );

    Effect::new(move |_| {
        let schedule_complete = schedule_complete.clone();
        let tick = move || {
            let res = progress.try_update_value(|p| p.tick(js_sys::Math::random()));
            match res {
                Some(Tick::Advanced(p)) => set_percent.set(p),
                Some(Tick::Completed) => {
                    if let Some(handle) = interval.get_value() {
                        handle.clear();
                    }
                    set_percent.set(MAX_PROGRESS);
                    schedule_complete(());
                }
                Some(Tick::Idle) | None => {}
            }
        };
        match set_interval_with_handle(tick, Duration::from_millis(config.tick_ms)) {
            Ok(handle) => {
                interval.set_value(Some(handle));
                on_cleanup(move || handle.clear());
            }
            Err(e) => log::error!("failed to start loading timer: {e:?}"),
        }
    });

    view! {
        <div class="fixed inset-0 z-[999] flex items-center justify-center bg-gradient-to-br from-[#0a0e17] via-[#0d1117] to-[#1a1f2e]">
            <div class="absolute inset-0 opacity-20">
                <div class="absolute inset-0 grid-backdrop animate-grid-pan" />
            </div>
            <StarField count=site_config().particles.stars class="opacity-40" />

            <div class="relative z-10 flex flex-col items-center gap-8">
                <div class="animate-spin-logo">
                    <div class="w-24 h-24 rounded-2xl bg-gradient-to-br from-cyan-400 to-purple-600 flex items-center justify-center shadow-[0_0_40px_rgba(0,217,255,0.5)] text-white text-4xl font-code">
                        "</>"
                    </div>
                </div>

                <div class="text-center">
                    <h2 class="font-display text-2xl bg-gradient-to-r from-cyan-400 to-purple-500 bg-clip-text text-transparent mb-2 animate-pulse">
                        "Initializing..."
                    </h2>
                    <p class="font-code text-sm text-gray-500">
                        {move || format!("{}%", display_percent(percent.get()))}
                    </p>
                </div>

                <div class="w-64 h-2 bg-gray-800 rounded-full overflow-hidden">
                    <div
                        class="h-full bg-gradient-to-r from-cyan-400 to-purple-500 rounded-full transition-[width] duration-300"
                        style=move || format!("width: {:.1}%", percent.get())
                    />
                </div>
            </div>
        </div>
    }
}
