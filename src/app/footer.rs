use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::data::{BUILT_WITH, PROFILE};
use crate::scroll_spy::SectionId;

use super::navigation::scroll_to_top;

const QUICK_LINKS: [SectionId; 4] = [
    SectionId::Home,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Contact,
];

/// Year the site was built, stamped by build.rs.
fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(2025)
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative border-t border-cyan-500/20 bg-[#0a0e17]">
            <div class="container mx-auto px-6 py-12">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div>
                        <div class="flex items-center gap-2 mb-4">
                            <div class="w-10 h-10 rounded-lg bg-gradient-to-br from-cyan-400 to-purple-600 flex items-center justify-center font-code text-white">
                                "</>"
                            </div>
                            <span class="font-display text-xl bg-gradient-to-r from-cyan-400 to-purple-500 bg-clip-text text-transparent">
                                {PROFILE.handle}
                            </span>
                        </div>
                        <p class="font-body text-sm text-gray-500">{PROFILE.role}</p>
                    </div>

                    <div>
                        <h4 class="font-display text-sm text-white mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {QUICK_LINKS
                                .into_iter()
                                .map(|id| {
                                    view! {
                                        <li>
                                            <a
                                                href=id.href()
                                                class="font-body text-sm text-gray-500 hover:text-cyan-400 transition-colors"
                                            >
                                                {id.label()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-display text-sm text-white mb-4">"Built With"</h4>
                        <div class="flex flex-wrap gap-2">
                            {BUILT_WITH
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-3 py-1 rounded-full bg-cyan-500/10 border border-cyan-500/30 font-code text-xs text-cyan-400">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="flex flex-col md:flex-row items-center justify-between gap-4 pt-8 border-t border-gray-800">
                    <p class="font-body text-sm text-gray-500">
                        {format!("© {} {}. Made with ❤ and Rust.", build_year(), PROFILE.name)}
                    </p>
                    <div class="flex items-center gap-4">
                        <span class="font-code text-xs text-gray-600">
                            {concat!("v", env!("CARGO_PKG_VERSION"))}
                        </span>
                        <button
                            on:click=move |_| scroll_to_top()
                            aria-label="Scroll to top"
                            class="w-10 h-10 rounded-lg bg-cyan-500/10 border border-cyan-500/30 flex items-center justify-center text-cyan-400 hover:bg-cyan-500/20 hover:-translate-y-1 transition-all"
                        >
                            "↑"
                        </button>
                    </div>
                </div>
            </div>
        </footer>
    }
}
