use leptos::{ev, prelude::*};

use crate::data::PROFILE;
use crate::scroll_spy::SectionId;

use super::backdrop::{DriftingDots, GridBackdrop, StarField};
use super::components::site_config;
use super::navigation::scroll_to_section;

const FLOATING_ICONS: [(&str, &str); 4] = [
    ("⚛️", "top-0 right-0"),
    ("🚀", "bottom-10 left-0"),
    ("💻", "top-1/2 -left-8"),
    ("⚡", "bottom-0 right-10"),
];

#[component]
pub fn HeroSection() -> impl IntoView {
    let particles = site_config().particles;

    let view_projects = move |_: ev::MouseEvent| {
        if let Err(e) = scroll_to_section(SectionId::Projects) {
            log::warn!("{e}");
        }
    };

    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20">
            <GridBackdrop animated=true />
            <DriftingDots count=particles.hero dot_class="bg-cyan-400/40 animate-float" />
            <StarField count=particles.stars class="opacity-30" />

            <div class="container mx-auto px-6 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8 animate-fade-in">
                        <div class="inline-block px-4 py-2 rounded-full bg-cyan-500/10 border border-cyan-500/30">
                            <span class="font-code text-cyan-400 text-sm">"<hello_world />"</span>
                        </div>

                        <h1 class="font-display text-5xl md:text-7xl leading-tight">
                            <span class="block text-gray-300">"Hi, I'm"</span>
                            <span class="block bg-gradient-to-r from-cyan-400 via-purple-500 to-pink-500 bg-clip-text text-transparent">
                                {PROFILE.name}
                            </span>
                        </h1>

                        <p class="font-body text-2xl md:text-3xl text-gray-400">{PROFILE.role}</p>
                        <p class="font-body text-lg text-gray-500 max-w-xl leading-relaxed">
                            {PROFILE.tagline}
                        </p>

                        <div class="flex flex-wrap gap-4">
                            <button
                                on:click=view_projects
                                class="px-8 py-4 rounded-lg bg-gradient-to-r from-cyan-500 to-purple-600 font-body text-white shadow-[0_0_30px_rgba(0,217,255,0.3)] hover:shadow-[0_0_40px_rgba(0,217,255,0.5)] hover:scale-105 active:scale-95 transition-all duration-300"
                            >
                                "View Projects"
                            </button>
                            <button
                                type="button"
                                class="px-8 py-4 rounded-lg border border-cyan-500/50 font-body text-cyan-400 hover:bg-cyan-500/10 hover:scale-105 active:scale-95 transition-all duration-300"
                            >
                                "⤓ Download CV"
                            </button>
                        </div>
                    </div>

                    <div class="relative hidden lg:flex items-center justify-center">
                        <div class="relative w-80 h-80">
                            <div class="absolute inset-0 rounded-full border-2 border-cyan-500/30 animate-spin-slow" />
                            <div class="absolute inset-6 rounded-full border-2 border-purple-500/30 animate-spin-reverse" />
                            <div class="absolute inset-12 rounded-full bg-gradient-to-br from-cyan-500/20 to-purple-600/20 backdrop-blur-xl flex items-center justify-center shadow-[0_0_60px_rgba(168,85,247,0.3)]">
                                <span class="font-display text-6xl bg-gradient-to-r from-cyan-400 to-purple-500 bg-clip-text text-transparent">
                                    "</>"
                                </span>
                            </div>
                            {FLOATING_ICONS
                                .into_iter()
                                .enumerate()
                                .map(|(i, (glyph, placement))| {
                                    view! {
                                        <div
                                            class=format!(
                                                "absolute {placement} w-14 h-14 rounded-xl bg-[#0d1117]/80 border border-cyan-500/30 flex items-center justify-center text-2xl animate-float",
                                            )
                                            style=format!("animation-delay: {}s", i as f64 * 0.5)
                                        >
                                            {glyph}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 flex flex-col items-center gap-2 text-gray-500 animate-bounce">
                <span class="font-code text-xs">"scroll"</span>
                <div class="w-6 h-10 rounded-full border-2 border-cyan-500/50 flex justify-center pt-2">
                    <div class="w-1 h-2 rounded-full bg-cyan-400" />
                </div>
            </div>
        </section>
    }
}
