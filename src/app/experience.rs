use leptos::{html, prelude::*};

use crate::data::{Experience, EXPERIENCES};
use crate::reveal::stagger_delay;

use super::backdrop::DriftingDots;
use super::components::{site_config, SectionHeading, TechTag};
use super::reveal::{slide_in, use_reveal};

#[component]
fn ExperienceCard(exp: &'static Experience, index: usize) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(node_ref);
    let from_left = index % 2 == 0;
    let marker = if from_left { "-right-2" } else { "-left-2" };

    view! {
        <div
            node_ref=node_ref
            class=move || {
                format!(
                    "relative md:w-1/2 {} transition-all duration-700 {}",
                    if from_left { "md:pr-12" } else { "md:ml-auto md:pl-12" },
                    slide_in(visible.get(), from_left),
                )
            }
            style=format!("transition-delay: {:.2}s", stagger_delay(index, 0.2))
        >
            <div class=format!(
                "hidden md:block absolute top-8 {marker} w-4 h-4 rounded-full bg-cyan-400 shadow-[0_0_20px_rgba(0,217,255,0.8)]",
            ) />

            <div class="group p-8 rounded-2xl bg-[#0d1117]/80 border border-cyan-500/20 backdrop-blur-sm hover:border-purple-500/50 hover:shadow-[0_0_30px_rgba(168,85,247,0.2)] transition-all duration-500">
                <div class="flex items-start gap-4 mb-4">
                    <div class="w-14 h-14 shrink-0 rounded-xl bg-gradient-to-br from-cyan-500/20 to-purple-600/20 flex items-center justify-center text-3xl group-hover:scale-110 transition-transform">
                        {exp.logo}
                    </div>
                    <div>
                        <h3 class="font-display text-xl text-white">{exp.position}</h3>
                        <p class="font-body text-cyan-400">{exp.company}</p>
                    </div>
                </div>

                <div class="flex flex-wrap gap-4 mb-4 font-code text-xs text-gray-500">
                    <span>"📅 " {exp.period}</span>
                    <span>"📍 " {exp.location}</span>
                </div>

                <p class="font-body text-gray-400 mb-4">{exp.description}</p>

                <ul class="space-y-2 mb-6">
                    {exp
                        .achievements
                        .iter()
                        .map(|achievement| {
                            view! {
                                <li class="flex items-start gap-2 font-body text-sm text-gray-300">
                                    <span class="text-cyan-400 mt-0.5">"▹"</span>
                                    {*achievement}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="flex flex-wrap gap-2">
                    {exp.tech_stack.iter().map(|name| view! { <TechTag name=*name /> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let dots = site_config().particles.experience;

    view! {
        <section class="relative py-24 overflow-hidden">
            <DriftingDots count=dots dot_class="bg-purple-400/30 animate-pulse" size=3.0 />

            <div class="container mx-auto px-6 relative z-10">
                <SectionHeading
                    tag="experience"
                    title="Professional Journey"
                    subtitle="Building products and leading teams across startups and enterprises"
                />

                <div class="relative max-w-5xl mx-auto">
                    <div class="hidden md:block absolute left-1/2 top-0 bottom-0 w-0.5 -translate-x-1/2 bg-gradient-to-b from-cyan-400 via-purple-500 to-transparent" />
                    <div class="space-y-12">
                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(index, exp)| view! { <ExperienceCard exp index /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
