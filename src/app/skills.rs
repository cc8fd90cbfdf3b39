use leptos::{html, prelude::*};

use crate::data::{skills_in, Skill, SkillCategory};
use crate::reveal::{ring_circumference, ring_offset, stagger_delay, RING_RADIUS};

use super::components::SectionHeading;
use super::reveal::{pop_in, use_reveal};

/// Skills per category row, for staggering across rows.
const ROW_STRIDE: usize = 4;

#[component]
fn SkillCard(skill: &'static Skill, index: usize) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(node_ref);
    let circumference = ring_circumference();

    view! {
        <div
            node_ref=node_ref
            class=move || {
                format!(
                    "group relative p-6 rounded-2xl bg-[#0d1117]/80 border border-cyan-500/20 backdrop-blur-sm hover:border-cyan-400/60 hover:-translate-y-1 transition-all duration-500 {}",
                    pop_in(visible.get()),
                )
            }
            style=format!("transition-delay: {:.2}s", stagger_delay(index, 0.1))
        >
            <div class="flex flex-col items-center gap-4">
                <div class="relative w-24 h-24">
                    <svg class="w-24 h-24 -rotate-90" viewBox="0 0 100 100">
                        <circle
                            cx="50"
                            cy="50"
                            r=RING_RADIUS.to_string()
                            fill="none"
                            stroke="#1f2937"
                            stroke-width="8"
                        />
                        <circle
                            cx="50"
                            cy="50"
                            r=RING_RADIUS.to_string()
                            fill="none"
                            stroke="#00d9ff"
                            stroke-width="8"
                            stroke-linecap="round"
                            stroke-dasharray=format!("{circumference:.2}")
                            stroke-dashoffset=move || format!("{:.2}", ring_offset(skill.level, visible.get()))
                            style="transition: stroke-dashoffset 1.5s ease-out"
                        />
                    </svg>
                    <div class="absolute inset-0 flex items-center justify-center">
                        <span class="font-code text-cyan-400 text-lg group-hover:scale-125 transition-transform">
                            {skill.icon.glyph()}
                        </span>
                    </div>
                </div>
                <h3 class="font-body text-lg text-white">{skill.name}</h3>
                <span class="font-display text-2xl bg-gradient-to-r from-cyan-400 to-purple-500 bg-clip-text text-transparent">
                    {format!("{}%", skill.level)}
                </span>
            </div>
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section class="relative py-24 overflow-hidden">
            <div class="absolute top-1/4 -left-32 w-96 h-96 bg-cyan-500/10 rounded-full blur-3xl" />
            <div class="absolute bottom-1/4 -right-32 w-96 h-96 bg-purple-500/10 rounded-full blur-3xl" />

            <div class="container mx-auto px-6 relative z-10">
                <SectionHeading
                    tag="skills"
                    title="Technical Arsenal"
                    subtitle="Technologies and tools I use to bring ideas to life"
                />

                <div class="space-y-16">
                    {SkillCategory::ALL
                        .into_iter()
                        .enumerate()
                        .map(|(row, category)| {
                            view! {
                                <div>
                                    <h3 class="font-display text-2xl text-cyan-400 mb-8 flex items-center gap-3">
                                        <span class="w-8 h-0.5 bg-cyan-400" />
                                        {category.label()}
                                    </h3>
                                    <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                                        {skills_in(category)
                                            .enumerate()
                                            .map(|(i, skill)| {
                                                view! { <SkillCard skill index=row * ROW_STRIDE + i /> }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

