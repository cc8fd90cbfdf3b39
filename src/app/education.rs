use leptos::prelude::*;

use crate::data::{Education, EDUCATION};

use super::backdrop::BinaryRain;
use super::components::{site_config, SectionHeading, TechTag};

#[component]
fn EducationCard(edu: &'static Education) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    view! {
        <div class="group relative p-8 rounded-2xl bg-[#0d1117]/80 border border-cyan-500/20 backdrop-blur-sm hover:border-cyan-400/50 hover:shadow-[0_0_40px_rgba(0,217,255,0.15)] transition-all duration-500">
            <div class="flex items-start gap-4 mb-6">
                <div class="w-16 h-16 shrink-0 rounded-xl bg-gradient-to-br from-cyan-500/20 to-purple-600/20 flex items-center justify-center text-4xl group-hover:rotate-12 transition-transform">
                    {edu.logo}
                </div>
                <div>
                    <h3 class="font-display text-xl text-white mb-1">{edu.institution}</h3>
                    <p class="font-body text-cyan-400">{format!("{} in {}", edu.degree, edu.major)}</p>
                    <p class="font-code text-xs text-gray-500 mt-1">{edu.period}</p>
                </div>
            </div>

            <div class="flex items-center justify-between p-4 mb-6 rounded-xl bg-cyan-500/5 border border-cyan-500/20">
                <span class="font-body text-gray-400">"GPA"</span>
                <span class="font-display text-2xl bg-gradient-to-r from-cyan-400 to-purple-500 bg-clip-text text-transparent">
                    {edu.gpa}
                </span>
            </div>

            <div class="mb-6">
                <h4 class="font-body text-sm text-gray-500 mb-3">"Honors & Awards"</h4>
                <div class="flex flex-wrap gap-2">
                    {edu
                        .honors
                        .iter()
                        .map(|honor| {
                            view! {
                                <span class="px-3 py-1 rounded-full bg-purple-500/10 border border-purple-500/30 text-xs font-body text-purple-300">
                                    "🏆 " {*honor}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <button
                on:click=move |_| set_expanded.update(|open| *open = !*open)
                class="w-full flex items-center justify-between font-body text-sm text-cyan-400 hover:text-cyan-300 transition-colors"
            >
                <span>"Relevant Coursework"</span>
                <span class=move || {
                    if expanded.get() {
                        "rotate-180 transition-transform"
                    } else {
                        "transition-transform"
                    }
                }>"▾"</span>
            </button>
            <Show when=move || expanded.get()>
                <div class="flex flex-wrap gap-2 mt-4 animate-fade-in">
                    {edu
                        .coursework
                        .iter()
                        .map(|course| view! { <TechTag name=*course rounded_full=true /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    let columns = site_config().particles.education_columns;

    view! {
        <section class="relative py-24 overflow-hidden">
            <BinaryRain columns />

            <div class="container mx-auto px-6 relative z-10">
                <SectionHeading
                    tag="education"
                    title="Academic Excellence"
                    subtitle="Foundations in computer science from world-class institutions"
                />

                <div class="grid md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                    {EDUCATION.iter().map(|edu| view! { <EducationCard edu /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
