use leptos::prelude::*;

use crate::data::{Project, PROJECTS};
use crate::projects::{group_projects, ProjectFilter};
use crate::reveal::stagger_delay;

use super::backdrop::GridBackdrop;
use super::components::{SectionHeading, TechTag};

#[component]
fn ProjectCard(project: &'static Project, index: usize, featured: bool) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let padding = if featured { "p-8" } else { "p-6" };
    let glyph_size = if featured { "text-6xl" } else { "text-4xl" };

    view! {
        <div
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            class=format!(
                "group relative {padding} rounded-2xl bg-[#0d1117]/80 border border-cyan-500/20 backdrop-blur-sm hover:border-cyan-400/50 hover:-translate-y-2 hover:shadow-[0_0_40px_rgba(0,217,255,0.2)] transition-all duration-500 overflow-hidden animate-fade-in",
            )
            style=format!("animation-delay: {:.2}s", stagger_delay(index, 0.1))
        >
            <div class=move || {
                format!(
                    "absolute inset-0 bg-gradient-to-br from-cyan-500/10 to-purple-600/10 transition-opacity duration-500 {}",
                    if hovered.get() { "opacity-100" } else { "opacity-0" },
                )
            } />

            <div class="relative z-10">
                <div class="flex items-start justify-between mb-4">
                    <div class=move || {
                        format!(
                            "{glyph_size} transition-transform duration-500 {}",
                            if hovered.get() { "scale-110 rotate-6" } else { "" },
                        )
                    }>{project.image}</div>
                    <Show when=move || featured>
                        <span class="px-3 py-1 rounded-full bg-gradient-to-r from-cyan-500 to-purple-600 text-xs font-code text-white">
                            "Featured"
                        </span>
                    </Show>
                </div>

                <span class="font-code text-xs text-purple-400">{project.category.label()}</span>
                <h3 class="font-display text-xl text-white mt-1 mb-3 group-hover:text-cyan-400 transition-colors">
                    {project.title}
                </h3>
                <p class="font-body text-gray-400 text-sm mb-6 leading-relaxed">
                    {project.description}
                </p>

                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tech_stack
                        .iter()
                        .map(|name| view! { <TechTag name=*name /> })
                        .collect_view()}
                </div>

                <div class="flex gap-4">
                    {project
                        .github
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 font-body text-sm text-gray-400 hover:text-cyan-400 transition-colors"
                                >
                                    <i class="devicon-github-plain" />
                                    "Code"
                                </a>
                            }
                        })}
                    {project
                        .live
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 font-body text-sm text-gray-400 hover:text-cyan-400 transition-colors"
                                >
                                    "↗ Live Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::default());

    let filter_buttons = ProjectFilter::ALL
        .into_iter()
        .map(|f| {
            view! {
                <button
                    on:click=move |_| {
                        log::debug!("project filter: {f}");
                        set_filter.set(f);
                    }
                    class=move || {
                        if filter.get() == f {
                            "px-6 py-2 rounded-full font-body text-sm transition-all duration-300 bg-gradient-to-r from-cyan-500 to-purple-600 text-white shadow-[0_0_20px_rgba(0,217,255,0.4)]"
                        } else {
                            "px-6 py-2 rounded-full font-body text-sm transition-all duration-300 bg-[#0d1117]/80 border border-cyan-500/30 text-gray-400 hover:text-white hover:border-cyan-400/60"
                        }
                    }
                >
                    {f.label()}
                </button>
            }
        })
        .collect_view();

    let grouped = move || {
        let groups = group_projects(PROJECTS, filter.get());
        let featured = (!groups.featured.is_empty())
            .then(|| {
                view! {
                    <div class="mb-16">
                        <h3 class="font-display text-2xl text-cyan-400 mb-8">"Featured Projects"</h3>
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                            {groups
                                .featured
                                .iter()
                                .enumerate()
                                .map(|(index, project)| {
                                    view! { <ProjectCard project=*project index featured=true /> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
            });
        let other = (!groups.other.is_empty())
            .then(|| {
                view! {
                    <div>
                        <h3 class="font-display text-2xl text-purple-400 mb-8">"More Projects"</h3>
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {groups
                                .other
                                .iter()
                                .enumerate()
                                .map(|(index, project)| {
                                    view! { <ProjectCard project=*project index featured=false /> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
            });
        view! { {featured} {other} }
    };

    view! {
        <section class="relative py-24 overflow-hidden">
            <GridBackdrop opacity="opacity-10" />

            <div class="container mx-auto px-6 relative z-10">
                <SectionHeading
                    tag="projects"
                    title="Featured Work"
                    subtitle="A selection of products I have designed, built and shipped"
                    spacing="mb-12"
                />

                <div class="flex flex-wrap justify-center gap-4 mb-12">{filter_buttons}</div>

                {grouped}
            </div>
        </section>
    }
}
