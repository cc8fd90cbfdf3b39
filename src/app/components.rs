use leptos::{html, prelude::*};

use crate::config::SiteConfig;

use super::reveal::use_reveal;

/// The config provided by `App`, or the defaults outside of it.
pub fn site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// `<tag />` label, gradient title and optional subtitle shared by every section.
#[component]
pub fn SectionHeading(
    tag: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(default = "mb-16")] spacing: &'static str,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(node_ref);
    view! {
        <div
            node_ref=node_ref
            class=move || {
                format!(
                    "text-center transition-all duration-700 {spacing} {}",
                    if visible.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-5" },
                )
            }
        >
            <span class="font-code text-cyan-400 text-sm tracking-wider">
                {format!("<{tag} />")}
            </span>
            <h2 class="font-display text-4xl md:text-5xl mt-4 mb-4">
                <span class="bg-gradient-to-r from-cyan-400 to-purple-500 bg-clip-text text-transparent">
                    {title}
                </span>
            </h2>
            <div class="h-1 w-24 bg-gradient-to-r from-cyan-400 to-purple-500 rounded-full mx-auto mb-4" />
            {subtitle
                .map(|s| {
                    view! { <p class="font-body text-gray-400 max-w-2xl mx-auto">{s}</p> }
                })}
        </div>
    }
}

#[component]
pub fn TechTag(name: &'static str, #[prop(optional)] rounded_full: bool) -> impl IntoView {
    let shape = if rounded_full { "rounded-full px-3" } else { "rounded px-2" };
    view! {
        <span class=format!(
            "{shape} py-1 bg-cyan-500/10 border border-cyan-500/30 text-xs font-code text-cyan-400 hover:bg-cyan-500/20 transition-colors",
        )>{name}</span>
    }
}
