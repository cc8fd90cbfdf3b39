use leptos::prelude::*;

use crate::data::{Certification, CERTIFICATIONS, CERTIFICATION_STATS};
use crate::reveal::stagger_delay;

use super::components::SectionHeading;

#[component]
fn CertificationCard(cert: &'static Certification, index: usize) -> impl IntoView {
    view! {
        <div
            class="group relative p-6 rounded-2xl bg-[#0d1117]/80 border border-cyan-500/20 backdrop-blur-sm hover:-translate-y-2 hover:border-cyan-400/50 transition-all duration-500 overflow-hidden animate-fade-in"
            style=format!("animation-delay: {:.2}s", stagger_delay(index, 0.1))
        >
            <div class=format!(
                "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-10 transition-opacity duration-500",
                cert.color,
            ) />

            <div class="relative z-10">
                <div class=format!(
                    "w-16 h-16 mb-4 rounded-xl bg-gradient-to-br {} flex items-center justify-center text-3xl shadow-lg group-hover:scale-110 group-hover:rotate-6 transition-transform",
                    cert.color,
                )>{cert.badge}</div>

                <h3 class="font-display text-lg text-white mb-2">{cert.name}</h3>
                <p class="font-body text-cyan-400 text-sm mb-4">{cert.issuer}</p>

                <div class="flex items-center justify-between font-code text-xs text-gray-500">
                    <span>{cert.date}</span>
                    <span class="px-2 py-1 rounded bg-gray-800/50">{cert.credential_id}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn CertificationsSection() -> impl IntoView {
    view! {
        <section class="relative py-24 overflow-hidden">
            <div class="absolute top-0 right-1/4 w-96 h-96 bg-purple-500/10 rounded-full blur-3xl" />

            <div class="container mx-auto px-6 relative z-10">
                <SectionHeading
                    tag="certifications"
                    title="Professional Certifications"
                    subtitle="Industry-recognized credentials validating expertise"
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                    {CERTIFICATIONS
                        .iter()
                        .enumerate()
                        .map(|(index, cert)| view! { <CertificationCard cert index /> })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 max-w-4xl mx-auto">
                    {CERTIFICATION_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center p-6 rounded-xl bg-[#0d1117]/60 border border-cyan-500/20">
                                    <div class="font-display text-3xl bg-gradient-to-r from-cyan-400 to-purple-500 bg-clip-text text-transparent mb-2">
                                        {stat.value}
                                    </div>
                                    <div class="font-body text-sm text-gray-400">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
