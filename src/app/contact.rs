use leptos::{ev, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{ContactForm, Field, FormPhase};
use crate::data::{PROFILE, SOCIAL_LINKS};

use super::backdrop::DriftingDots;
use super::components::{site_config, SectionHeading};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-[#0a0e17] border border-cyan-500/30 font-body text-white placeholder-gray-600 focus:border-cyan-400 focus:outline-none focus:ring-2 focus:ring-cyan-400/20 transition-all disabled:opacity-50";

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Your Name",
        Field::Email => "Email Address",
        Field::Subject => "Subject",
        Field::Message => "Message",
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "John Doe",
        Field::Email => "john@example.com",
        Field::Subject => "Project Inquiry",
        Field::Message => "Tell me about your project...",
    }
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.field(field).to_string());
    let on_input = move |e: ev::Event| form.update(|f| f.set(field, event_target_value(&e)));
    let busy = move || !form.with(ContactForm::can_submit);
    let id = format!("contact-{field}");
    let input_type = if field == Field::Email { "email" } else { "text" };

    let input = match field {
        Field::Message => view! {
            <textarea
                id=id.clone()
                name=field.name()
                rows="5"
                required=true
                placeholder=placeholder(field)
                class=format!("{INPUT_CLASS} resize-none")
                prop:value=value
                prop:disabled=busy
                on:input=on_input
            />
        }
        .into_any(),
        _ => view! {
            <input
                id=id.clone()
                name=field.name()
                type=input_type
                required=true
                placeholder=placeholder(field)
                class=INPUT_CLASS
                prop:value=value
                prop:disabled=busy
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <label for=id class="block font-body text-sm text-gray-400 mb-2">
                {label(field)}
            </label>
            {input}
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = site_config();
    let form = RwSignal::new(ContactForm::new());

    let UseTimeoutFnReturn {
        start: start_reset,
        ..
    } = use_timeout_fn(
        move |_: ()| form.update(ContactForm::reset),
        config.contact.success_hold_ms as f64,
    );
    let UseTimeoutFnReturn {
        start: start_send,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            form.update(ContactForm::mark_sent);
            log::info!("contact message sent");
            start_reset(());
        },
        config.contact.send_delay_ms as f64,
    );

    let on_submit = move |e: ev::SubmitEvent| {
        e.prevent_default();
        match form.try_update(ContactForm::submit) {
            Some(Ok(())) => start_send(()),
            Some(Err(err)) => log::warn!("contact form rejected: {err}"),
            None => {}
        }
    };

    let phase = move || form.with(ContactForm::phase);

    view! {
        <section class="relative py-24 overflow-hidden">
            <DriftingDots count=config.particles.contact dot_class="bg-cyan-400/20 animate-float" size=2.0 />

            <div class="container mx-auto px-6 relative z-10">
                <SectionHeading
                    tag="contact"
                    title="Let's Connect"
                    subtitle="Have a project in mind or just want to chat? My inbox is always open."
                />

                <div class="grid lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
                    <form
                        on:submit=on_submit
                        class="space-y-6 p-8 rounded-2xl bg-[#0d1117]/80 border border-cyan-500/20 backdrop-blur-sm"
                    >
                        <div class="grid md:grid-cols-2 gap-6">
                            <FormField form field=Field::Name />
                            <FormField form field=Field::Email />
                        </div>
                        <FormField form field=Field::Subject />
                        <FormField form field=Field::Message />

                        <button
                            type="submit"
                            prop:disabled=move || phase() != FormPhase::Idle
                            class="w-full py-4 rounded-lg bg-gradient-to-r from-cyan-500 to-purple-600 font-body text-white shadow-[0_0_30px_rgba(0,217,255,0.3)] hover:shadow-[0_0_40px_rgba(0,217,255,0.5)] active:scale-[0.98] transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed"
                        >
                            {move || match phase() {
                                FormPhase::Idle => "Send Message ➤",
                                FormPhase::Submitting => "Sending...",
                                FormPhase::Success => "Message Sent! ✓",
                            }}
                        </button>

                        <Show when=move || phase() == FormPhase::Success>
                            <p class="text-center font-body text-green-400 animate-fade-in">
                                "Thanks for reaching out! I'll get back to you soon."
                            </p>
                        </Show>
                    </form>

                    <div class="space-y-8">
                        <div class="p-6 rounded-2xl bg-[#0d1117]/80 border border-cyan-500/20 backdrop-blur-sm">
                            <div class="flex items-center gap-4">
                                <div class="w-12 h-12 rounded-xl bg-gradient-to-br from-cyan-500 to-blue-600 flex items-center justify-center text-2xl">
                                    "✉"
                                </div>
                                <div>
                                    <p class="font-body text-sm text-gray-500">"Email"</p>
                                    <a
                                        href=format!("mailto:{}", PROFILE.email)
                                        class="font-body text-white hover:text-cyan-400 transition-colors"
                                    >
                                        {PROFILE.email}
                                    </a>
                                </div>
                            </div>
                        </div>

                        <div class="p-6 rounded-2xl bg-[#0d1117]/80 border border-cyan-500/20 backdrop-blur-sm">
                            <div class="flex items-center gap-4">
                                <div class="w-12 h-12 rounded-xl bg-gradient-to-br from-purple-500 to-pink-600 flex items-center justify-center text-2xl">
                                    "📍"
                                </div>
                                <div>
                                    <p class="font-body text-sm text-gray-500">"Location"</p>
                                    <p class="font-body text-white">{PROFILE.location}</p>
                                </div>
                            </div>
                        </div>

                        <div class="p-6 rounded-2xl bg-[#0d1117]/80 border border-cyan-500/20 backdrop-blur-sm">
                            <h3 class="font-display text-lg text-white mb-4">"Find me online"</h3>
                            <div class="flex gap-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                aria-label=link.label
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class=format!(
                                                    "w-12 h-12 rounded-xl bg-gradient-to-br {} flex items-center justify-center text-2xl text-white hover:scale-110 hover:-translate-y-1 transition-transform",
                                                    link.color,
                                                )
                                            >
                                                <i class=link.icon_class />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="p-6 rounded-2xl bg-gradient-to-br from-cyan-500/10 to-purple-600/10 border border-cyan-500/30">
                            <div class="flex items-center gap-3 mb-2">
                                <span class="w-3 h-3 rounded-full bg-green-400 animate-pulse" />
                                <span class="font-body text-green-400">"Available for work"</span>
                            </div>
                            <p class="font-body text-sm text-gray-400">
                                "Open to freelance projects and full-time opportunities."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
