mod backdrop;
mod certifications;
mod components;
mod contact;
mod cursor;
mod education;
mod experience;
mod footer;
mod hero;
mod loading;
mod navigation;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;
use crate::data::{person_json_ld, FAVICON, PROFILE};
use crate::scroll_spy::SectionId;

use certifications::CertificationsSection;
use contact::ContactSection;
use cursor::CustomCursor;
use education::EducationSection;
use experience::ExperienceSection;
use footer::Footer;
use hero::HeroSection;
use loading::LoadingScreen;
use navigation::Navigation;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let person = person_json_ld().unwrap_or_else(|e| {
        log::error!("failed to build JSON-LD: {e}");
        String::new()
    });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="description" content=PROFILE.tagline />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/ld+json" inner_html=person></script>
                <MetaTags />
            </head>
            <body class="bg-[#0a0e17] text-white font-body">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteConfig::default());

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Loading screen until the simulated load completes, then the full page.
#[component]
fn PortfolioPage() -> impl IntoView {
    let (is_loading, set_is_loading) = signal(true);
    let on_loaded = Callback::new(move |_: ()| {
        log::debug!("loading complete");
        set_is_loading.set(false);
    });

    view! {
        <Title text="Portfolio" />
        <Show
            when=move || !is_loading.get()
            fallback=move || view! { <LoadingScreen on_complete=on_loaded /> }
        >
            <div class="min-h-screen bg-[#0a0e17]">
                <CustomCursor />
                <Navigation />
                <main class="overflow-x-hidden">
                    <div id=SectionId::Home.anchor()>
                        <HeroSection />
                    </div>
                    <div id=SectionId::Skills.anchor()>
                        <SkillsSection />
                    </div>
                    <div id=SectionId::Experience.anchor()>
                        <ExperienceSection />
                    </div>
                    <div id=SectionId::Education.anchor()>
                        <EducationSection />
                    </div>
                    <div id=SectionId::Certifications.anchor()>
                        <CertificationsSection />
                    </div>
                    <div id=SectionId::Projects.anchor()>
                        <ProjectsSection />
                    </div>
                    <div id=SectionId::Contact.anchor()>
                        <ContactSection />
                    </div>
                </main>
                <Footer />
            </div>
        </Show>
    }
}
