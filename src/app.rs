mod background;
mod contact;
mod experience;
mod footer;
mod hero;
mod navbar;
mod not_found;
mod projects;
mod providers;
mod skills;
mod theme_toggle;

use background::AnimatedBackground;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use navbar::Navbar;
use not_found::NotFound;
use projects::Projects;
use providers::{provide_capabilities, provide_theme};
use skills::Skills;

use crate::{
    config::SITE,
    content::KEYWORDS,
    theme::{page_class, BODY_CLASS},
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth light">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <meta name="theme-color" media="(prefers-color-scheme: light)" content="#fafaf9" />
                <meta name="theme-color" media="(prefers-color-scheme: dark)" content="#0c0a09" />
                <link rel="shortcut icon" type="image/ico" href=SITE.asset("/favicon.ico") />
                <link rel="stylesheet" id="leptos" href=SITE.stylesheet() />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class=BODY_CLASS>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let theme = provide_theme();
    provide_capabilities();

    view! {
        <Title formatter=|title: String| {
            if title.is_empty() { SITE.owner.to_string() } else { format!("{} - {title}", SITE.owner) }
        } />
        <Meta name="description" content=SITE.description />
        <Meta name="keywords" content=KEYWORDS.join(", ") />
        <Meta name="author" content=SITE.owner />
        <Meta name="creator" content=SITE.owner />
        <Meta name="robots" content="index, follow, max-image-preview:large" />
        <Meta property="og:type" content="website" />
        <Meta property="og:locale" content="en_US" />
        <Meta property="og:url" content=SITE.site_url />
        <Meta property="og:title" content=SITE.preview_title() />
        <Meta property="og:description" content=SITE.description />
        <Meta property="og:site_name" content=SITE.site_name />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=SITE.preview_title() />
        <Meta name="twitter:description" content=SITE.description />

        <Router base=SITE.router_base()>
            <div class=move || page_class(theme.is_resolved())>
                <AnimatedBackground />
                <Navbar />
                <main class="flex-grow">
                    <Routes fallback=NotFound>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text=SITE.headline />
        <Hero />
        <Skills />
        <Experience />
        <Projects />
        <Contact />
    }
}
