use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::{config::SITE, sections::Section};

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found" />
        <section class="min-h-screen flex flex-col items-center justify-center gap-6 px-6 text-center">
            <p class="text-8xl font-bold bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 bg-clip-text text-transparent">
                "404"
            </p>
            <h1 class="text-2xl font-semibold text-stone-900 dark:text-stone-50">
                "This page wandered off."
            </h1>
            <div class="flex gap-4">
                // resolved against the router base
                <A
                    href="/"
                    attr:class="px-6 py-3 rounded-full font-semibold text-white bg-gradient-to-r from-blue-600 to-violet-600"
                >
                    "Back home"
                </A>
                <a
                    href=SITE.home_anchor(Section::Projects)
                    class="px-6 py-3 rounded-full font-semibold border border-stone-300 dark:border-stone-700 text-stone-900 dark:text-stone-100"
                >
                    "See projects"
                </a>
            </div>
        </section>
    }
}
