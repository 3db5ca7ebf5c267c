use leptos::prelude::*;

use crate::{
    capability::MotionProfile,
    config::SITE,
    content::{ABOUT, AVATAR, BADGES, HERO_TAGLINES, TITLE_LABEL},
    sections::Section,
};

use super::{navbar::scroll_to_section, providers::use_capabilities};

#[component]
pub fn Hero() -> impl IntoView {
    let capabilities = use_capabilities();
    let motion = move || MotionProfile::new(capabilities.get());

    view! {
        <section
            id=Section::Home.id()
            class="relative min-h-screen flex items-center px-6 pt-28 pb-16"
        >
            <div class="max-w-6xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-6">
                    <p class="text-xs font-semibold tracking-[0.3em] text-violet-600 dark:text-violet-400">
                        {TITLE_LABEL}
                    </p>
                    <h1 class=move || {
                        format!(
                            "text-5xl md:text-7xl font-bold leading-none text-stone-900 dark:text-stone-50 {}",
                            motion().entrance(),
                        )
                    }>{SITE.owner}</h1>
                    {HERO_TAGLINES
                        .iter()
                        .enumerate()
                        .map(|(i, line)| {
                            view! {
                                <p
                                    class=move || {
                                        format!(
                                            "text-lg text-stone-700 dark:text-stone-300 {}",
                                            motion().entrance(),
                                        )
                                    }
                                    style=move || motion().stagger(i + 1, 80)
                                >
                                    {*line}
                                </p>
                            }
                        })
                        .collect_view()}
                    <div class="flex flex-wrap gap-3">
                        {BADGES
                            .iter()
                            .map(|badge| {
                                view! {
                                    <span class="px-4 py-2 rounded-full text-sm font-medium text-white bg-gradient-to-r from-purple-500 to-blue-600">
                                        {*badge}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex gap-4 pt-2">
                        <button
                            class="px-6 py-3 rounded-full font-semibold text-white bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 hover:scale-105 active:scale-95 transition-transform"
                            on:click=move |_| scroll_to_section(Section::Projects)
                        >
                            "View Projects"
                        </button>
                        <button
                            class="px-6 py-3 rounded-full font-semibold border border-stone-300 dark:border-stone-700 text-stone-900 dark:text-stone-100 hover:scale-105 active:scale-95 transition-transform"
                            on:click=move |_| scroll_to_section(Section::Contact)
                        >
                            "Get in Touch"
                        </button>
                    </div>
                </div>
                <div class="flex flex-col items-center gap-8">
                    <img
                        src=SITE.asset(AVATAR)
                        alt=format!("Portrait of {}", SITE.owner)
                        width="256"
                        height="256"
                        class="w-56 h-56 md:w-64 md:h-64 rounded-full object-cover shadow-2xl ring-2 ring-violet-500/30"
                    />
                    <div class="max-w-md">
                        <p class="text-xs font-semibold tracking-[0.3em] text-blue-600 dark:text-blue-400 mb-3">
                            "WHO I AM"
                        </p>
                        <h2 class="text-2xl font-bold mb-3 text-stone-900 dark:text-stone-50">
                            "Creating at the intersection of Innovation & Impact"
                        </h2>
                        <p class="text-stone-700 dark:text-stone-300 leading-relaxed">{ABOUT}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
