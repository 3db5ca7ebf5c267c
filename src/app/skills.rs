use leptos::prelude::*;

use crate::{capability::MotionProfile, content::SKILLS, sections::Section};

use super::providers::use_capabilities;

#[component]
pub fn Skills() -> impl IntoView {
    let capabilities = use_capabilities();
    let motion = move || MotionProfile::new(capabilities.get());

    view! {
        <section id=Section::Skills.id() class="relative py-16 md:py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-12 text-stone-900 dark:text-stone-50">
                    "Skills & "
                    <span class="bg-gradient-to-r from-blue-600 to-purple-600 dark:from-blue-400 dark:to-purple-400 bg-clip-text text-transparent">
                        "Expertise"
                    </span>
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "rounded-2xl p-6 bg-white/70 dark:bg-stone-900/70 border border-stone-200 dark:border-stone-800 backdrop-blur-md {}",
                                            motion().entrance(),
                                        )
                                    }
                                    style=move || motion().stagger(i, 120)
                                >
                                    <div class=format!(
                                        "h-1 w-16 rounded-full mb-5 bg-gradient-to-r {}",
                                        category.gradient,
                                    )></div>
                                    <h3 class="text-xl font-semibold mb-4 text-stone-900 dark:text-stone-50">
                                        {category.title}
                                    </h3>
                                    <ul class="flex flex-wrap gap-2">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <li class="px-3 py-1 rounded-full text-sm bg-stone-100 dark:bg-stone-800 text-stone-700 dark:text-stone-300">
                                                        {*skill}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
