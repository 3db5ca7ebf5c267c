use leptos::prelude::*;

use crate::{capability::MotionProfile, content::EXPERIENCE, sections::Section};

use super::providers::use_capabilities;

#[component]
pub fn Experience() -> impl IntoView {
    let capabilities = use_capabilities();
    let motion = move || MotionProfile::new(capabilities.get());

    view! {
        <section id=Section::Experience.id() class="relative py-16 md:py-24 px-6">
            <div class="max-w-5xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-12 text-stone-900 dark:text-stone-50">
                    "My "
                    <span class="bg-gradient-to-r from-violet-600 to-pink-600 dark:from-violet-400 dark:to-pink-400 bg-clip-text text-transparent">
                        "Journey"
                    </span>
                </h2>
                <ol class="relative border-l-2 border-stone-200 dark:border-stone-800 space-y-10">
                    {EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            view! {
                                <li
                                    class=move || format!("ml-8 {}", motion().entrance())
                                    style=move || motion().stagger(i, 150)
                                >
                                    <span class=format!(
                                        "absolute -left-5 flex items-center justify-center w-10 h-10 rounded-full text-xs font-bold text-white bg-gradient-to-br {}",
                                        item.accent,
                                    )>{item.year}</span>
                                    <div class="rounded-2xl p-6 bg-white/70 dark:bg-stone-900/70 border border-stone-200 dark:border-stone-800 backdrop-blur-md">
                                        <h3 class="text-xl font-semibold text-stone-900 dark:text-stone-50">
                                            {item.role}
                                        </h3>
                                        <p class="font-medium text-violet-600 dark:text-violet-400">
                                            {item.company}
                                        </p>
                                        <p class="text-sm text-stone-500 mb-4">{item.period}</p>
                                        <p class="text-stone-700 dark:text-stone-300 leading-relaxed">
                                            {item.description}
                                        </p>
                                        <ul class="mt-4 space-y-2 list-disc list-inside text-sm text-stone-700 dark:text-stone-300">
                                            {item
                                                .highlights
                                                .iter()
                                                .map(|h| view! { <li>{*h}</li> })
                                                .collect_view()}
                                        </ul>
                                        <div class="mt-4 flex flex-wrap gap-2">
                                            {item
                                                .tech_stack
                                                .iter()
                                                .map(|t| {
                                                    view! {
                                                        <span class="px-2 py-1 rounded text-xs bg-stone-100 dark:bg-stone-800 text-stone-600 dark:text-stone-400">
                                                            {*t}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
