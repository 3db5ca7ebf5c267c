use leptos::prelude::*;

use crate::{
    capability::MotionProfile,
    content::{Project, PROJECTS},
    sections::Section,
};

use super::providers::use_capabilities;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="relative py-16 md:py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-12 text-stone-900 dark:text-stone-50">
                    "Featured "
                    <span class="bg-gradient-to-r from-pink-600 to-orange-500 dark:from-pink-400 dark:to-orange-400 bg-clip-text text-transparent">
                        "Projects"
                    </span>
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let capabilities = use_capabilities();
    let motion = move || MotionProfile::new(capabilities.get());

    view! {
        <article
            class=move || {
                format!(
                    "group flex flex-col rounded-2xl overflow-hidden bg-white/70 dark:bg-stone-900/70 border border-stone-200 dark:border-stone-800 backdrop-blur-md hover:shadow-xl transition-shadow {}",
                    motion().entrance(),
                )
            }
            style=move || motion().stagger(index, 100)
        >
            <div class=format!("h-2 bg-gradient-to-r {}", project.gradient)></div>
            <div class="flex flex-col flex-grow p-6">
                <h3 class="text-xl font-semibold mb-2 text-stone-900 dark:text-stone-50">
                    {project.title}
                </h3>
                <p class="text-stone-700 dark:text-stone-300 mb-4 flex-grow">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
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
                <div class="flex gap-4 text-sm font-medium">
                    {project
                        .github_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-stone-700 dark:text-stone-300 hover:text-blue-600 dark:hover:text-blue-400"
                                >
                                    <i class="devicon-github-plain mr-1"></i>
                                    "Code"
                                </a>
                            }
                        })}
                    {project
                        .live_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-blue-600 dark:text-blue-400 hover:underline"
                                >
                                    "Live Demo ↗"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
