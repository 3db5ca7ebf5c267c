use leptos::prelude::*;

use crate::{
    config::SITE,
    content::{copyright_year, SOCIALS},
};

fn back_to_top() {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
pub fn Footer() -> impl IntoView {
    let notice = match copyright_year(env!("BUILD_TIME")) {
        Some(year) => format!("© {year} {}", SITE.owner),
        None => format!("© {}", SITE.owner),
    };

    view! {
        <footer class="relative border-t border-stone-200/60 dark:border-stone-800/60 py-10 px-6">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-6">
                <p class="text-sm text-stone-600 dark:text-stone-400">{notice}</p>
                <div class="flex items-center gap-5">
                    {SOCIALS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.label
                                    class="text-xl text-stone-600 dark:text-stone-400 hover:text-violet-600 dark:hover:text-violet-400 transition-colors"
                                >
                                    <i class=social.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="text-sm font-medium text-stone-700 dark:text-stone-300 hover:text-violet-600 dark:hover:text-violet-400"
                    on:click=move |_| back_to_top()
                >
                    "Back to top ↑"
                </button>
            </div>
        </footer>
    }
}
