use leptos::prelude::*;

use super::providers::use_theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    // invisible until the stored preference is known, so the icon never flips on load
    view! {
        <Show
            when=move || theme.is_resolved()
            fallback=|| {
                view! { <div class="w-10 h-10 rounded-full opacity-0" aria-hidden="true"></div> }
            }
        >
            <button
                class="relative flex items-center justify-center w-10 h-10 rounded-full border-2 backdrop-blur-xl transition-colors duration-300 border-blue-500/30 bg-white/90 text-amber-500 dark:border-violet-500/50 dark:bg-indigo-950/80 dark:text-violet-300 hover:scale-110 active:scale-95"
                aria-label=move || format!("Switch to {} mode", theme.theme().opposite())
                on:click=move |_| theme.toggle()
            >
                {move || if theme.theme().is_dark() { "☾" } else { "☀" }}
            </button>
        </Show>
    }
}
