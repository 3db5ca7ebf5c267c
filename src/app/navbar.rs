use leptos::{either::Either, ev::MouseEvent, prelude::*};
use leptos_router::hooks::use_location;
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::{
    config::SITE,
    sections::{is_scrolled, resolve_targets, Section, SectionTracker, VisibilityBand},
};

use super::theme_toggle::ThemeToggle;

/// Smooth-scroll the landmark into view. The active section follows once the
/// observer sees it arrive.
pub fn scroll_to_section(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::warn!("no landmark with id {section}");
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Active landmark for this mount. The observer is released with the owner.
fn use_active_section() -> ReadSignal<Option<Section>> {
    let (active, set_active) = signal(None::<Section>);
    let tracker = StoredValue::new(SectionTracker::new());
    let targets = RwSignal::new_local(Vec::<web_sys::Element>::new());
    let location = use_location();

    // landmarks belong to the routed page, so look them up again after each
    // navigation once the new view is in the document
    Effect::new(move |_| {
        location.pathname.track();
        request_animation_frame(move || {
            let doc = document();
            let found = resolve_targets(|selector| doc.query_selector(selector).ok().flatten());
            log::debug!("observing {} landmarks", found.len());
            targets.set(found);
        });
    });

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        targets,
        move |entries, _| {
            let reports = entries
                .into_iter()
                .map(|entry| (entry.target().id(), entry.is_intersecting()));
            let next = tracker.try_update_value(|t| t.observe(reports)).flatten();
            if next != active.get_untracked() {
                set_active.set(next);
            }
        },
        UseIntersectionObserverOptions::default()
            .root_margin(VisibilityBand::default().root_margin()),
    );
    on_cleanup(move || stop());

    active
}

#[component]
pub fn Navbar() -> impl IntoView {
    let active = use_active_section();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));
    let (menu_open, set_menu_open) = signal(false);

    let navigate = move |section: Section| {
        set_menu_open.set(false);
        scroll_to_section(section);
    };

    let link = move |section: Section, class: &'static str| {
        view! {
            <a
                href=section.href()
                class=move || {
                    let state = if active.get() == Some(section) {
                        "text-blue-600 dark:text-blue-400"
                    } else {
                        "text-stone-700 dark:text-stone-300 hover:text-blue-600 dark:hover:text-blue-400"
                    };
                    format!("{class} {state} transition-colors")
                }
                aria-current=move || (active.get() == Some(section)).then_some("true")
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    navigate(section);
                }
            >
                {section.label()}
            </a>
        }
    };

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-white/80 dark:bg-stone-950/80 backdrop-blur-xl shadow-lg border-b border-stone-200/50 dark:border-stone-800/50"
            } else {
                "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-6 lg:px-10">
                <div class="flex items-center justify-between h-16 md:h-20">
                    <button
                        class="text-xl md:text-2xl font-bold bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 dark:from-blue-400 dark:via-purple-400 dark:to-pink-400 bg-clip-text text-transparent hover:opacity-80"
                        on:click=move |_| navigate(Section::Home)
                    >
                        {SITE.initials()}
                    </button>
                    <div class="hidden md:flex items-center gap-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| link(section, "text-sm font-medium"))
                            .collect_view()}
                        <ThemeToggle />
                    </div>
                    <div class="flex md:hidden items-center gap-2">
                        <ThemeToggle />
                        <button
                            class="p-2 text-stone-700 dark:text-stone-300"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            {move || {
                if menu_open.get() {
                    Either::Left(
                        view! {
                            <div class="md:hidden bg-white/95 dark:bg-stone-950/95 backdrop-blur-xl border-b border-stone-200/50 dark:border-stone-800/50 shadow-lg">
                                <div class="flex flex-col px-6 py-4 space-y-2">
                                    {Section::ALL
                                        .into_iter()
                                        .map(|section| {
                                            link(
                                                section,
                                                "px-4 py-3 text-base font-medium rounded-lg hover:bg-stone-100 dark:hover:bg-stone-900",
                                            )
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        },
                    )
                } else {
                    Either::Right(())
                }
            }}
        </nav>
    }
}
