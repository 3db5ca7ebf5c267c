use leptos::{either::Either, prelude::*};

use crate::decor::{compose, AnimatedSurface, Surface};

use super::providers::{use_capabilities, use_theme};

const ROOT_CLASS: &str = "fixed inset-0 -z-10 overflow-hidden pointer-events-none";

#[component]
pub fn AnimatedBackground() -> impl IntoView {
    let theme = use_theme();
    let capabilities = use_capabilities();

    move || match compose(theme.theme(), capabilities.get()) {
        Surface::Static { gradient } => Either::Left(view! {
            <div class=ROOT_CLASS aria-hidden="true">
                <div class=format!("absolute inset-0 {gradient}")></div>
            </div>
        }),
        Surface::Animated(surface) => Either::Right(view! { <AnimatedLayers surface /> }),
    }
}

#[component]
fn AnimatedLayers(surface: AnimatedSurface) -> impl IntoView {
    let AnimatedSurface {
        base,
        orbs,
        mesh,
        mesh_animation,
        particles,
        stars,
        ..
    } = surface;

    view! {
        <div class=ROOT_CLASS aria-hidden="true">
            <div class=format!("absolute inset-0 {base}")></div>
            {orbs
                .into_iter()
                .map(|orb| {
                    view! {
                        <div
                            class=format!("absolute rounded-full blur-3xl {}", orb.class)
                            style=format!("background: {}; {}", orb.gradient, orb.animation.css())
                        ></div>
                    }
                })
                .collect_view()}
            {particles
                .into_iter()
                .map(|p| view! { <div class="absolute rounded-full blur-2xl" style=p.style()></div> })
                .collect_view()}
            {stars
                .into_iter()
                .map(|s| {
                    view! { <div class="absolute rounded-full bg-white animate-twinkle" style=s.style()></div> }
                })
                .collect_view()}
            <div
                class="absolute inset-0"
                style=format!("background: {mesh}; {}", mesh_animation.css())
            ></div>
        </div>
    }
}
