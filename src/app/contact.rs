use leptos::{
    either::EitherOf3,
    ev::SubmitEvent,
    prelude::*,
    task::spawn_local,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    content::SOCIALS,
    sections::Section,
    submission::{ContactMessage, SubmissionMachine, SubmissionState, Ticket, REVERT_DELAY},
};

#[cfg(feature = "hydrate")]
async fn send(payload: ContactMessage) -> Result<(), String> {
    use crate::{
        config::SITE,
        submission::{deliver, GlooRelay},
    };
    deliver(&GlooRelay, SITE.contact_endpoint, &payload).await
}

#[cfg(not(feature = "hydrate"))]
async fn send(_payload: ContactMessage) -> Result<(), String> {
    Err(crate::submission::FALLBACK_ERROR_MESSAGE.to_string())
}

const FIELD_CLASS: &str = "w-full px-4 py-3 rounded-xl bg-white/70 dark:bg-stone-900/70 border border-stone-300 dark:border-stone-700 text-stone-900 dark:text-stone-100 focus:outline-none focus:ring-2 focus:ring-violet-500 disabled:opacity-60";

#[component]
pub fn Contact() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let machine = RwSignal::new(SubmissionMachine::new());

    let state = Memo::new(move |_| machine.with(|m| m.state().clone()));
    let submitting = move || state.with(SubmissionState::is_submitting);

    // cancelled with the owner, so a pending revert never outlives the form
    let UseTimeoutFnReturn {
        start: start_revert,
        ..
    } = use_timeout_fn(
        move |ticket: Ticket| {
            machine.try_update(|m| m.revert(ticket));
        },
        REVERT_DELAY.as_millis() as f64,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(ticket)) = machine.try_update(|m| m.begin()) else {
            log::debug!("submit ignored, request already in flight");
            return;
        };
        let payload = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let start_revert = start_revert.clone();
        spawn_local(async move {
            let outcome = send(payload).await;
            let succeeded = outcome.is_ok();
            let Some(ticket) = machine.try_update(|m| m.finish(ticket, outcome)).flatten()
            else {
                return;
            };
            if succeeded {
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            start_revert(ticket);
        });
    };

    view! {
        <section id=Section::Contact.id() class="relative py-16 md:py-24 px-6">
            <div class="max-w-5xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-4 text-stone-900 dark:text-stone-50">
                    "Let's "
                    <span class="bg-gradient-to-r from-blue-600 to-violet-600 dark:from-blue-400 dark:to-violet-400 bg-clip-text text-transparent">
                        "Connect"
                    </span>
                </h2>
                <p class="text-center text-stone-600 dark:text-stone-400 mb-12">
                    "Have a project in mind or just want to say hi? My inbox is open."
                </p>
                <div class="grid grid-cols-1 lg:grid-cols-5 gap-10">
                    <form class="lg:col-span-3 space-y-4" on:submit=on_submit>
                        <label class="block">
                            <span class="sr-only">"Name"</span>
                            <input
                                type="text"
                                name="name"
                                placeholder="Your name"
                                required
                                class=FIELD_CLASS
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                                disabled=submitting
                            />
                        </label>
                        <label class="block">
                            <span class="sr-only">"Email"</span>
                            <input
                                type="email"
                                name="email"
                                placeholder="you@example.com"
                                required
                                class=FIELD_CLASS
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                disabled=submitting
                            />
                        </label>
                        <label class="block">
                            <span class="sr-only">"Message"</span>
                            <textarea
                                name="message"
                                rows="5"
                                placeholder="What's on your mind?"
                                required
                                class=FIELD_CLASS
                                prop:value=move || message.get()
                                on:input=move |ev| message.set(event_target_value(&ev))
                                disabled=submitting
                            ></textarea>
                        </label>
                        <button
                            type="submit"
                            disabled=submitting
                            class="w-full px-6 py-3 rounded-xl font-semibold text-white bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 hover:opacity-90 disabled:opacity-60 disabled:cursor-not-allowed transition-opacity"
                        >
                            {move || if submitting() { "Sending..." } else { "Send Message" }}
                        </button>
                        {move || match state.get() {
                            SubmissionState::Success => EitherOf3::A(view! {
                                <p role="status" class="text-emerald-600 dark:text-emerald-400">
                                    "Thanks! Your message has been sent."
                                </p>
                            }),
                            SubmissionState::Error(msg) => EitherOf3::B(view! {
                                <p role="alert" class="text-red-600 dark:text-red-400">{msg}</p>
                            }),
                            SubmissionState::Idle | SubmissionState::Submitting => EitherOf3::C(()),
                        }}
                    </form>
                    <ul class="lg:col-span-2 space-y-4">
                        {SOCIALS
                            .iter()
                            .map(|social| {
                                view! {
                                    <li>
                                        <a
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="flex items-center gap-4 p-4 rounded-2xl bg-white/70 dark:bg-stone-900/70 border border-stone-200 dark:border-stone-800 hover:border-violet-500 transition-colors"
                                        >
                                            <i class=format!("{} text-2xl", social.icon)></i>
                                            <span>
                                                <span class="block font-semibold text-stone-900 dark:text-stone-50">
                                                    {social.label}
                                                </span>
                                                <span class="block text-sm text-stone-600 dark:text-stone-400">
                                                    {social.handle}
                                                </span>
                                            </span>
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
