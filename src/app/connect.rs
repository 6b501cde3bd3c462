use std::time::Duration;

use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_meta::Title;

use super::decor::{Backdrop, BackButton, PageCard, PageLabel, SectionTitle, SocialLinks};
use crate::contact::{ContactForm, FormStatus, CONTACT_PATH};

const DIRECT_EMAIL: &str = "imharishba@gmail.com";

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-xl bg-white/70 border-2 border-zinc-800/10 focus:border-[#e15f41] focus:outline-none focus:ring-0 text-zinc-900 placeholder-zinc-400 transition-all duration-300";

/// Posts the form to the relay and maps the outcome onto the form state.
async fn send_message(form: ContactForm) -> FormStatus {
    let origin = match window().location().origin() {
        Ok(origin) => origin,
        Err(e) => {
            log::error!("could not resolve page origin: {e:?}");
            return FormStatus::Error;
        }
    };

    match reqwest::Client::new()
        .post(format!("{origin}{CONTACT_PATH}"))
        .json(&form)
        .send()
        .await
    {
        Ok(res) => {
            let status = FormStatus::from_status_code(res.status().as_u16());
            if status == FormStatus::Error {
                log::error!("contact relay answered {}", res.status());
            }
            status
        }
        Err(e) => {
            log::error!("contact request failed: {e}");
            FormStatus::Error
        }
    }
}

#[component]
pub fn ConnectPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !status.get_untracked().can_submit() {
            return;
        }
        status.set(FormStatus::Sending);
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        spawn_local(async move {
            let outcome = send_message(form).await;
            if outcome == FormStatus::Success {
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            status.set(outcome);
            set_timeout(
                move || {
                    status.update(|s| {
                        if s.is_settled() {
                            *s = FormStatus::Idle;
                        }
                    })
                },
                Duration::from_millis(FormStatus::SETTLE_MS),
            );
        });
    };

    view! {
        <Title text="Connect" />
        <PageCard>
            <Backdrop />
            <BackButton />
            <PageLabel text="Connect / Contact" />

            <div class="flex-1 flex flex-col justify-center p-6 md:p-12 pt-20 md:pt-24 relative z-10">
                <div class="max-w-2xl mx-auto w-full">
                    <SectionTitle
                        title="Let's Connect"
                        subtitle="Have a project in mind? I'd love to hear from you. Send me a message and I'll get back to you soon."
                    />

                    <div class="bg-white/40 backdrop-blur-sm rounded-3xl p-6 md:p-8 border border-white/60 shadow-xl fade-up">
                        <form on:submit=on_submit class="space-y-6">
                            <div class="space-y-2">
                                <label for="name" class="block text-sm font-bold text-zinc-900">
                                    "Name"
                                </label>
                                <input
                                    id="name"
                                    type="text"
                                    required
                                    class=INPUT_CLASS
                                    placeholder="Your name"
                                    bind:value=name
                                />
                            </div>
                            <div class="space-y-2">
                                <label for="email" class="block text-sm font-bold text-zinc-900">
                                    "Email"
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    required
                                    class=INPUT_CLASS
                                    placeholder="your.email@example.com"
                                    bind:value=email
                                />
                            </div>
                            <div class="space-y-2">
                                <label for="message" class="block text-sm font-bold text-zinc-900">
                                    "Message"
                                </label>
                                <textarea
                                    id="message"
                                    rows="6"
                                    required
                                    class=format!("{INPUT_CLASS} resize-none")
                                    placeholder="Tell me about your project..."
                                    bind:value=message
                                ></textarea>
                            </div>

                            <button
                                type="submit"
                                disabled=move || !status.get().can_submit()
                                class=move || {
                                    let tone = match status.get() {
                                        FormStatus::Success => "bg-green-600",
                                        FormStatus::Error => "bg-red-600",
                                        _ => "bg-zinc-900 hover:bg-[#e15f41]",
                                    };
                                    format!(
                                        "w-full py-4 rounded-xl text-white font-bold text-lg flex items-center justify-center gap-2 transition-all duration-300 disabled:opacity-60 disabled:cursor-wait relative overflow-hidden {tone}",
                                    )
                                }
                            >
                                <Show when=move || status.get() == FormStatus::Sending>
                                    <span class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin"></span>
                                </Show>
                                <span class="relative z-10">{move || status.get().button_label()}</span>
                            </button>

                            <Show when=move || status.get() == FormStatus::Success>
                                <div class="p-4 rounded-xl bg-green-100 border-2 border-green-500 text-green-800 text-center font-medium fade-in">
                                    "Thanks for reaching out! I'll get back to you soon."
                                </div>
                            </Show>
                            <Show when=move || status.get() == FormStatus::Error>
                                <div class="p-4 rounded-xl bg-red-100 border-2 border-red-500 text-red-800 text-center font-medium fade-in">
                                    "Something went wrong. Please try again or "
                                    <a href=format!("mailto:{DIRECT_EMAIL}") class="underline font-bold">
                                        "email me directly"
                                    </a>
                                    "."
                                </div>
                            </Show>
                        </form>
                    </div>

                    <div class="mt-8 text-center">
                        <p class="text-sm text-zinc-600">
                            "Or email me directly at "
                            <a
                                href=format!("mailto:{DIRECT_EMAIL}")
                                class="text-zinc-900 font-bold hover:text-[#e15f41] transition-colors"
                            >
                                {DIRECT_EMAIL}
                            </a>
                        </p>
                    </div>

                    <div class="mt-6">
                        <SocialLinks />
                    </div>
                </div>
            </div>
        </PageCard>
    }
}
