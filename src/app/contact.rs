use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};

use super::{
    reveal::{Reveal, SectionHeading},
    toast::{use_toasts, Toasts},
};
use crate::{
    contact::{ContactError, ContactForm, ContactMessage, Field},
    content::{Section, SOCIAL_LINKS},
};

/// Forwards a contact message to the email relay.
#[server]
pub async fn send_contact_message(message: ContactMessage) -> Result<(), ContactError> {
    use crate::relay::{deliver, HttpRelay, RelayConfig};

    let result = deliver(HttpRelay::shared(), RelayConfig::from_env(), message).await;
    match &result {
        Ok(()) => tracing::info!("contact message relayed"),
        Err(e @ ContactError::Configuration(_)) => {
            tracing::error!(error = %e, "contact relay unavailable")
        }
        Err(e) => tracing::warn!(error = %e, "contact message not relayed"),
    }
    result
}

/// Returns the form to idle and announces the outcome. Does nothing once the
/// section owning `form` has been unmounted.
fn settle_submission(
    form: RwSignal<ContactForm>,
    toasts: Toasts,
    outcome: Result<(), ContactError>,
) {
    if let Err(e) = &outcome {
        log::warn!("contact submission failed: {e}");
    }
    if let Some(notice) = form.try_update(|f| f.finish_submit(&outcome)) {
        toasts.push(notice);
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-purple-900/20 border border-purple-500/30 rounded-lg focus:outline-none focus:border-purple-500 transition-colors text-white placeholder-gray-500";

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let toasts = use_toasts();

    let on_input = move |field: Field| {
        move |ev: Event| form.update(|f| f.update_field(field, event_target_value(&ev)))
    };
    let value = move |field: Field| move || form.with(|f| f.value(field).to_owned());
    let submitting = move || form.with(ContactForm::is_submitting);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(message) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = send_contact_message(message).await;
            settle_submission(form, toasts, outcome);
        });
    };

    view! {
        <section id=Section::Contact.id() class="min-h-screen py-20 relative">
            <div class="absolute inset-0 bg-gradient-to-b from-black via-purple-900/10 to-black" />

            <div class="container mx-auto px-6 relative z-10">
                <SectionHeading
                    title="Let's Connect"
                    subtitle="Have a project in mind or just want to chat? Drop me a message and I'll get back to you as soon as possible!"
                />

                <div class="max-w-4xl mx-auto grid md:grid-cols-2 gap-12">
                    <Reveal>
                        <form on:submit=on_submit class="space-y-6">
                            <div>
                                <label for=Field::Name.as_str() class="block text-gray-300 mb-2">
                                    "Name"
                                </label>
                                <input
                                    type="text"
                                    id=Field::Name.as_str()
                                    name=Field::Name.as_str()
                                    required
                                    placeholder="Your name"
                                    class=INPUT_CLASS
                                    prop:value=value(Field::Name)
                                    on:input=on_input(Field::Name)
                                />
                            </div>
                            <div>
                                <label for=Field::Email.as_str() class="block text-gray-300 mb-2">
                                    "Email"
                                </label>
                                <input
                                    type="email"
                                    id=Field::Email.as_str()
                                    name=Field::Email.as_str()
                                    required
                                    placeholder="your.email@example.com"
                                    class=INPUT_CLASS
                                    prop:value=value(Field::Email)
                                    on:input=on_input(Field::Email)
                                />
                            </div>
                            <div>
                                <label for=Field::Message.as_str() class="block text-gray-300 mb-2">
                                    "Message"
                                </label>
                                <textarea
                                    id=Field::Message.as_str()
                                    name=Field::Message.as_str()
                                    required
                                    rows=5
                                    placeholder="Your message..."
                                    class=format!("{INPUT_CLASS} resize-none")
                                    prop:value=value(Field::Message)
                                    on:input=on_input(Field::Message)
                                />
                            </div>
                            <button
                                type="submit"
                                disabled=submitting
                                class="w-full px-8 py-4 bg-gradient-to-r from-purple-600 to-pink-600 rounded-lg flex items-center justify-center gap-2 hover:from-purple-700 hover:to-pink-700 hover:scale-[1.02] active:scale-[0.98] transition-all disabled:opacity-60 disabled:cursor-not-allowed disabled:hover:scale-100"
                            >
                                {move || if submitting() { "Sending..." } else { "Send Message ➤" }}
                            </button>
                        </form>
                    </Reveal>

                    <Reveal class="flex flex-col justify-center">
                        <h3 class="text-2xl mb-6 text-purple-300">"Connect With Me"</h3>
                        <p class="text-gray-400 mb-8">
                            "Follow me on social media or reach out directly. I'm always excited to connect with fellow developers and discuss new opportunities!"
                        </p>
                        <div class="space-y-4">
                            {SOCIAL_LINKS
                                .iter()
                                .enumerate()
                                .map(|(i, link)| {
                                    view! {
                                        <Reveal delay_ms={i as u32 * 100}>
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center gap-4 p-4 bg-gradient-to-r from-purple-900/20 to-pink-900/20 border border-purple-500/20 rounded-lg hover:border-purple-500/50 hover:translate-x-2 transition-all group"
                                            >
                                                <div class="w-12 h-12 bg-gradient-to-br from-purple-600 to-pink-600 rounded-lg flex items-center justify-center group-hover:shadow-lg group-hover:shadow-purple-500/50 transition-shadow">
                                                    <i class=format!("{} text-2xl", link.icon) />
                                                </div>
                                                <span class="text-gray-300 group-hover:text-purple-300 transition-colors">
                                                    {link.label}
                                                </span>
                                            </a>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
