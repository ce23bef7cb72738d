use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::shared::contact_form::{ContactForm, SubmitStatus};
use leptos::prelude::*;
use thaw::{Input, Textarea};

#[component]
pub fn ContactPage() -> impl IntoView {
    let ctx = use_global_context();
    let (to, subject) = ctx
        .config
        .with_value(|c| (c.contact.email.clone(), c.contact.subject.clone()));

    let studio_email = to.clone();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitStatus::default());

    let is_submitting = move || status.with(|s| *s == SubmitStatus::Submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        status.set(SubmitStatus::Submitting);

        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };

        if let Err(e) = form.validate() {
            status.set(SubmitStatus::Error(e.to_string()));
            return;
        }

        // Письмо отправляет почтовый клиент пользователя
        let href = form.mailto_href(&to, &subject);
        match window().location().set_href(&href) {
            Ok(()) => {
                log::info!("contact form handed over to mail client");
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                status.set(SubmitStatus::Success);
            }
            Err(e) => {
                log::error!("Failed to open mail client: {:?}", e);
                status.set(SubmitStatus::Error(
                    "Could not open your mail client. Please write to us directly.".to_string(),
                ));
            }
        }
    };

    view! {
        <section class="contact-page">
            <div class="contact-page__intro">
                <span class="page-header__eyebrow">"Let's Talk"</span>
                <h1>"START A PROJECT"</h1>
                <p>"Tell us about your space and we will get back to you within two working days."</p>
                <a class="contact-page__email" href=format!("mailto:{}", studio_email)>
                    {icon("mail")}
                    <span>{studio_email.clone()}</span>
                </a>
            </div>

            <form class="contact-form" on:submit=on_submit>
                <div class="form-group">
                    <label>"Name"</label>
                    <Input value=name placeholder="Your name" />
                </div>
                <div class="form-group">
                    <label>"Email"</label>
                    <Input value=email placeholder="you@example.com" />
                </div>
                <div class="form-group">
                    <label>"Message"</label>
                    <Textarea value=message placeholder="Describe your project" attr:rows=6 />
                </div>

                {move || match status.get() {
                    SubmitStatus::Success => Some(view! {
                        <div class="form-status success">
                            "Thank you! Your mail client should open with the message ready to send."
                        </div>
                    }.into_any()),
                    SubmitStatus::Error(e) => Some(view! {
                        <div class="form-status error">{e}</div>
                    }.into_any()),
                    _ => None,
                }}

                <button type="submit" class="btn-primary" disabled=is_submitting>
                    {move || if is_submitting() { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </section>
    }
}
