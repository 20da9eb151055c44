//! UI Components

use chrono::Datelike;
use homecare_core::content::{
    INTAKE_DISCLAIMER, INTAKE_ERROR_FALLBACK, INTAKE_HEADING, INTAKE_SUCCESS, ServiceCard,
    ServiceIcon,
};
use homecare_core::{IntakeSession, SiteConfig, SubmissionState};
use leptos::prelude::*;

use crate::api;

const PHONE_GLYPH: &str = "📞";

/// Inputs the browser must see filled before `submit` fires
const REQUIRED_FIELDS: [&str; 2] = ["name", "phone"];

/// `tel:` link; rendered in the hero and the contact card so calling stays
/// available whatever the intake form does.
#[component]
pub fn CallButton(config: SiteConfig, #[prop(into)] variant: String) -> impl IntoView {
    view! {
        <a href=config.tel_href() class=variant aria-label=config.call_label()>
            <span class="icon">{PHONE_GLYPH}</span>
            {format!(" Call {}", config.display_phone)}
        </a>
    }
}

/// Service card
#[component]
pub fn ServiceCardView(card: ServiceCard) -> impl IntoView {
    view! {
        <div class="card service">
            <div class="icon">{icon_glyph(card.icon)}</div>
            <h3>{card.title}</h3>
            <p>{card.description}</p>
            {card.note.map(|note| view! { <p class="fine-print">{note}</p> })}
        </div>
    }
}

/// Client intake form.
///
/// State lives in one `IntakeSession` signal: the submit handler moves it to
/// `Sending` before the request leaves, and the spawned task settles it.
#[component]
pub fn IntakeForm(config: SiteConfig) -> impl IntoView {
    let session = RwSignal::new(IntakeSession::new());
    let endpoint = config.relay_endpoint.clone();
    let subject = config.intake_subject();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(form) = session.try_update(IntakeSession::begin).flatten() else {
            return;
        };

        let config = config.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::submit_intake(&config, &form).await;
            session.update(|s| s.settle(outcome));
        });
    };

    view! {
        <h3>{INTAKE_HEADING}</h3>
        <form class="intake" action=endpoint method="POST" on:submit=submit>
            <input type="hidden" name="_subject" value=subject />

            <div class="field">
                <label>"Client / Family Name"</label>
                <input
                    name="name"
                    type="text"
                    placeholder="Full name"
                    required=is_required("name")
                    prop:value=move || session.with(|s| s.form.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| s.form.name = value);
                    }
                />
            </div>

            <div class="field">
                <label>"Phone Number"</label>
                <input
                    name="phone"
                    type="tel"
                    placeholder="(###) ###-####"
                    required=is_required("phone")
                    prop:value=move || session.with(|s| s.form.phone.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| s.form.phone = value);
                    }
                />
            </div>

            <div class="field">
                <label>"Email (optional)"</label>
                <input
                    name="email"
                    type="email"
                    placeholder="you@example.com"
                    required=is_required("email")
                    prop:value=move || session.with(|s| s.form.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| s.form.email = value);
                    }
                />
            </div>

            <div class="field">
                <label>"Care Needs"</label>
                <textarea
                    name="message"
                    placeholder="Tell us what kind of support is needed (personal care, companion care, dialysis support, etc.)"
                    prop:value=move || session.with(|s| s.form.message.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| s.form.message = value);
                    }
                />
            </div>

            <p class="fine-print">{INTAKE_DISCLAIMER}</p>

            <button
                type="submit"
                class="btn btn-primary btn-block"
                disabled=move || session.with(|s| submit_button(s.state()).1)
            >
                {move || session.with(|s| submit_button(s.state()).0)}
            </button>

            <Show when=move || session.with(|s| s.state().is_success())>
                <p class="status success">{INTAKE_SUCCESS}</p>
            </Show>

            {move || {
                session
                    .with(|s| s.state().error_message().map(error_text))
                    .map(|text| view! { <p class="status error">{text}</p> })
            }}
        </form>
    }
}

#[component]
pub fn Footer(config: SiteConfig) -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="site-footer">
            <p>{config.footer_notice(year)}</p>
        </footer>
    }
}

const fn icon_glyph(icon: ServiceIcon) -> &'static str {
    match icon {
        ServiceIcon::Heart => "❤️",
        ServiceIcon::Users => "👥",
        ServiceIcon::ShieldCheck => "🛡️",
        ServiceIcon::Droplets => "💧",
    }
}

fn is_required(field: &str) -> bool {
    REQUIRED_FIELDS.contains(&field)
}

/// Caption and disabled flag of the submit button
const fn submit_button(state: &SubmissionState) -> (&'static str, bool) {
    (state.submit_label(), state.is_sending())
}

fn error_text(message: &str) -> String {
    if message.is_empty() { INTAKE_ERROR_FALLBACK.to_string() } else { message.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_text_falls_back_when_empty() {
        assert_eq!(error_text(""), INTAKE_ERROR_FALLBACK);
        assert_eq!(error_text("Form not found"), "Form not found");
    }

    #[test]
    fn test_submit_button_follows_state() {
        let cases = [
            (SubmissionState::Idle, "Submit Intake Request", false),
            (SubmissionState::Sending, "Sending...", true),
            (SubmissionState::Success, "Submit Intake Request", false),
            (SubmissionState::Error("Form not found".into()), "Submit Intake Request", false),
        ];

        for (state, label, disabled) in cases {
            assert_eq!(submit_button(&state), (label, disabled), "state {state:?}");
        }
    }

    #[test]
    fn test_only_name_and_phone_are_required() {
        assert!(is_required("name"));
        assert!(is_required("phone"));
        assert!(!is_required("email"));
        assert!(!is_required("message"));
    }

    #[test]
    fn test_every_icon_has_a_glyph() {
        for icon in
            [ServiceIcon::Heart, ServiceIcon::Users, ServiceIcon::ShieldCheck, ServiceIcon::Droplets]
        {
            assert!(!icon_glyph(icon).is_empty());
        }
    }
}
