//! Home Page

use homecare_core::SiteConfig;
use homecare_core::content::{
    self, CALL_CARD_BODY, CALL_CARD_HEADING, CONSULTATION_CTA, CONTACT_ANCHOR, CONTACT_HEADING,
    CONTACT_INTAKE_HINT, CONTACT_INTRO, HERO_BANNER, HERO_TAGLINE, HIGHLIGHTS, HIGHLIGHTS_HEADING,
    SERVICES_DISCLAIMER, SERVICES_HEADING, SERVICES_INTRO, TESTIMONIAL,
};
use leptos::prelude::*;

use crate::components::{CallButton, Footer, IntakeForm, ServiceCardView};

#[component]
pub fn HomePage(config: SiteConfig) -> impl IntoView {
    let cards = content::services(config.skilled_clinical_services);

    view! {
        <div class="home">
            <header class="hero">
                <div class="banner">{HERO_BANNER}</div>
                <h1>{config.business_name.clone()}</h1>
                <p class="tagline">{HERO_TAGLINE}</p>
                <div class="cta">
                    <a
                        href=format!("#{CONTACT_ANCHOR}")
                        class="btn btn-light"
                        aria-label="Request a free consultation"
                    >
                        {CONSULTATION_CTA}
                    </a>
                    <CallButton config=config.clone() variant="btn btn-dark" />
                </div>
            </header>

            <section class="services">
                <h2>{SERVICES_HEADING}</h2>
                <p class="intro">{SERVICES_INTRO}</p>
                <p class="fine-print">{SERVICES_DISCLAIMER}</p>
                <div class="service-grid">
                    {cards
                        .into_iter()
                        .map(|card| view! { <ServiceCardView card=card /> })
                        .collect_view()}
                </div>
            </section>

            <section class="why-us">
                <div>
                    <h2>{HIGHLIGHTS_HEADING}</h2>
                    <ul>
                        {HIGHLIGHTS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </div>
                <blockquote class="testimonial">
                    <p>{TESTIMONIAL.quote}</p>
                    <footer>{TESTIMONIAL.attribution}</footer>
                </blockquote>
            </section>

            <section id=CONTACT_ANCHOR class="contact">
                <div class="contact-header">
                    <h2>{CONTACT_HEADING}</h2>
                    <p>{CONTACT_INTRO}</p>
                    <p class="fine-print">{CONTACT_INTAKE_HINT}</p>
                </div>

                <div class="contact-grid">
                    <div class="card">
                        <h3>{CALL_CARD_HEADING}</h3>
                        <p>{CALL_CARD_BODY}</p>
                        <CallButton config=config.clone() variant="btn btn-primary" />
                    </div>

                    <div class="card">
                        <IntakeForm config=config.clone() />
                    </div>
                </div>
            </section>

            <Footer config=config />
        </div>
    }
}
