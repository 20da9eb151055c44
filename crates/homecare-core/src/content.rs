//! Page Copy
//!
//! Text for every section of the page. Kept as data so wording rules (such
//! as the clinical-services toggle) can be checked without a browser.

use serde::Serialize;

/// Anchor of the contact section, target of the hero call-to-action
pub const CONTACT_ANCHOR: &str = "contact";

pub const HERO_BANNER: &str = "⭐ Now Accepting New Clients • Free Consultation Available";
pub const HERO_TAGLINE: &str =
    "With compassion and care, allowing you to thrive in your home while being taken care of.";
pub const CONSULTATION_CTA: &str = "Request a Free Consultation";

pub const SERVICES_HEADING: &str = "Our Home Care Services";
pub const SERVICES_INTRO: &str = "We also provide dialysis support and additional in-home services when needed, ensuring continuity of care and comfort at home.";
pub const SERVICES_DISCLAIMER: &str =
    "*Services are provided based on individual care plans and assessed needs.";

pub const HIGHLIGHTS_HEADING: &str = "Why Families Choose Us";
pub const HIGHLIGHTS: [&str; 4] = [
    "Licensed, bonded, and insured caregivers",
    "Customized care plans",
    "24/7 support and flexible scheduling",
    "Locally owned and community-focused",
];

/// A client quote shown next to the highlights
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub attribution: &'static str,
}

pub const TESTIMONIAL: Testimonial = Testimonial {
    quote: "\"The caregivers treated my mother like family. I finally had peace of mind.\"",
    attribution: "— Client Testimonial",
};

pub const CONTACT_HEADING: &str = "Get Started Today";
pub const CONTACT_INTRO: &str = "Call us or request a consultation to discuss your care needs.";
pub const CONTACT_INTAKE_HINT: &str =
    "New clients can also complete a quick intake request below.";

pub const CALL_CARD_HEADING: &str = "Call for Immediate Help";
pub const CALL_CARD_BODY: &str =
    "Speak with our team to discuss care options, scheduling, and next steps.";

pub const INTAKE_HEADING: &str = "Client Intake Request Form";
pub const INTAKE_DISCLAIMER: &str = "*Submitting this form does not guarantee services. All care is provided based on individual care plans and assessed needs.";
pub const INTAKE_SUCCESS: &str = "Thank you! We received your request and will contact you shortly.";

/// Shown when the form is in the error state without a message to display
pub const INTAKE_ERROR_FALLBACK: &str = "We couldn’t send your request. Please call us instead.";

/// Icon drawn above a service card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ServiceIcon {
    Heart,
    Users,
    ShieldCheck,
    Droplets,
}

/// One card in the services grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceCard {
    pub icon: ServiceIcon,
    pub title: &'static str,
    pub description: &'static str,
    /// Small print under the description
    pub note: Option<&'static str>,
}

/// Services grid, worded for the agency's licensing.
///
/// `skilled_clinical` only changes the supportive-care card and the dialysis
/// card description; everything else is identical.
pub fn services(skilled_clinical: bool) -> [ServiceCard; 4] {
    let (support_title, support_description) = if skilled_clinical {
        ("Skilled Support", "Support that may include clinician-directed services based on your care plan.")
    } else {
        (
            "Supportive Care",
            "Medication reminders, mobility support, and safety supervision (non-medical).",
        )
    };

    let dialysis_description = if skilled_clinical {
        "Support for dialysis routines and specialized needs as outlined in the care plan."
    } else {
        "Dialysis support through scheduling help, transportation coordination, and in-home assistance with daily needs."
    };

    [
        ServiceCard {
            icon: ServiceIcon::Heart,
            title: "Personal Care",
            description: "Assistance with bathing, dressing, grooming, and daily activities.",
            note: None,
        },
        ServiceCard {
            icon: ServiceIcon::Users,
            title: "Companion Care",
            description: "Friendly companionship, meal prep, light housekeeping, and errands.",
            note: None,
        },
        ServiceCard {
            icon: ServiceIcon::ShieldCheck,
            title: support_title,
            description: support_description,
            note: None,
        },
        ServiceCard {
            icon: ServiceIcon::Droplets,
            title: "Dialysis & Specialized Care",
            description: dialysis_description,
            note: Some(
                "*We coordinate with your clinical team; medical treatments are provided only when authorized and licensed.",
            ),
        },
    ]
}
