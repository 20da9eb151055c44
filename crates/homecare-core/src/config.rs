//! Site Configuration
//!
//! The handful of values that make this page belong to one agency. They are
//! fixed at build time (`option_env!`) for the WASM bundle and read from the
//! process environment by the server's verification pass.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::error::ConfigError;

pub const BUSINESS_NAME_VAR: &str = "HOMECARE_BUSINESS_NAME";
pub const PHONE_TEL_VAR: &str = "HOMECARE_PHONE_TEL";
pub const DISPLAY_PHONE_VAR: &str = "HOMECARE_DISPLAY_PHONE";
pub const INTAKE_EMAIL_VAR: &str = "HOMECARE_INTAKE_EMAIL";
pub const RELAY_ENDPOINT_VAR: &str = "HOMECARE_RELAY_ENDPOINT";
pub const SKILLED_CLINICAL_VAR: &str = "HOMECARE_SKILLED_CLINICAL_SERVICES";

static PHONE_TEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+1[0-9]{10}$").expect("dialable phone pattern"));
static DISPLAY_PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\([0-9]{3}\) [0-9]{3}-[0-9]{4}$").expect("display phone pattern"));
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));

/// Immutable per-agency configuration passed into the page root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Name shown in the hero, footer and intake subject line
    pub business_name: String,

    /// Dialable number in international format (`+1##########`)
    pub phone_tel: String,

    /// Human-readable number (`(###) ###-####`)
    pub display_phone: String,

    /// Address intake requests are routed to by the relay
    pub intake_email: String,

    /// Form relay endpoint (`https://formspree.io/f/<id>`)
    pub relay_endpoint: String,

    /// Set only when the agency is licensed for skilled clinical services.
    /// When false the page uses non-medical wording.
    pub skilled_clinical_services: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            business_name: "Deddeh & Tyler Homecare".into(),
            phone_tel: "+12536914318".into(),
            display_phone: "(253) 691-4318".into(),
            intake_email: "deddeh@deddehtylerhomecare.com".into(),
            relay_endpoint: "https://formspree.io/f/mwvnlrwq".into(),
            skilled_clinical_services: false,
        }
    }
}

impl SiteConfig {
    /// Configuration baked in when the bundle was compiled.
    ///
    /// A baked-in flag that is not a boolean falls back to its default;
    /// `homecare-server verify` reports that case.
    pub fn from_build_env() -> Self {
        Self::from_lookup_lenient(build_env)
    }

    /// Configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset variables keep their
    /// default value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let skilled_clinical_services = match lookup(SKILLED_CLINICAL_VAR) {
            Some(raw) => parse_flag(SKILLED_CLINICAL_VAR, &raw)?,
            None => Self::default().skilled_clinical_services,
        };

        Ok(Self::assemble(&lookup, skilled_clinical_services))
    }

    /// Like [`SiteConfig::from_lookup`], but a malformed flag only resets
    /// the flag; every other override is kept.
    pub fn from_lookup_lenient(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_flag = Self::default().skilled_clinical_services;
        let skilled_clinical_services = lookup(SKILLED_CLINICAL_VAR).map_or(default_flag, |raw| {
            parse_flag(SKILLED_CLINICAL_VAR, &raw).unwrap_or_else(|err| {
                tracing::warn!("{}; using `{}`", err, default_flag);
                default_flag
            })
        });

        Self::assemble(&lookup, skilled_clinical_services)
    }

    fn assemble(lookup: &impl Fn(&str) -> Option<String>, skilled_clinical_services: bool) -> Self {
        let defaults = Self::default();

        Self {
            business_name: lookup(BUSINESS_NAME_VAR).unwrap_or(defaults.business_name),
            phone_tel: lookup(PHONE_TEL_VAR).unwrap_or(defaults.phone_tel),
            display_phone: lookup(DISPLAY_PHONE_VAR).unwrap_or(defaults.display_phone),
            intake_email: lookup(INTAKE_EMAIL_VAR).unwrap_or(defaults.intake_email),
            relay_endpoint: lookup(RELAY_ENDPOINT_VAR).unwrap_or(defaults.relay_endpoint),
            skilled_clinical_services,
        }
    }

    /// Check every invariant, collecting all violations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut violations = Vec::new();

        if self.business_name.trim().is_empty() {
            violations.push(ConfigViolation::EmptyBusinessName);
        }
        if !PHONE_TEL_PATTERN.is_match(&self.phone_tel) {
            violations.push(ConfigViolation::MalformedPhoneTel(self.phone_tel.clone()));
        }
        if !DISPLAY_PHONE_PATTERN.is_match(&self.display_phone) {
            violations.push(ConfigViolation::MalformedDisplayPhone(self.display_phone.clone()));
        }
        if !EMAIL_PATTERN.is_match(&self.intake_email) {
            violations.push(ConfigViolation::MalformedEmail(self.intake_email.clone()));
        }
        if !is_https_url(&self.relay_endpoint) {
            violations.push(ConfigViolation::InsecureEndpoint(self.relay_endpoint.clone()));
        }

        if violations.is_empty() { Ok(()) } else { Err(ConfigError::Invalid(violations)) }
    }

    /// `tel:` target for call buttons
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone_tel)
    }

    /// Hidden `_subject` the relay uses for the notification email
    pub fn intake_subject(&self) -> String {
        format!("New Client Intake Request — {}", self.business_name)
    }

    /// Accessible label for call buttons
    pub fn call_label(&self) -> String {
        format!("Call {} at {}", self.business_name, self.display_phone)
    }

    pub fn footer_notice(&self, year: i32) -> String {
        format!("© {year} {}. All rights reserved.", self.business_name)
    }
}

/// A single broken configuration invariant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("business name must not be empty")]
    EmptyBusinessName,

    #[error("dialable phone `{0}` must look like +1##########")]
    MalformedPhoneTel(String),

    #[error("display phone `{0}` must look like (###) ###-####")]
    MalformedDisplayPhone(String),

    #[error("intake email `{0}` must look like local@domain.tld")]
    MalformedEmail(String),

    #[error("relay endpoint `{0}` must be an absolute https URL")]
    InsecureEndpoint(String),
}

fn is_https_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| url.scheme() == "https" && url.host_str().is_some())
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ConfigError::InvalidFlag { var, value: other.to_string() }),
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        BUSINESS_NAME_VAR => option_env!("HOMECARE_BUSINESS_NAME"),
        PHONE_TEL_VAR => option_env!("HOMECARE_PHONE_TEL"),
        DISPLAY_PHONE_VAR => option_env!("HOMECARE_DISPLAY_PHONE"),
        INTAKE_EMAIL_VAR => option_env!("HOMECARE_INTAKE_EMAIL"),
        RELAY_ENDPOINT_VAR => option_env!("HOMECARE_RELAY_ENDPOINT"),
        SKILLED_CLINICAL_VAR => option_env!("HOMECARE_SKILLED_CLINICAL_SERVICES"),
        _ => None,
    };
    value.map(str::to_owned)
}
