//! # homecare-core
//!
//! Everything the agency page needs that is not markup: the build-time site
//! configuration, the page copy, and the intake submission flow.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   begin()    ┌──────────────────┐   post()   ┌─────────────┐
//! │ IntakeSession│─────────────▶│ IntakeSubmitter  │───────────▶│  FormRelay  │
//! │ (UI state)   │◀─────────────│ (one request)    │◀───────────│ (Strategy)  │
//! └──────────────┘   settle()   └──────────────────┘ RelayReply └─────────────┘
//! ```
//!
//! The `FormRelay` trait keeps the transport swappable: `homecare-relay`
//! provides the HTTP implementation, tests use in-memory relays.

pub mod config;
pub mod content;
pub mod error;
pub mod intake;

pub use config::{ConfigViolation, SiteConfig};
pub use error::{ConfigError, IntakeError, Result};
pub use intake::{
    FormRelay, IntakeForm, IntakeSession, IntakeSubmitter, RelayReply, SubmissionState,
};
