//! # homecare-relay
//!
//! Transport for intake requests.
//!
//! ## Relays
//!
//! - **Formspree** (default): form-encoded POST to a `https://formspree.io/f/<id>`
//!   endpoint, answered with JSON because of the `Accept` header.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use homecare_core::{IntakeSubmitter, SiteConfig};
//! use homecare_relay::FormspreeRelay;
//!
//! let submitter = IntakeSubmitter::new(FormspreeRelay::new(), &SiteConfig::default());
//! submitter.submit(&form).await?;
//! ```

pub mod formspree;

pub use formspree::FormspreeRelay;

// Re-export core types for convenience
pub use homecare_core::{FormRelay, IntakeError, RelayReply, Result};
