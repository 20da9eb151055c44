//! Relay Client

use homecare_core::{IntakeForm, IntakeSubmitter, SiteConfig};
use homecare_relay::FormspreeRelay;

/// Post one intake request to the configured relay
pub async fn submit_intake(config: &SiteConfig, form: &IntakeForm) -> homecare_core::Result<()> {
    IntakeSubmitter::new(FormspreeRelay::new(), config).submit(form).await
}
