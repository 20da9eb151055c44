//! Configuration Verification
//!
//! The only place configuration invariants are enforced. A failed check ends
//! the verification pass; it never reaches visitors of the page.

use std::process::ExitCode;

use homecare_core::{ConfigError, SiteConfig};

/// Load and validate, returning the configuration only if every invariant holds
pub fn check(loaded: Result<SiteConfig, ConfigError>) -> Result<SiteConfig, ConfigError> {
    let config = loaded?;
    config.validate()?;
    Ok(config)
}

/// `homecare-server verify`
pub fn run() -> ExitCode {
    match check(SiteConfig::from_env()) {
        Ok(config) => {
            println!("✓ Site configuration is valid");
            if let Ok(rendered) = serde_json::to_string_pretty(&config) {
                println!("{rendered}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("✗ {err}");
            for violation in err.violations() {
                eprintln!("  • {violation}");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homecare_core::ConfigViolation;

    #[test]
    fn test_default_configuration_passes() {
        let config = check(Ok(SiteConfig::default())).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_plain_http_endpoint_fails() {
        let config = SiteConfig {
            relay_endpoint: "http://formspree.io/f/mwvnlrwq".into(),
            ..SiteConfig::default()
        };

        let err = check(Ok(config)).unwrap_err();
        assert_eq!(
            err.violations(),
            &[ConfigViolation::InsecureEndpoint("http://formspree.io/f/mwvnlrwq".into())][..]
        );
    }

    #[test]
    fn test_load_error_is_passed_through() {
        let loaded = Err(ConfigError::InvalidFlag {
            var: "HOMECARE_SKILLED_CLINICAL_SERVICES",
            value: "maybe".into(),
        });
        assert!(matches!(check(loaded), Err(ConfigError::InvalidFlag { .. })));
    }
}
