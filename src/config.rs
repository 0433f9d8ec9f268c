//! Site Configuration
//!
//! Values baked in at compile time from environment variables.
//!
//! The admin secret ships inside the wasm bundle and is compared in the
//! browser. Edit mode is a cosmetic toggle, not an authorization check.

/// News cards per page
pub const NEWS_PAGE_SIZE: usize = 3;
/// Clicks on the hidden control before the password prompt appears
pub const ACTIVATION_THRESHOLD: u32 = 5;

const DEFAULT_APPLICATION_URL: &str = "https://donutsmp-application.netlify.app/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    /// Secret that unlocks edit mode (`ADMIN_PASS`). `None` never matches.
    pub admin_secret: Option<&'static str>,
    pub page_size: usize,
    pub activation_threshold: u32,
    /// Staff application form (`APPLICATION_URL`)
    pub application_url: &'static str,
    /// `LOG_LEVEL`
    pub log_level: log::LevelFilter,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            admin_secret: option_env!("ADMIN_PASS"),
            page_size: NEWS_PAGE_SIZE,
            activation_threshold: ACTIVATION_THRESHOLD,
            application_url: option_env!("APPLICATION_URL").unwrap_or(DEFAULT_APPLICATION_URL),
            log_level: parse_level(option_env!("LOG_LEVEL")),
        }
    }

    /// Exact, case-sensitive comparison against the configured secret
    pub fn secret_matches(&self, input: &str) -> bool {
        self.admin_secret.is_some_and(|secret| secret == input)
    }
}

fn parse_level(raw: Option<&str>) -> log::LevelFilter {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_secret(secret: Option<&'static str>) -> SiteConfig {
        SiteConfig { admin_secret: secret, ..SiteConfig::from_env() }
    }

    #[test]
    fn test_secret_is_case_sensitive() {
        let config = with_secret(Some("Diamond"));
        assert!(config.secret_matches("Diamond"));
        assert!(!config.secret_matches("diamond"));
        assert!(!config.secret_matches("Diamond "));
    }

    #[test]
    fn test_missing_secret_never_matches() {
        let config = with_secret(None);
        assert!(!config.secret_matches(""));
        assert!(!config.secret_matches("anything"));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), log::LevelFilter::Debug);
        assert_eq!(parse_level(Some("WARN")), log::LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud")), log::LevelFilter::Info);
        assert_eq!(parse_level(None), log::LevelFilter::Info);
    }
}
