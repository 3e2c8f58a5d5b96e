use crate::{error::ConfigError, url::BASE_URL};

/// api.met.no rejects requests without an identifying User-Agent and asks
/// for a contact address in it. There is no contact to ship by default, so
/// callers should supply their own with [`ClientConfig::with_user_agent`].
pub const DEFAULT_USER_AGENT: &str = concat!(
    "yr-forecast/",
    env!("CARGO_PKG_VERSION"),
    " (no contact configured, pass --user-agent)"
);

/// Settings for a single forecast run. Nothing is read from disk or the
/// environment; the binary fills this from its flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint ending in `?`, see [`crate::url::build_request_url_with_base`].
    pub base_url: String,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Replace the User-Agent. Blank strings are refused.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Result<Self, ConfigError> {
        let user_agent = user_agent.into();
        if user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }
        self.user_agent = user_agent;
        Ok(self)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn has_default_user_agent(&self) -> bool {
        self.user_agent == DEFAULT_USER_AGENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_public_endpoint() {
        let cfg = ClientConfig::default();

        assert_eq!(cfg.base_url, BASE_URL);
        assert!(cfg.user_agent().starts_with("yr-forecast/"));
        assert!(cfg.has_default_user_agent());
    }

    #[test]
    fn default_user_agent_asks_for_a_contact() {
        assert!(DEFAULT_USER_AGENT.contains("--user-agent"));
        assert!(!DEFAULT_USER_AGENT.contains("http"));
    }

    #[test]
    fn empty_user_agent_is_rejected() {
        let err = ClientConfig::default().with_user_agent("  ").unwrap_err();
        assert_eq!(err, ConfigError::EmptyUserAgent);
    }

    #[test]
    fn user_agent_can_be_overridden() {
        let cfg = ClientConfig::default()
            .with_user_agent("MyWeatherApp/0.1 https://example.org")
            .expect("non-empty agent must be accepted");

        assert_eq!(cfg.user_agent(), "MyWeatherApp/0.1 https://example.org");
        assert!(!cfg.has_default_user_agent());
    }
}
