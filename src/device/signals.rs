use serde::{Deserialize, Serialize};

/// Snapshot of what the hosting runtime exposes about itself.
///
/// The markers stand for vendor globals (`window.opr` for Opera,
/// `window.safari` for Safari) that are harder to spoof than the user-agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSignals {
    pub user_agent: String,
    pub has_opera_marker: bool,
    pub has_safari_marker: bool,
}
impl EnvironmentSignals {
    #[must_use]
    pub fn new<T: Into<String>>(user_agent: T) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_opera_marker(mut self) -> Self {
        self.has_opera_marker = true;
        self
    }

    #[must_use]
    pub const fn with_safari_marker(mut self) -> Self {
        self.has_safari_marker = true;
        self
    }

    pub(super) fn user_agent_contains(&self, tokens: &[&str]) -> bool {
        tokens.iter().any(|t| self.user_agent.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_markers() {
        let signals = EnvironmentSignals::new("UA").with_safari_marker();

        assert_eq!(signals.user_agent, "UA");
        assert!(signals.has_safari_marker);
        assert!(!signals.has_opera_marker);
    }

    #[test]
    fn missing_fields_default_when_deserializing() {
        let signals: EnvironmentSignals =
            serde_json::from_str(r#"{"user_agent":"Mozilla/5.0","has_opera_marker":true}"#)
                .unwrap();

        assert_eq!(
            signals,
            EnvironmentSignals::new("Mozilla/5.0").with_opera_marker()
        );
    }

    #[test]
    fn any_token_matches() {
        let signals = EnvironmentSignals::new("Mozilla/5.0 Chrome/120.0 Edg/120.0");

        assert!(signals.user_agent_contains(&[" Edge/", " Edg/"]));
        assert!(!signals.user_agent_contains(&[" Firefox/"]));
        assert!(!signals.user_agent_contains(&[]));
    }
}
