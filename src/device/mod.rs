mod signals;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

pub use signals::EnvironmentSignals;

const EDGE_TOKENS: &[&str] = &[" Edge/", " Edg/"];
const VIVALDI_TOKENS: &[&str] = &[" Vivaldi/"];
const OPERA_TOKENS: &[&str] = &[" OPR/"];
const FIREFOX_TOKENS: &[&str] = &[" Firefox/", " Gecko/"];
const SAFARI_TOKENS: &[&str] = &[" Safari/"];
const CHROME_TOKENS: &[&str] = &[" Chrome/"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Chrome,
    Firefox,
    Opera,
    Edge,
    Safari,
    Vivaldi,
    Unknown,
}
impl DeviceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::Opera => "opera",
            Self::Edge => "edge",
            Self::Safari => "safari",
            Self::Vivaldi => "vivaldi",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub const fn is_chrome(self) -> bool {
        matches!(self, Self::Chrome)
    }

    #[must_use]
    pub const fn is_firefox(self) -> bool {
        matches!(self, Self::Firefox)
    }

    #[must_use]
    pub const fn is_opera(self) -> bool {
        matches!(self, Self::Opera)
    }

    #[must_use]
    pub const fn is_edge(self) -> bool {
        matches!(self, Self::Edge)
    }

    #[must_use]
    pub const fn is_safari(self) -> bool {
        matches!(self, Self::Safari)
    }

    #[must_use]
    pub const fn is_vivaldi(self) -> bool {
        matches!(self, Self::Vivaldi)
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct DeviceClassifier;
impl DeviceClassifier {
    /// Work out which browser the extension is running in.
    ///
    /// Chromium based browsers all carry the `Chrome` and `Safari` tokens, so
    /// vendor markers and the more specific tokens are checked first.
    #[must_use]
    pub fn get_device(signals: &EnvironmentSignals) -> DeviceType {
        let device = Self::classify(signals);
        trace!(user_agent = %signals.user_agent, %device, "Classified device");
        device
    }

    #[must_use]
    pub fn get_device_string(signals: &EnvironmentSignals) -> &'static str {
        Self::get_device(signals).as_str()
    }

    fn classify(signals: &EnvironmentSignals) -> DeviceType {
        if signals.has_opera_marker {
            return DeviceType::Opera;
        }

        if signals.user_agent_contains(EDGE_TOKENS) {
            DeviceType::Edge
        } else if signals.user_agent_contains(VIVALDI_TOKENS) {
            DeviceType::Vivaldi
        } else if signals.user_agent_contains(OPERA_TOKENS) {
            DeviceType::Opera
        } else if signals.user_agent_contains(FIREFOX_TOKENS) {
            DeviceType::Firefox
        } else if signals.has_safari_marker
            && signals.user_agent_contains(SAFARI_TOKENS)
            && !signals.user_agent_contains(CHROME_TOKENS)
        {
            DeviceType::Safari
        } else if signals.user_agent_contains(CHROME_TOKENS) {
            DeviceType::Chrome
        } else {
            DeviceType::Unknown
        }
    }
}
