use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Relative address of the page that completes the identity-provider
/// handshake and closes itself.
pub const CLOSER_PAGE: &str = "closer.html";

/// Relative address of the login endpoint used by full-navigation mode.
pub const LOGIN_ENDPOINT: &str = "rest/login";

/// Name under which the auxiliary window is opened.
pub const WINDOW_NAME: &str = "session_validation";

/// Features for the auxiliary window: lowered, no titlebar or location bar,
/// closes with its opener.
pub const WINDOW_FEATURES: &str = "alwaysLowered=1,titlebar=0,dependent=1,location=0";

/// How the re-authentication redirect is performed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectMode {
    /// Open an auxiliary window on the closer page and keep the main window
    /// focused (fire-and-forget)
    #[default]
    Popup,
    /// Navigate the current page to the login endpoint, passing the current
    /// address so the user is returned after logging in
    FullNavigation,
}

/// Capability interface over the hosting page.
///
/// The classification logic never touches the host environment directly;
/// hosts bind this trait at the outer edge and tests substitute a recording
/// fake.
pub trait PageNavigator: Send + Sync {
    /// Open a small auxiliary window/tab, defocused so the main window
    /// keeps focus
    fn open_auxiliary_window(&self, url: &str, name: &str, features: &str);

    /// Navigate the current page to the given address
    fn navigate_current(&self, url: &str);

    /// Full address of the page currently being shown
    fn current_uri(&self) -> String;
}

/// Triggers the re-authentication flow against the identity provider.
///
/// Fire-and-forget: neither mode waits for the handshake to complete. In
/// popup mode the auxiliary page is expected, by external convention, to
/// finish the handshake and close itself.
#[derive(Clone)]
pub struct Redirector {
    mode: RedirectMode,
    navigator: Arc<dyn PageNavigator>,
}

impl Redirector {
    /// Create a redirector bound to a navigator
    pub fn new(mode: RedirectMode, navigator: Arc<dyn PageNavigator>) -> Self {
        Self { mode, navigator }
    }

    /// Force a re-up of the federated session
    pub fn forward(&self, base_uri: &str) {
        match self.mode {
            RedirectMode::Popup => {
                let closer_url = format!("{}{}", base_uri, CLOSER_PAGE);
                self.navigator
                    .open_auxiliary_window(&closer_url, WINDOW_NAME, WINDOW_FEATURES);
            }
            RedirectMode::FullNavigation => {
                let current_uri = self.navigator.current_uri();
                let encoded_uri = urlencoding::encode(&current_uri);
                let login_url =
                    format!("{}{}?uri={}", base_uri, LOGIN_ENDPOINT, encoded_uri);
                self.navigator.navigate_current(&login_url);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        opened: Mutex<Vec<(String, String, String)>>,
        navigated: Mutex<Vec<String>>,
        current: String,
    }

    impl RecordingNavigator {
        fn at(current: &str) -> Self {
            Self {
                current: current.to_string(),
                ..Default::default()
            }
        }
    }

    impl PageNavigator for RecordingNavigator {
        fn open_auxiliary_window(&self, url: &str, name: &str, features: &str) {
            self.opened.lock().unwrap().push((
                url.to_string(),
                name.to_string(),
                features.to_string(),
            ));
        }

        fn navigate_current(&self, url: &str) {
            self.navigated.lock().unwrap().push(url.to_string());
        }

        fn current_uri(&self) -> String {
            self.current.clone()
        }
    }

    #[test]
    fn popup_mode_opens_closer_page() {
        let navigator = Arc::new(RecordingNavigator::at("https://app.example.com/page"));
        let redirector = Redirector::new(RedirectMode::Popup, navigator.clone());

        redirector.forward("https://search.example.com/searchui/");

        let opened = navigator.opened.lock().unwrap();
        assert_eq!(opened.len(), 1);
        assert_eq!(
            opened[0].0,
            "https://search.example.com/searchui/closer.html"
        );
        assert_eq!(opened[0].1, WINDOW_NAME);
        assert_eq!(opened[0].2, WINDOW_FEATURES);
        assert!(navigator.navigated.lock().unwrap().is_empty());
    }

    #[test]
    fn full_navigation_mode_encodes_current_uri() {
        let navigator =
            Arc::new(RecordingNavigator::at("https://app.example.com/page?q=a b"));
        let redirector = Redirector::new(RedirectMode::FullNavigation, navigator.clone());

        redirector.forward("https://search.example.com/searchui/");

        let navigated = navigator.navigated.lock().unwrap();
        assert_eq!(navigated.len(), 1);
        assert_eq!(
            navigated[0],
            "https://search.example.com/searchui/rest/login?uri=https%3A%2F%2Fapp.example.com%2Fpage%3Fq%3Da%20b"
        );
        assert!(navigator.opened.lock().unwrap().is_empty());
    }
}
