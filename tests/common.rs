//! Test utilities for session-fetch integration tests
//!
//! Provides a recording page navigator, a completion-callback capture, and
//! factory helpers shared by the integration scenarios.

use std::sync::{Arc, Mutex};

use session_fetch::{FetchConfig, PageNavigator, RedirectMode};

/// Auxiliary window invocation recorded by the fake navigator
#[derive(Debug, Clone, PartialEq)]
pub struct OpenedWindow {
    pub url: String,
    pub name: String,
    pub features: String,
}

/// Page navigator fake that records every invocation
#[derive(Default)]
pub struct RecordingNavigator {
    pub opened: Mutex<Vec<OpenedWindow>>,
    pub navigated: Mutex<Vec<String>>,
    pub current: String,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn at(current: &str) -> Arc<Self> {
        Arc::new(Self {
            current: current.to_string(),
            ..Self::default()
        })
    }

    /// Total number of redirect invocations, both modes combined
    pub fn redirect_count(&self) -> usize {
        self.opened.lock().unwrap().len() + self.navigated.lock().unwrap().len()
    }
}

impl PageNavigator for RecordingNavigator {
    fn open_auxiliary_window(&self, url: &str, name: &str, features: &str) {
        self.opened.lock().unwrap().push(OpenedWindow {
            url: url.to_string(),
            name: name.to_string(),
            features: features.to_string(),
        });
    }

    fn navigate_current(&self, url: &str) {
        self.navigated.lock().unwrap().push(url.to_string());
    }

    fn current_uri(&self) -> String {
        self.current.clone()
    }
}

/// Captures completion-handler invocations so tests can assert the handler
/// fired exactly once, or never
#[derive(Clone, Default)]
pub struct CallbackCapture {
    calls: Arc<Mutex<Vec<(Option<serde_json::Value>, Option<String>)>>>,
}

impl CallbackCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce a completion handler that records into this capture
    pub fn handler(&self) -> impl FnOnce(Option<serde_json::Value>, Option<String>) {
        let calls = Arc::clone(&self.calls);
        move |response, error| {
            calls.lock().unwrap().push((response, error));
        }
    }

    pub fn invocations(&self) -> Vec<(Option<serde_json::Value>, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_invoked(&self) -> bool {
        !self.calls.lock().unwrap().is_empty()
    }

    /// The single recorded invocation; panics if the handler fired zero or
    /// multiple times
    pub fn single(&self) -> (Option<serde_json::Value>, Option<String>) {
        let calls = self.calls.lock().unwrap();
        assert_eq!(calls.len(), 1, "completion handler should fire exactly once");
        calls[0].clone()
    }
}

/// Config pointing at a mock server, with a short timeout so failure tests
/// stay fast
pub fn config_for(server_uri: &str) -> FetchConfig {
    FetchConfig::builder()
        .base_uri(format!("{}/", server_uri))
        .timeout(5)
        .build()
        .unwrap()
}

/// Same as `config_for` but using full-navigation redirects
pub fn full_navigation_config_for(server_uri: &str) -> FetchConfig {
    FetchConfig::builder()
        .base_uri(format!("{}/", server_uri))
        .timeout(5)
        .redirect_mode(RedirectMode::FullNavigation)
        .build()
        .unwrap()
}
