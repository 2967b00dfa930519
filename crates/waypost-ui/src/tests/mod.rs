//! Behavioral tests for UI components
//!
//! BDD-style tests using the given-when-then naming convention. Browser
//! rendering tests only build for `wasm32` and run under wasm-pack.

use std::sync::{Arc, Mutex};

use waypost_core::{Error, NavigationRequest, Navigator, Result};


/// Navigator that only remembers what it was asked to do
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    requests: Arc<Mutex<Vec<NavigationRequest>>>,
}

impl RecordingNavigator {
    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, request: &NavigationRequest) -> Result<()> {
        self.requests
            .lock()
            .map_err(|e| Error::navigation_failed(request.target().as_str(), e.to_string()))?
            .push(request.clone());
        Ok(())
    }
}
