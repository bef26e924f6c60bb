//! Host collaborators.
//!
//! The launcher host owns preferences, the selection, and notifications.
//! Each is a trait so the flow runs unchanged under the CLI host and under
//! test stubs.

use std::sync::Arc;

use translator_client::{BackendConnector, GeminiConnector};
use translator_types::{ConfigError, Preferences, SelectionError, Toast};

/// Read-only access to `{geminiApiKey, geminiModel}`.
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> Result<Preferences, ConfigError>;
}

/// Fixed in-memory preferences.
impl PreferenceStore for Preferences {
    fn load(&self) -> Result<Preferences, ConfigError> {
        Ok(self.clone())
    }
}

/// Currently selected text in the user's active context.
pub trait SelectionSource: Send + Sync {
    fn selected_text(&self) -> Result<String, SelectionError>;
}

/// Transient status messages.
pub trait Notifier: Send + Sync {
    fn show_toast(&self, toast: &Toast);
}

/// Everything a translation invocation talks to.
#[derive(Clone)]
pub struct Host {
    pub preferences: Arc<dyn PreferenceStore>,
    pub selection: Arc<dyn SelectionSource>,
    pub notifier: Arc<dyn Notifier>,
    pub connector: Arc<dyn BackendConnector>,
}

impl Host {
    /// Host talking to the public Gemini endpoint.
    pub fn new(
        preferences: Arc<dyn PreferenceStore>,
        selection: Arc<dyn SelectionSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self { preferences, selection, notifier, connector: Arc::new(GeminiConnector::default()) }
    }

    pub fn with_connector(mut self, connector: Arc<dyn BackendConnector>) -> Self {
        self.connector = connector;
        self
    }
}
