//! Translation flow state machine.
//!
//! ```text
//!   Loading ──start()──▶ Result(text)
//!      │
//!      └──────────────▶ Error(message)
//! ```
//!
//! Both outcomes are terminal; a new invocation builds a new flow.

use tokio::sync::watch;

use translator_client::{classify_error, generate_text};
use translator_types::{Direction, Toast, TranslateError, ViewState};

use super::host::Host;
use super::prompt::build_prompt;
use super::selection::get_input_text;

pub const TRANSLATION_COMPLETE: &str = "Translation Complete";
pub const TRANSLATION_FAILED: &str = "Translation Failed";

pub struct TranslationFlow {
    direction: Direction,
    host: Host,
    state: watch::Sender<ViewState>,
}

impl TranslationFlow {
    pub fn new(direction: Direction, host: Host) -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        Self { direction, host, state }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Run the invocation once. Calling again after it finished returns the
    /// terminal state without repeating any side effect.
    pub async fn start(&mut self) -> ViewState {
        if self.state.borrow().is_terminal() {
            return self.state();
        }

        match self.translate().await {
            Ok(text) => {
                self.state.send_replace(ViewState::Result(text));
                self.host.notifier.show_toast(&Toast::success(TRANSLATION_COMPLETE));
            }
            Err(err) => {
                tracing::error!("Translation Error ({}): {}", self.direction, err);
                let message = err.to_string();
                self.state.send_replace(ViewState::Error(message.clone()));
                self.host.notifier.show_toast(&Toast::failure(TRANSLATION_FAILED, message));
            }
        }
        self.state()
    }

    async fn translate(&self) -> Result<String, TranslateError> {
        let prefs = self.host.preferences.load().map_err(|e| {
            tracing::warn!("Could not read preferences: {}", e);
            TranslateError::ConfigMissing
        })?;
        let creds = prefs.credentials()?;

        let input = get_input_text(self.host.selection.as_ref())?;

        let profile = self.direction.profile();
        self.host.notifier.show_toast(&Toast::animated(profile.progress_title));

        let prompt = build_prompt(self.direction, &input);

        let backend = self.host.connector.connect(creds.api_key).map_err(classify_error)?;
        generate_text(backend.as_ref(), creds.model, &prompt).await
    }
}
