#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use translator_client::{BackendConnector, ClientError, GenerationBackend};
use translator_core::{Host, Notifier, SelectionSource};
use translator_types::protocol::gemini::{GenerateContentRequest, GenerateContentResponse};
use translator_types::{Preferences, SelectionError, Toast, ToastStyle};

pub struct FixedSelection(pub Result<String, SelectionError>);

impl FixedSelection {
    pub fn text(text: &str) -> Arc<Self> {
        Arc::new(Self(Ok(text.to_string())))
    }

    pub fn none() -> Arc<Self> {
        Arc::new(Self(Err(SelectionError::Unavailable("nothing focused".to_string()))))
    }
}

impl SelectionSource for FixedSelection {
    fn selected_text(&self) -> Result<String, SelectionError> {
        self.0.clone()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().expect("notifier lock").clone()
    }

    pub fn count(&self, style: ToastStyle, title: &str) -> usize {
        self.toasts().iter().filter(|t| t.style == style && t.title == title).count()
    }
}

impl Notifier for RecordingNotifier {
    fn show_toast(&self, toast: &Toast) {
        self.toasts.lock().expect("notifier lock").push(toast.clone());
    }
}

/// What the stub backend answers with.
#[derive(Clone)]
pub enum Reply {
    Json(serde_json::Value),
    ApiError { status: u16, message: String },
}

impl Reply {
    pub fn text(text: &str) -> Self {
        Self::Json(serde_json::json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}, "finishReason": "STOP"}]
        }))
    }
}

pub struct StubBackend {
    reply: Reply,
    requests: Arc<Mutex<Vec<(String, GenerateContentRequest)>>>,
}

#[async_trait]
impl GenerationBackend for StubBackend {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ClientError> {
        self.requests.lock().expect("requests lock").push((model.to_string(), request.clone()));
        match &self.reply {
            Reply::Json(body) => serde_json::from_value(body.clone())
                .map_err(|e| ClientError::InvalidResponse(e.to_string())),
            Reply::ApiError { status, message } => {
                Err(ClientError::Api { status: *status, message: message.clone() })
            }
        }
    }
}

/// Connector handing out [`StubBackend`]s and recording every key and request.
pub struct StubConnector {
    reply: Reply,
    connects: AtomicUsize,
    keys: Mutex<Vec<String>>,
    requests: Arc<Mutex<Vec<(String, GenerateContentRequest)>>>,
}

impl StubConnector {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            connects: AtomicUsize::new(0),
            keys: Mutex::new(Vec::new()),
            requests: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().expect("keys lock").clone()
    }

    pub fn requests(&self) -> Vec<(String, GenerateContentRequest)> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl BackendConnector for StubConnector {
    fn connect(&self, api_key: &str) -> Result<Arc<dyn GenerationBackend>, ClientError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.keys.lock().expect("keys lock").push(api_key.to_string());
        Ok(Arc::new(StubBackend { reply: self.reply.clone(), requests: self.requests.clone() }))
    }
}

pub fn valid_preferences() -> Preferences {
    Preferences::new("test-key", "gemini-2.0-flash")
}

pub struct Fixture {
    pub host: Host,
    pub notifier: Arc<RecordingNotifier>,
    pub connector: Arc<StubConnector>,
}

pub fn fixture(prefs: Preferences, selection: Arc<FixedSelection>, reply: Reply) -> Fixture {
    let notifier = Arc::new(RecordingNotifier::default());
    let connector = StubConnector::new(reply);
    let host = Host::new(Arc::new(prefs), selection, notifier.clone())
        .with_connector(connector.clone());
    Fixture { host, notifier, connector }
}
