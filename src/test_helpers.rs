//! Shared test doubles: a scripted transport and recording views.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::SiteError;
use crate::net::transport::JsonPost;
use crate::net::types::RawResponse;
use crate::state::chat::ChatMessage;
use crate::state::form::{Banner, FormField};
use crate::view::{ChatView, FormView};

// =========================================================================
// MockTransport
// =========================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedPost {
    pub url: String,
    pub bearer: String,
    pub body: serde_json::Value,
}

#[derive(Clone, Debug)]
pub enum MockReply {
    Respond { status: u16, body: String, delay: Duration },
    Fail(String),
}

impl MockReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::Respond { status: 200, body: body.into(), delay: Duration::ZERO }
    }

    pub fn status(status: u16) -> Self {
        Self::Respond { status, body: String::new(), delay: Duration::ZERO }
    }

    pub fn after(self, delay: Duration) -> Self {
        match self {
            Self::Respond { status, body, .. } => Self::Respond { status, body, delay },
            fail @ Self::Fail(_) => fail,
        }
    }
}

type Responder = Box<dyn Fn(&serde_json::Value) -> MockReply + Send + Sync>;

pub struct MockTransport {
    responder: Responder,
    calls: Mutex<Vec<RecordedPost>>,
}

impl MockTransport {
    pub fn with<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&serde_json::Value) -> MockReply + Send + Sync + 'static,
    {
        Arc::new(Self { responder: Box::new(responder), calls: Mutex::new(Vec::new()) })
    }

    pub fn replying(reply: MockReply) -> Arc<Self> {
        Self::with(move |_| reply.clone())
    }

    pub fn failing() -> Arc<Self> {
        Self::replying(MockReply::Fail("connection refused".into()))
    }

    pub fn calls(&self) -> Vec<RecordedPost> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl JsonPost for MockTransport {
    async fn post_json(&self, url: &str, bearer: &str, body: serde_json::Value) -> Result<RawResponse, SiteError> {
        let reply = (self.responder)(&body);
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedPost { url: url.to_owned(), bearer: bearer.to_owned(), body });
        match reply {
            MockReply::Respond { status, body, delay } => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(RawResponse { status, body })
            }
            MockReply::Fail(reason) => Err(SiteError::ApiRequest(reason)),
        }
    }
}

// =========================================================================
// RecordingFormView
// =========================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Submit { enabled: bool, label: String },
    Highlight(Vec<String>),
    Reset,
    ShowBanner(Banner),
    HideBanner,
    ScrollBanner,
}

pub struct RecordingFormView {
    pub fields: Vec<FormField>,
    pub label: String,
    pub enabled: bool,
    pub events: Vec<FormEvent>,
}

impl RecordingFormView {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, label: "Send Message".into(), enabled: true, events: Vec::new() }
    }

    pub fn banners(&self) -> Vec<&Banner> {
        self.events
            .iter()
            .filter_map(|e| match e {
                FormEvent::ShowBanner(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, event: &FormEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }
}

impl FormView for RecordingFormView {
    fn fields(&self) -> Vec<FormField> {
        self.fields.clone()
    }

    fn submit_label(&self) -> String {
        self.label.clone()
    }

    fn set_submit(&mut self, enabled: bool, label: &str) {
        self.enabled = enabled;
        label.clone_into(&mut self.label);
        self.events.push(FormEvent::Submit { enabled, label: label.to_owned() });
    }

    fn highlight_invalid(&mut self, names: &[String]) {
        self.events.push(FormEvent::Highlight(names.to_vec()));
    }

    fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.events.push(FormEvent::Reset);
    }

    fn show_banner(&mut self, banner: &Banner) {
        self.events.push(FormEvent::ShowBanner(banner.clone()));
    }

    fn hide_banner(&mut self) {
        self.events.push(FormEvent::HideBanner);
    }

    fn scroll_banner_into_view(&mut self) {
        self.events.push(FormEvent::ScrollBanner);
    }
}

// =========================================================================
// RecordingChatView
// =========================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatViewEvent {
    ClearInput,
    Focus,
    Open(bool),
    Badge(bool),
    Typing(bool),
    Append(ChatMessage),
    ScrollToLatest,
}

/// Records every call. `clear_input` loads the next `queued` string, which
/// stands in for the visitor typing again right after a send.
#[derive(Default)]
pub struct RecordingChatView {
    pub input: String,
    pub queued: VecDeque<String>,
    pub events: Vec<ChatViewEvent>,
}

impl RecordingChatView {
    pub fn count(&self, event: &ChatViewEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }
}

impl ChatView for RecordingChatView {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input = self.queued.pop_front().unwrap_or_default();
        self.events.push(ChatViewEvent::ClearInput);
    }

    fn focus_input(&mut self) {
        self.events.push(ChatViewEvent::Focus);
    }

    fn set_open(&mut self, open: bool) {
        self.events.push(ChatViewEvent::Open(open));
    }

    fn set_badge(&mut self, visible: bool) {
        self.events.push(ChatViewEvent::Badge(visible));
    }

    fn set_typing(&mut self, visible: bool) {
        self.events.push(ChatViewEvent::Typing(visible));
    }

    fn append_message(&mut self, message: &ChatMessage) {
        self.events.push(ChatViewEvent::Append(message.clone()));
    }

    fn scroll_to_latest(&mut self) {
        self.events.push(ChatViewEvent::ScrollToLatest);
    }
}
