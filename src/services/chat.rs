//! Chat widget controller: visibility, transcript, and the send protocol.
//!
//! DESIGN
//! ======
//! The controller owns `ChatWidgetState` and is the only thing that mutates
//! it. A send is split in two: `begin_send` records the visitor's message and
//! returns a `PendingReply` that owns everything the request needs, and
//! `settle` appends the assistant entry once that future resolves. `run`
//! drives both halves from a single task, so several replies can be in flight
//! while transcript mutation stays on one logical thread. Replies are appended
//! in the order they arrive.
//!
//! ERROR HANDLING
//! ==============
//! Any failed request (transport error, non-2xx, unreadable body) becomes the
//! fixed [`APOLOGY_MESSAGE`] entry. The keyword table in `fallback` is
//! deliberately not consulted here.

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use std::future::Future;
use std::pin::Pin;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::net::chat::ChatClient;
use crate::state::chat::{ChatMessage, ChatWidgetState, Visibility};
use crate::util::timestamp::{Clock, iso8601_millis, system_clock};
use crate::view::ChatView;

/// Assistant entry appended when a chat request fails.
pub const APOLOGY_MESSAGE: &str = "I'm sorry, I'm having trouble connecting right now. Please contact our \
     team directly through the contact form or by phone, and we'll be happy to help.";

/// UI actions forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatEvent {
    /// Floating button or header button.
    Open,
    Close,
    Toggle,
    /// Enter in the message box.
    EnterPressed,
    SendClicked,
}

/// Sender half the host uses to deliver [`ChatEvent`]s to a running controller.
#[derive(Clone, Debug)]
pub struct ChatHandle {
    tx: mpsc::UnboundedSender<ChatEvent>,
}

impl ChatHandle {
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ChatEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Deliver an event. Returns `false` once the controller has stopped.
    #[must_use]
    pub fn emit(&self, event: ChatEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    #[must_use]
    pub fn toggle(&self) -> bool {
        self.emit(ChatEvent::Toggle)
    }

    #[must_use]
    pub fn open(&self) -> bool {
        self.emit(ChatEvent::Open)
    }

    #[must_use]
    pub fn close(&self) -> bool {
        self.emit(ChatEvent::Close)
    }

    #[must_use]
    pub fn send(&self) -> bool {
        self.emit(ChatEvent::SendClicked)
    }
}

/// An outstanding chat request. Resolves to the assistant entry to append.
pub struct PendingReply {
    future: Pin<Box<dyn Future<Output = ChatMessage> + Send>>,
}

impl PendingReply {
    fn dispatch(client: ChatClient, message: String, timestamp: String) -> Self {
        let future = async move {
            match client.ask(&message, &timestamp).await {
                Ok(reply) => {
                    debug!(chars = reply.chars().count(), "chat reply received");
                    ChatMessage::assistant(reply)
                }
                Err(e) => {
                    warn!(error = %e, code = e.error_code(), endpoint = client.endpoint(), "chat request failed");
                    ChatMessage::assistant(APOLOGY_MESSAGE)
                }
            }
        };
        Self { future: Box::pin(future) }
    }

    /// Wait for the request to settle.
    pub async fn resolve(self) -> ChatMessage {
        self.future.await
    }
}

pub struct ChatController<V: ChatView> {
    view: V,
    client: ChatClient,
    state: ChatWidgetState,
    clock: Clock,
}

impl<V: ChatView> ChatController<V> {
    #[must_use]
    pub fn new(view: V, client: ChatClient) -> Self {
        Self { view, client, state: ChatWidgetState::default(), clock: system_clock }
    }

    /// Replace the clock used to stamp outgoing messages.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn state(&self) -> &ChatWidgetState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Show the widget, clear the badge, and focus the message box.
    pub fn open(&mut self) {
        if self.state.open() {
            debug!("chat widget opened");
            self.view.set_open(true);
        }
        self.view.set_badge(false);
        self.view.focus_input();
    }

    /// Hide the widget. Closing a closed widget does nothing.
    pub fn close(&mut self) {
        if self.state.close() {
            debug!("chat widget closed");
            self.view.set_open(false);
        }
    }

    pub fn toggle(&mut self) {
        match self.state.visibility() {
            Visibility::Open => self.close(),
            Visibility::Closed => self.open(),
        }
    }

    /// Apply one UI event. Returns the request a send started, if any.
    pub fn handle(&mut self, event: ChatEvent) -> Option<PendingReply> {
        match event {
            ChatEvent::Open => self.open(),
            ChatEvent::Close => self.close(),
            ChatEvent::Toggle => self.toggle(),
            ChatEvent::EnterPressed | ChatEvent::SendClicked => return self.begin_send(),
        }
        None
    }

    /// Record the visitor's message and start the request.
    ///
    /// Returns `None`, and touches nothing, when the input is blank.
    pub fn begin_send(&mut self) -> Option<PendingReply> {
        let raw = self.view.input_text();
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_owned();

        self.append(ChatMessage::user(text.clone()));
        self.view.clear_input();
        self.state.set_typing(true);
        self.view.set_typing(true);

        info!(chars = text.chars().count(), "chat message sent");
        let timestamp = iso8601_millis((self.clock)());
        Some(PendingReply::dispatch(self.client.clone(), text, timestamp))
    }

    /// Hide the typing indicator and append a settled reply.
    pub fn settle(&mut self, reply: ChatMessage) {
        self.state.set_typing(false);
        self.view.set_typing(false);
        self.append(reply);
    }

    /// Send the current input and wait for the reply. Returns `false` when
    /// the input was blank.
    pub async fn send(&mut self) -> bool {
        let Some(pending) = self.begin_send() else {
            return false;
        };
        let reply = pending.resolve().await;
        self.settle(reply);
        true
    }

    /// Process events until every [`ChatHandle`] is dropped, then let the
    /// outstanding replies land and hand the controller back.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<ChatEvent>) -> Self {
        let mut in_flight = FuturesUnordered::new();
        loop {
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else { break };
                    if let Some(pending) = self.handle(event) {
                        in_flight.push(pending.resolve());
                    }
                }
                Some(reply) = in_flight.next(), if !in_flight.is_empty() => {
                    self.settle(reply);
                }
            }
        }
        while let Some(reply) = in_flight.next().await {
            self.settle(reply);
        }
        self
    }

    fn append(&mut self, message: ChatMessage) {
        let message = self.state.push(message);
        self.view.append_message(message);
        self.view.scroll_to_latest();
        if self.state.has_unseen() {
            self.view.set_badge(true);
        }
    }
}
