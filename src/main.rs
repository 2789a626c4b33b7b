//! Terminal preview of the chat widget.
//!
//! Each line typed on stdin is sent as a chat message; `/open`, `/close`,
//! `/toggle` drive the widget and `/quit` (or EOF) exits once pending replies
//! have landed. The transcript goes to stdout, logs to stderr.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use concrete_site::config::SiteConfig;
use concrete_site::error::SiteError;
use concrete_site::net::chat::ChatClient;
use concrete_site::net::transport::HttpTransport;
use concrete_site::services::chat::{ChatController, ChatEvent, ChatHandle};
use concrete_site::state::chat::{Avatar, ChatMessage};
use concrete_site::view::ChatView;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Lines waiting to be sent, oldest first. The controller reads the front as
/// the message box and pops it when it clears the input.
type InputQueue = Arc<Mutex<VecDeque<String>>>;

struct ConsoleChatView {
    input: InputQueue,
}

impl ChatView for ConsoleChatView {
    fn input_text(&self) -> String {
        self.input
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .front()
            .cloned()
            .unwrap_or_default()
    }

    fn clear_input(&mut self) {
        self.input
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
    }

    fn focus_input(&mut self) {}

    fn set_open(&mut self, open: bool) {
        println!("{}", if open { "[chat open]" } else { "[chat closed]" });
    }

    fn set_badge(&mut self, visible: bool) {
        if visible {
            println!("[new message]");
        }
    }

    fn set_typing(&mut self, visible: bool) {
        if visible {
            println!("  ...");
        }
    }

    fn append_message(&mut self, message: &ChatMessage) {
        let avatar = match message.avatar() {
            Avatar::Glyph(glyph) => glyph,
            Avatar::Image { alt, .. } => alt,
        };
        println!("{avatar}: {}", message.content);
    }

    fn scroll_to_latest(&mut self) {}
}

async fn read_commands(handle: ChatHandle, input: InputQueue) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed");
                break;
            }
        };
        let event = match line.trim() {
            "" => continue,
            "/quit" => break,
            "/open" => ChatEvent::Open,
            "/close" => ChatEvent::Close,
            "/toggle" => ChatEvent::Toggle,
            _ => {
                input
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push_back(line);
                ChatEvent::EnterPressed
            }
        };
        if !handle.emit(event) {
            break;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), SiteError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = SiteConfig::load()?;
    let transport = Arc::new(HttpTransport::new()?);
    let client = ChatClient::from_config(transport, &config);
    tracing::info!(endpoint = client.endpoint(), "chat preview ready");

    let input: InputQueue = Arc::new(Mutex::new(VecDeque::new()));
    let view = ConsoleChatView { input: Arc::clone(&input) };
    let controller = ChatController::new(view, client);
    let (handle, events) = ChatHandle::channel();
    if !handle.open() {
        tracing::warn!("chat controller stopped before the widget opened");
    }

    let (controller, ()) = tokio::join!(controller.run(events), read_commands(handle, input));
    tracing::info!(entries = controller.state().transcript().len(), "chat preview finished");
    Ok(())
}
