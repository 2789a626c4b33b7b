#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

/// Glyph rendered next to visitor messages.
pub const USER_AVATAR_GLYPH: &str = "👤";

/// Brand image rendered next to assistant messages.
pub const ASSISTANT_AVATAR_SRC: &str = "images/rc_cc_icon.svg";
pub const ASSISTANT_AVATAR_ALT: &str = "Robotic Concrete";

/// Who wrote a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub content: String,
    pub sender: Sender,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { content: content.into(), sender: Sender::User }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { content: content.into(), sender: Sender::Assistant }
    }

    #[must_use]
    pub fn avatar(&self) -> Avatar {
        match self.sender {
            Sender::User => Avatar::Glyph(USER_AVATAR_GLYPH),
            Sender::Assistant => Avatar::Image { src: ASSISTANT_AVATAR_SRC, alt: ASSISTANT_AVATAR_ALT },
        }
    }
}

/// Avatar shown beside a message's content block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Avatar {
    Glyph(&'static str),
    Image { src: &'static str, alt: &'static str },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// State for the floating chat widget.
///
/// The transcript is append-only; entries are never reordered or removed.
#[derive(Clone, Debug, Default)]
pub struct ChatWidgetState {
    visibility: Visibility,
    unseen: bool,
    typing: bool,
    transcript: Vec<ChatMessage>,
}

impl ChatWidgetState {
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Badge flag. Always `false` while the widget is open.
    #[must_use]
    pub fn has_unseen(&self) -> bool {
        self.unseen && !self.is_open()
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Open the widget and clear the badge. Returns `false` if already open.
    pub fn open(&mut self) -> bool {
        self.unseen = false;
        if self.is_open() {
            return false;
        }
        self.visibility = Visibility::Open;
        true
    }

    /// Close the widget. Returns `false` if already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.visibility = Visibility::Closed;
        true
    }

    /// Flip visibility and return the new value.
    pub fn toggle(&mut self) -> Visibility {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
        self.visibility
    }

    pub fn set_typing(&mut self, typing: bool) {
        self.typing = typing;
    }

    /// Append an entry. Assistant entries that land while closed raise the badge.
    pub fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        if message.sender == Sender::Assistant && !self.is_open() {
            self.unseen = true;
        }
        self.transcript.push(message);
        &self.transcript[self.transcript.len() - 1]
    }
}
