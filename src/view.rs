//! View traits the controllers drive.
//!
//! DESIGN
//! ======
//! A host implements these against whatever it renders to (the DOM, a
//! terminal, a test recorder). Controllers only push state changes through
//! them and never read back anything but form values and the chat input.

use crate::state::chat::ChatMessage;
use crate::state::form::{Banner, FormField};

/// Page surface for the contact form.
pub trait FormView {
    /// Current values of every control in the form, in document order.
    fn fields(&self) -> Vec<FormField>;

    /// Text currently on the submit control.
    fn submit_label(&self) -> String;

    /// Enable/disable the submit control and set its label.
    fn set_submit(&mut self, enabled: bool, label: &str);

    /// Mark the named controls as invalid (empty slice clears all marks).
    fn highlight_invalid(&mut self, names: &[String]);

    /// Clear every control back to its initial value.
    fn reset(&mut self);

    fn show_banner(&mut self, banner: &Banner);

    fn hide_banner(&mut self);

    fn scroll_banner_into_view(&mut self);
}

/// Page surface for the floating chat widget.
pub trait ChatView {
    /// Raw contents of the message box.
    fn input_text(&self) -> String;

    fn clear_input(&mut self);

    fn focus_input(&mut self);

    /// Show or hide the chat window.
    fn set_open(&mut self, open: bool);

    /// Show or hide the unseen-message badge on the floating button.
    fn set_badge(&mut self, visible: bool);

    /// Show or hide the typing indicator below the transcript.
    fn set_typing(&mut self, visible: bool);

    /// Render one transcript entry (avatar plus content block) at the end.
    fn append_message(&mut self, message: &ChatMessage);

    fn scroll_to_latest(&mut self);
}
