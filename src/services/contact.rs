//! Contact form submitter: validate, POST once, report via banner.
//!
//! DESIGN
//! ======
//! One submission per call. While the request is in flight the submit control
//! is disabled and relabelled; a drop guard puts the original label back when
//! the request settles, whatever the outcome.
//!
//! Banners hide themselves `BANNER_DISPLAY` after they were shown. `run` owns
//! that timer: it waits on the next submit event or the banner deadline,
//! whichever comes first. A newer banner moves the deadline. Deadlines use
//! `tokio::time`, so a paused test clock drives them.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures never reach the network. Transport failures and
//! non-2xx statuses are treated alike: logged, then shown as the error banner.
//! Nothing is retried.

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, warn};

use super::validation::{VALIDATION_MESSAGE, validate};
use crate::net::contact::ContactClient;
use crate::state::form::{BANNER_DISPLAY, Banner, FormSubmission};
use crate::util::timestamp::{Clock, iso8601_millis, system_clock};
use crate::view::FormView;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again or contact us directly.";
pub const SENDING_LABEL: &str = "Sending...";

/// How a submit attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blocked locally; no request was made.
    Invalid,
    Sent,
    Failed,
}

/// Sender half the host uses to forward submit events to [`ContactFormSubmitter::run`].
#[derive(Clone, Debug)]
pub struct ContactHandle {
    tx: mpsc::UnboundedSender<()>,
}

impl ContactHandle {
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue one submit. Returns `false` once the submitter has stopped.
    #[must_use]
    pub fn submit(&self) -> bool {
        self.tx.send(()).is_ok()
    }
}

pub struct ContactFormSubmitter<V: FormView> {
    view: V,
    client: ContactClient,
    clock: Clock,
    banner_shown_at: Option<Instant>,
}

impl<V: FormView> ContactFormSubmitter<V> {
    #[must_use]
    pub fn new(view: V, client: ContactClient) -> Self {
        Self { view, client, clock: system_clock, banner_shown_at: None }
    }

    /// Replace the clock used to stamp submissions.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Handle one form submit.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let fields = self.view.fields();
        if let Err(e) = validate(&fields) {
            info!(invalid = ?e.invalid, "contact form blocked by validation");
            self.view.highlight_invalid(&e.invalid);
            self.show_banner(&Banner::error(VALIDATION_MESSAGE));
            return SubmitOutcome::Invalid;
        }
        self.view.highlight_invalid(&[]);

        let submission = FormSubmission::from_fields(&fields, iso8601_millis((self.clock)()));
        let result = {
            let _busy = BusySubmit::engage(&mut self.view);
            self.client.submit(&submission).await
        };

        match result {
            Ok(()) => {
                info!(endpoint = self.client.endpoint(), "contact form delivered");
                self.show_banner(&Banner::success(SUCCESS_MESSAGE));
                self.view.reset();
                SubmitOutcome::Sent
            }
            Err(e) => {
                warn!(error = %e, code = e.error_code(), endpoint = self.client.endpoint(), "contact form submission failed");
                self.show_banner(&Banner::error(FAILURE_MESSAGE));
                SubmitOutcome::Failed
            }
        }
    }

    /// Process submits until every [`ContactHandle`] is dropped, hiding
    /// banners as their display window runs out. A banner still up at that
    /// point is left to expire before the submitter is handed back.
    pub async fn run(mut self, mut submits: mpsc::UnboundedReceiver<()>) -> Self {
        loop {
            let deadline = self.banner_deadline();
            tokio::select! {
                submit = submits.recv() => {
                    if submit.is_none() {
                        break;
                    }
                    self.submit().await;
                }
                () = banner_timeout(deadline) => {
                    self.expire_banner(Instant::now());
                }
            }
        }
        self.hide_banner_when_due().await;
        self
    }

    /// Wait out the current banner, then hide it. Returns `false` when no
    /// banner was up.
    pub async fn hide_banner_when_due(&mut self) -> bool {
        let Some(deadline) = self.banner_deadline() else {
            return false;
        };
        sleep_until(deadline).await;
        self.expire_banner(Instant::now())
    }

    /// When the visible banner is due to hide.
    #[must_use]
    pub fn banner_deadline(&self) -> Option<Instant> {
        self.banner_shown_at.map(|shown_at| shown_at + BANNER_DISPLAY)
    }

    /// Hide the banner once its display window has passed. Returns `true`
    /// when this call hid it.
    pub fn expire_banner(&mut self, now: Instant) -> bool {
        match self.banner_shown_at {
            Some(shown_at) if now.saturating_duration_since(shown_at) >= BANNER_DISPLAY => {
                self.banner_shown_at = None;
                debug!("contact banner hidden");
                self.view.hide_banner();
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn banner_visible(&self) -> bool {
        self.banner_shown_at.is_some()
    }

    fn show_banner(&mut self, banner: &Banner) {
        self.view.show_banner(banner);
        self.view.scroll_banner_into_view();
        self.banner_shown_at = Some(Instant::now());
    }
}

async fn banner_timeout(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Disables the submit control for its lifetime and restores the original
/// label on drop.
struct BusySubmit<'a, V: FormView> {
    view: &'a mut V,
    original_label: String,
}

impl<'a, V: FormView> BusySubmit<'a, V> {
    fn engage(view: &'a mut V) -> Self {
        let original_label = view.submit_label();
        view.set_submit(false, SENDING_LABEL);
        Self { view, original_label }
    }
}

impl<V: FormView> Drop for BusySubmit<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit(true, &self.original_label);
    }
}
