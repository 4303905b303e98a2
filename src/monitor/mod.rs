//! The poll loop: fetch → validate → decide → notify → sleep.
//!
//! The loop owns error classification and duplicate-alert suppression. Every
//! recoverable error is caught at the cycle boundary; nothing escapes past one
//! cycle, and only the startup configuration check can terminate the process.

pub mod render;
pub mod tracker;
pub mod validate;

use std::thread;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{ErrorKind, VigilError};
use self::render::render;
use self::tracker::ChangeTracker;
use self::validate::validate;

/// Fetch capability: homework statuses submitted after a lower-bound
/// unix timestamp.
pub trait StatusSource {
    fn fetch(&self, since: i64) -> Result<Value, VigilError>;
}

/// Notify capability: deliver one text message to a chat.
pub trait Messenger {
    fn send(&self, chat_id: &str, text: &str) -> Result<(), VigilError>;
}

/// Outcome of the deciding step for one cycle.
#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    NoChange,
    Changed {
        name: String,
        status: String,
        message: String,
    },
}

pub struct PollLoop<'a> {
    config: &'a Config,
    source: &'a dyn StatusSource,
    messenger: &'a dyn Messenger,
    tracker: ChangeTracker,
    /// Signature (rendered text) of the most recently reported error, used to
    /// suppress repeated identical failure notifications.
    last_error: Option<String>,
    /// Lower bound for the next fetch; advanced by each validated response.
    since: i64,
}

impl<'a> PollLoop<'a> {
    pub fn new(
        config: &'a Config,
        source: &'a dyn StatusSource,
        messenger: &'a dyn Messenger,
    ) -> Self {
        let since = Utc::now().timestamp() - config.poll_interval.as_secs() as i64;
        PollLoop {
            config,
            source,
            messenger,
            tracker: ChangeTracker::new(),
            last_error: None,
            since,
        }
    }

    /// Run forever. The fixed sleep applies whether the prior cycle succeeded,
    /// found nothing new, or failed; an external kill is the only way out.
    pub fn run(mut self) -> ! {
        loop {
            self.run_cycle();
            thread::sleep(self.config.poll_interval);
        }
    }

    /// One full pass, errors handled in place. Sleeping is the caller's job.
    pub fn run_cycle(&mut self) {
        match self.cycle() {
            Ok(()) => {
                self.last_error = None;
            }
            Err(e) => self.handle_error(e),
        }
    }

    fn cycle(&mut self) -> Result<(), VigilError> {
        debug!(since = self.since, "polling review API");
        let response = self.source.fetch(self.since)?;
        let validated = validate(&response)?;
        self.since = validated.current_date;

        match self.decide(validated.homeworks)? {
            Decision::NoChange => Ok(()),
            Decision::Changed {
                name,
                status,
                message,
            } => {
                self.messenger.send(&self.config.chat_id, &message)?;
                info!(homework = %name, status = %status, "notified status change");
                // Recorded only after the send went through, so a failed
                // delivery is retried on the next cycle.
                self.tracker.record(&name, &status);
                Ok(())
            }
        }
    }

    /// Inspect the newest record and consult the tracker. Only index 0 is ever
    /// considered, even when the batch carries several new statuses.
    fn decide(&mut self, homeworks: &[Value]) -> Result<Decision, VigilError> {
        let Some(newest) = homeworks.first() else {
            debug!("empty homework batch, nothing to report");
            return Ok(Decision::NoChange);
        };

        let name = newest
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(VigilError::MissingName)?;
        let status = newest
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or_default();

        if !self.tracker.should_notify(name, status) {
            debug!(homework = %name, status = %status, "no new status");
            return Ok(Decision::NoChange);
        }

        let message = render(newest)?;
        Ok(Decision::Changed {
            name: name.to_string(),
            status: status.to_string(),
            message,
        })
    }

    /// Classify a cycle failure and report it, suppressing a repeat of the
    /// previously reported error. Suppression compares rendered text only,
    /// not the error kind.
    fn handle_error(&mut self, error: VigilError) {
        let kind = error.kind();

        if kind == ErrorKind::Delivery {
            // No second delivery channel: a broken messenger cannot carry
            // its own failure report.
            error!(?kind, "{error}");
            return;
        }

        let signature = error.to_string();
        if self.last_error.as_deref() == Some(signature.as_str()) {
            debug!(?kind, "suppressing repeated failure: {signature}");
            return;
        }

        error!(?kind, "{error}");
        let report = format!("Watcher failure: {signature}");
        if let Err(send_error) = self.messenger.send(&self.config.chat_id, &report) {
            error!("failed to report failure: {send_error}");
        }
        self.last_error = Some(signature);
    }
}
