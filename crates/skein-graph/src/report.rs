//! Severity-leveled reporting with observer handlers.
//!
//! The type model never aborts on a bad type; its algorithms answer
//! false, none, or zero, and callers describe what went wrong here.
//! Entries are retained for the reporter's lifetime and fanned out to
//! registered handlers as they arrive; a registration is a scoped guard
//! that unregisters itself when dropped.

use std::cell::{Cell, RefCell};
use std::fmt;

use serde::Serialize;

/// How bad a log entry is. Ordered from least to worst.
///
/// `Critical` marks an unrecoverable condition; whether to abort the
/// compilation on it is the caller's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Message,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Severity::Debug => "debug",
            Severity::Message => "message",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        };
        f.write_str(text)
    }
}

/// One retained log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub severity: Severity,
    pub message: String,
}

type Handler = Box<dyn Fn(&LogEntry)>;

/// Collects log entries and dispatches them to registered handlers.
///
/// Logging takes `&self` so one reporter threads through otherwise
/// read-only passes. Handlers run synchronously, in registration order,
/// for every entry logged while they are registered; a handler must not
/// register or unregister handlers from inside its callback.
#[derive(Default)]
pub struct Reporter {
    entries: RefCell<Vec<LogEntry>>,
    handlers: RefCell<Vec<(u32, Handler)>>,
    next_handler: Cell<u32>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain one entry and fan it out to every registered handler.
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        let entry = LogEntry {
            severity,
            message: message.into(),
        };
        self.entries.borrow_mut().push(entry.clone());
        for (_, handler) in self.handlers.borrow().iter() {
            handler(&entry);
        }
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    pub fn message(&self, message: impl Into<String>) {
        self.log(Severity::Message, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.log(Severity::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    pub fn critical(&self, message: impl Into<String>) {
        self.log(Severity::Critical, message);
    }

    /// Snapshot of every entry logged so far, in order.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Whether anything at `Error` severity or worse was logged.
    pub fn has_errors(&self) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|entry| entry.severity >= Severity::Error)
    }

    /// The worst severity logged so far, if anything was logged at all.
    pub fn worst(&self) -> Option<Severity> {
        self.entries.borrow().iter().map(|entry| entry.severity).max()
    }

    /// Register `handler` for every subsequent entry.
    ///
    /// The handler stays registered until the returned guard is dropped
    /// or explicitly unregistered. Entries logged before registration are
    /// not replayed.
    #[must_use = "dropping the guard unregisters the handler immediately"]
    pub fn add_handler(&self, handler: impl Fn(&LogEntry) + 'static) -> HandlerGuard<'_> {
        let id = self.next_handler.get();
        self.next_handler.set(id + 1);
        self.handlers.borrow_mut().push((id, Box::new(handler)));
        HandlerGuard {
            reporter: self,
            id: Some(id),
        }
    }

    fn remove_handler(&self, id: u32) {
        self.handlers
            .borrow_mut()
            .retain(|(handler_id, _)| *handler_id != id);
    }
}

/// Scoped handler registration; unregisters on drop.
pub struct HandlerGuard<'r> {
    reporter: &'r Reporter,
    id: Option<u32>,
}

impl HandlerGuard<'_> {
    /// Unregister now instead of at end of scope. Idempotent.
    pub fn unregister(&mut self) {
        if let Some(id) = self.id.take() {
            self.reporter.remove_handler(id);
        }
    }

    pub fn is_registered(&self) -> bool {
        self.id.is_some()
    }
}

impl Drop for HandlerGuard<'_> {
    fn drop(&mut self) {
        self.unregister();
    }
}
