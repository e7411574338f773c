//! Developer console log-channel contracts and recording test double.

use std::{cell::RefCell, rc::Rc};

/// Developer-visible log boundary with informational and error channels.
///
/// Both channels are fire-and-forget: no return value and no delivery guarantee beyond
/// best-effort console visibility.
pub trait DevConsole {
    /// Emits a human-readable informational line.
    fn info(&self, message: &str);

    /// Emits a human-readable error line.
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op console for silenced compositions and baseline tests.
pub struct NoopDevConsole;

impl DevConsole for NoopDevConsole {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Channel a recorded console entry was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    /// Informational channel.
    Info,
    /// Error channel.
    Error,
}

/// One recorded console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleEntry {
    /// Channel the line was written to.
    pub level: ConsoleLevel,
    /// Verbatim message text.
    pub message: String,
}

#[derive(Debug, Clone, Default)]
/// In-memory console recording entries in write order.
pub struct MemoryDevConsole {
    entries: Rc<RefCell<Vec<ConsoleEntry>>>,
}

impl MemoryDevConsole {
    /// Returns a snapshot of all recorded entries in write order.
    pub fn entries(&self) -> Vec<ConsoleEntry> {
        self.entries.borrow().clone()
    }

    /// Returns the messages written to one channel, in write order.
    pub fn messages(&self, level: ConsoleLevel) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message.clone())
            .collect()
    }
}

impl DevConsole for MemoryDevConsole {
    fn info(&self, message: &str) {
        self.entries.borrow_mut().push(ConsoleEntry {
            level: ConsoleLevel::Info,
            message: message.to_string(),
        });
    }

    fn error(&self, message: &str) {
        self.entries.borrow_mut().push(ConsoleEntry {
            level: ConsoleLevel::Error,
            message: message.to_string(),
        });
    }
}
