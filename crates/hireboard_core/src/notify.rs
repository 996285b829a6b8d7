//! User-facing notices emitted by view services.
//!
//! # Responsibility
//! - Separate simulated side effects (toasts) from query logic.
//! - Let the presentation layer decide how notices are displayed.
//!
//! # Invariants
//! - Notices never feed back into record data.

use log::info;
use serde::Serialize;
use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// One toast-style message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Sink for notices; implemented by the presentation layer.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Writes notice levels to the core log and drops the message text.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        info!(
            "event=notice module=notify status=ok level={} chars={}",
            notice.level.as_str(),
            notice.message.chars().count()
        );
    }
}

/// Buffers notices so a caller can drain and render them later.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns and clears every buffered notice, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        self.notices.take()
    }

    pub fn len(&self) -> usize {
        self.notices.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.borrow().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::{Notice, NoticeLevel, Notifier, RecordingNotifier};

    #[test]
    fn recording_notifier_drains_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notice::info("first"));
        notifier.notify(Notice::success("second"));
        assert_eq!(notifier.len(), 2);

        let drained = notifier.drain();
        assert_eq!(drained[0].message, "first");
        assert_eq!(drained[1].level, NoticeLevel::Success);
        assert!(notifier.is_empty());
    }
}
