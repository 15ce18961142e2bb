//! One-shot user notifications.
//!
//! Failures reach the user as a toast-style notice rendered by the
//! presentation layer. Notices are queued data; draining the queue is the
//! "show it once" contract.

use serde::Serialize;

use crate::error::GatewayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

/// A single user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, title: title.into() }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, title: title.into() }
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Warning, title: title.into() }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, title: title.into() }
    }
}

impl From<&GatewayError> for Notice {
    fn from(err: &GatewayError) -> Self {
        match err {
            GatewayError::Api { message, .. } if !message.is_empty() => {
                Notice::error(message.clone())
            }
            _ => Notice::error("Something went wrong. Please try again."),
        }
    }
}

/// FIFO queue of pending notices.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: Vec<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        self.pending.push(notice);
    }

    /// Take all pending notices, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_queue() {
        let mut queue = NoticeQueue::new();
        queue.push(Notice::success("Form submitted successfully"));
        queue.push(Notice::error("Authentication error"));

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn api_error_notice_uses_backend_message() {
        let err = GatewayError::Api { message: "Quota exceeded".into(), errors: vec![] };
        assert_eq!(Notice::from(&err), Notice::error("Quota exceeded"));
    }

    #[test]
    fn transport_error_notice_is_generic() {
        let err = GatewayError::Transport("connection reset".into());
        assert_eq!(Notice::from(&err).kind, NoticeKind::Error);
        assert!(!Notice::from(&err).title.contains("connection reset"));
    }
}
