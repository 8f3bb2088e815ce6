//! Transient user notifications.
//!
//! At most one notification is visible. Showing a new one replaces the
//! current one; each shown notification gets a [`Ticket`] so that the
//! auto-dismiss timer of a replaced notification cannot clear its successor.

use serde::Serialize;
use std::time::Duration;

use crate::config::{ERROR_DISMISS, NOTICE_DISMISS};

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// How long a notification of this severity stays on screen.
    pub fn dismiss_after(&self) -> Duration {
        match self {
            Severity::Error => ERROR_DISMISS,
            Severity::Success | Severity::Info => NOTICE_DISMISS,
        }
    }

    /// Heading shown above the message.
    pub fn title(&self) -> &'static str {
        match self {
            Severity::Error => "Atenção",
            Severity::Success => "Sucesso",
            Severity::Info => "Informação",
        }
    }

    /// Get emoji prefix for terminal display.
    pub fn emoji(&self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Error => "❌",
            Severity::Info => "ℹ️",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
            Severity::Info => "notification-info",
        }
    }
}

/// A message for the notification surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Error }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Info }
    }
}

/// Identifies one showing of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Single-slot holder for the active notification.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<(Ticket, Notification)>,
    issued: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display `notification`, replacing whatever is shown.
    ///
    /// The returned ticket is what the auto-dismiss timer should hand back
    /// to [`dismiss`](Self::dismiss) after `severity.dismiss_after()`.
    pub fn show(&mut self, notification: Notification) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.current = Some((ticket, notification));
        ticket
    }

    /// Clear the slot if `ticket` is still the one displayed.
    pub fn dismiss(&mut self, ticket: Ticket) -> bool {
        match self.current {
            Some((active, _)) if active == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Clear the slot regardless of ticket (user closed it).
    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(_, n)| n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_timing_by_severity() {
        assert_eq!(Severity::Error.dismiss_after(), Duration::from_secs(10));
        assert_eq!(Severity::Success.dismiss_after(), Duration::from_secs(6));
        assert_eq!(Severity::Info.dismiss_after(), Duration::from_secs(6));
    }

    #[test]
    fn test_replacement_preempts_previous() {
        let mut center = NotificationCenter::new();
        let first = center.show(Notification::info("a.txt ignorado"));
        let second = center.show(Notification::error("Por favor, insira sua Chave API."));

        // the first notification's timer fires late
        assert!(!center.dismiss(first));
        assert_eq!(center.current().map(|n| n.severity), Some(Severity::Error));

        assert!(center.dismiss(second));
        assert!(center.current().is_none());
    }

    #[test]
    fn test_close_clears_slot() {
        let mut center = NotificationCenter::new();
        let ticket = center.show(Notification::success("ok"));
        center.close();
        assert!(center.current().is_none());
        assert!(!center.dismiss(ticket));
    }
}
