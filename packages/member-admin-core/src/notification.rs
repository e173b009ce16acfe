//! Notification surface: one visible message or confirmation at a time.
//!
//! A pending delete travels inside its own `DeleteConfirmation`. Confirming
//! takes it out of the surface, so a second confirm finds nothing.

use std::fmt;

use crate::validation::ValidationErrors;

pub const UPDATE_SUCCESS: &str = "Member updated successfully.";
pub const UPDATE_DENIED: &str = "Access denied: you cannot edit your own account.";
pub const DELETE_SUCCESS: &str = "Member deleted successfully.";
pub const DELETE_DENIED: &str = "Access denied: you cannot delete your own account.";

/// Message category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Validation,
}

/// A dismissible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn validation(errors: &ValidationErrors) -> Self {
        Self {
            kind: NotificationKind::Validation,
            title: "Validation Error".to_string(),
            message: errors.to_string(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Context of one delete confirmation dialog.
#[derive(Debug, PartialEq, Eq)]
pub struct DeleteConfirmation {
    url: String,
    label: String,
}

impl DeleteConfirmation {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn prompt(&self) -> String {
        format!("Are you sure you want to delete {}?", self.label)
    }
}

/// What the surface currently shows.
#[derive(Debug, PartialEq, Eq)]
pub enum Dialog {
    Message(Notification),
    ConfirmDelete(DeleteConfirmation),
}

/// Single-slot modal surface.
#[derive(Debug, Default)]
pub struct NotificationSurface {
    current: Option<Dialog>,
}

impl NotificationSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Dialog> {
        self.current.as_ref()
    }

    /// Shows a message, replacing whatever is open.
    pub fn show(&mut self, notification: Notification) -> Option<Dialog> {
        self.open(Dialog::Message(notification))
    }

    /// Shows a delete confirmation, replacing whatever is open.
    pub fn request_confirmation(&mut self, confirmation: DeleteConfirmation) -> Option<Dialog> {
        self.open(Dialog::ConfirmDelete(confirmation))
    }

    /// Operator accepted: hands out the pending confirmation and closes it.
    ///
    /// Returns `None` when no confirmation is open; a message stays visible.
    pub fn confirm(&mut self) -> Option<DeleteConfirmation> {
        match self.current.take() {
            Some(Dialog::ConfirmDelete(confirmation)) => Some(confirmation),
            other => {
                self.current = other;
                None
            }
        }
    }

    /// Closes the open dialog, abandoning a pending confirmation.
    pub fn dismiss(&mut self) -> Option<Dialog> {
        self.current.take()
    }

    fn open(&mut self, dialog: Dialog) -> Option<Dialog> {
        let previous = self.current.replace(dialog);
        if let Some(Dialog::ConfirmDelete(abandoned)) = &previous {
            tracing::debug!("Pending delete of {} abandoned", abandoned.url());
        }
        previous
    }
}
