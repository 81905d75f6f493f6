//! User-facing notices raised by the salaries screen

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A modal message waiting to be shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    /// Confirmation after a delete, carrying the server message
    pub fn deleted(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Deleted!".to_string(),
            text: message.into(),
        }
    }

    /// Generic failure after a delete
    pub fn delete_failed() -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Oops...".to_string(),
            text: "Something went wrong!".to_string(),
        }
    }

    /// Failure while saving a draft
    pub fn save_failed(detail: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Could not save salary".to_string(),
            text: detail.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
