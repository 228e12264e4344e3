//! Toast notification payloads.

/// How long a notice stays on screen before auto-dismissing.
pub const AUTO_DISMISS_MS: u32 = 5_000;

/// Severity of a notice, mapped to toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

/// One toast payload: a title, a body line, and a severity.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub kind: NoticeKind,
    /// `None` keeps the notice up until the user dismisses it.
    pub auto_dismiss_ms: Option<u32>,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            auto_dismiss_ms: Some(AUTO_DISMISS_MS),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title, message)
    }

    /// Keep the notice on screen until dismissed.
    pub fn sticky(mut self) -> Self {
        self.auto_dismiss_ms = None;
        self
    }
}
