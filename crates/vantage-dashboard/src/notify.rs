//! User-facing notifications raised by page actions.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

/// Pending notifications, oldest first. Front-ends drain and display them;
/// each one is also logged at debug level.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    queue: Vec<Notice>,
}

impl Notices {
    pub fn push(
        &mut self,
        level: NoticeLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        let notice = Notice {
            level,
            title: title.into(),
            message: message.into(),
        };
        tracing::debug!(
            level = %notice.level,
            title = %notice.title,
            message = %notice.message,
            "notice"
        );
        self.queue.push(notice);
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NoticeLevel::Success, title, message);
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NoticeLevel::Info, title, message);
    }

    pub fn warning(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NoticeLevel::Warning, title, message);
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NoticeLevel::Error, title, message);
    }

    #[must_use]
    pub fn last(&self) -> Option<&Notice> {
        self.queue.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Remove and return everything queued so far.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.queue)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.queue.iter().any(|n| n.level == NoticeLevel::Error)
    }
}
