use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeLevel {
    Success,
    Info,
    Failure,
}

/// A user-visible message about the outcome of an action.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn failure(title: impl Into<String>, error: &dyn std::error::Error) -> Self {
        Self {
            level: NoticeLevel::Failure,
            title: title.into(),
            message: error.to_string(),
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.level == NoticeLevel::Failure
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Info => "note",
            NoticeLevel::Failure => "error",
        };
        write!(f, "{prefix}: {}: {}", self.title, self.message)
    }
}
