use crate::config::MemozConfig;
use crate::model::Memo;

pub mod add;
pub mod categories;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod move_memo;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A memo paired with its 1-based board position for display.
#[derive(Debug, Clone)]
pub struct DisplayMemo {
    pub memo: Memo,
    pub position: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_memos: Vec<Memo>,
    pub listed_memos: Vec<DisplayMemo>,
    pub config: Option<MemozConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_memos(mut self, memos: Vec<DisplayMemo>) -> Self {
        self.listed_memos = memos;
        self
    }

    pub fn with_config(mut self, config: MemozConfig) -> Self {
        self.config = Some(config);
        self
    }
}
