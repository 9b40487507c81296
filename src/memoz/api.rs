//! # API Facade
//!
//! The single entry point for every memo board operation, regardless of the
//! UI driving it. The facade dispatches to the command layer, normalizes
//! inputs (1-based display positions are resolved to memo ids inside the
//! commands), and returns structured `Result<CmdResult>` values.
//!
//! It deliberately contains no business logic, no I/O, and no presentation
//! concerns; those live in `commands/`, the storage layer, and the CLI
//! respectively.
//!
//! `MemoApi<S: MemoSlot>` is generic over the storage backend:
//! - Production: `MemoApi<FileSlot>`
//! - Testing: `MemoApi<MemorySlot>`

use crate::board::MemoBoard;
use crate::commands;
use crate::error::Result;
use crate::model::{Category, Memo};
use crate::store::MemoSlot;
use std::path::PathBuf;

/// The main API facade for memo board operations.
///
/// Construct it, call [`MemoApi::hydrate`] once, then issue operations.
/// All UI clients should interact through this type.
pub struct MemoApi<S: MemoSlot> {
    board: MemoBoard<S>,
    config_dir: PathBuf,
}

impl<S: MemoSlot> MemoApi<S> {
    pub fn new(slot: S, config_dir: PathBuf) -> Self {
        Self {
            board: MemoBoard::new(slot),
            config_dir,
        }
    }

    /// One-time load of the persistent slot; must run before any mutation.
    pub fn hydrate(&mut self) {
        self.board.hydrate();
    }

    pub fn is_loaded(&self) -> bool {
        self.board.is_loaded()
    }

    /// The current ordered sequence, read-only.
    pub fn memos(&self) -> &[Memo] {
        self.board.memos()
    }

    pub fn add_memo(
        &mut self,
        text: String,
        category: Option<Category>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.board, text, category)
    }

    pub fn update_memo(&mut self, position: usize, text: String) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.board, position, text)
    }

    pub fn delete_memo(&mut self, position: usize) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.board, position)
    }

    pub fn move_memo(&mut self, from: usize, to: usize) -> Result<commands::CmdResult> {
        commands::move_memo::run(&mut self.board, from, to)
    }

    pub fn list_memos(
        &self,
        search: Option<&str>,
        filter: CategoryFilter,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.board, search, filter)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::run()
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::CategoryFilter;
pub use crate::commands::{CmdMessage, CmdResult, DisplayMemo, MessageLevel};
