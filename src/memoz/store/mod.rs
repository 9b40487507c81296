//! # Storage Layer
//!
//! This module defines the persistence abstraction for memoz. The
//! [`MemoSlot`] trait models the single named storage location that holds
//! the whole serialized memo collection.
//!
//! ## Design Rationale
//!
//! The slot is abstracted behind a trait to:
//! - Enable **testing** with `MemorySlot` (no filesystem needed)
//! - Allow **future backends** without changing board logic
//! - Keep the board **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileSlot`]: production storage, one `memos.json` file in the
//!   data directory, replaced wholesale on every write
//! - [`memory::MemorySlot`]: in-memory slot for fast, isolated tests
//!
//! ## Storage Format
//!
//! The slot holds a JSON array of flat memo objects:
//!
//! ```text
//! [{"id": "...", "text": "...", "createdAt": 1718000000000,
//!   "color": "yellow", "category": "할일"}, ...]
//! ```
//!
//! Array order is display order. There is no version field; no deltas are
//! ever written.

use crate::error::Result;
use crate::model::Memo;

pub mod fs;
pub mod memory;

/// Abstract interface for the persistent memo slot.
///
/// The board is the slot's only reader and only writer; implementations do
/// not need to guard against concurrent access.
pub trait MemoSlot {
    /// Read the whole persisted sequence. An absent slot is an empty
    /// board, not an error.
    fn load(&self) -> Result<Vec<Memo>>;

    /// Replace the slot wholesale with the given sequence.
    fn save(&mut self, memos: &[Memo]) -> Result<()>;
}
