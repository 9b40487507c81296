//! The memo board: single source of truth for the memo collection.
//!
//! The board owns the ordered in-memory sequence and is the only component
//! permitted to mutate it. Sequence order IS display order IS persisted
//! order; there is no separate priority field. After every mutation the
//! whole sequence is mirrored to the persistent slot, synchronously.
//!
//! Lifecycle is two-phase: a board starts in `Loading`, [`MemoBoard::hydrate`]
//! moves it to `Ready` exactly once, and mutations (and therefore slot
//! writes) are only permitted in `Ready`. This makes it impossible to
//! clobber persisted data with an empty initial state during the hydration
//! window.

use crate::error::{MemozError, Result};
use crate::model::{Category, Memo};
use crate::store::MemoSlot;
use log::warn;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Loading,
    Ready,
}

pub struct MemoBoard<S: MemoSlot> {
    slot: S,
    memos: Vec<Memo>,
    phase: Phase,
    unsaved: bool,
}

impl<S: MemoSlot> MemoBoard<S> {
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            memos: Vec::new(),
            phase: Phase::Loading,
            unsaved: false,
        }
    }

    /// One-time load of the persistent slot.
    ///
    /// An absent slot leaves the board empty. Unreadable or unparseable
    /// slot contents are logged and discarded; the board starts empty
    /// rather than propagating the failure. The board is `Ready` when this
    /// returns, regardless of outcome. Calling it again is a no-op.
    pub fn hydrate(&mut self) {
        if self.phase == Phase::Ready {
            return;
        }
        match self.slot.load() {
            Ok(memos) => self.memos = memos,
            Err(e) => {
                warn!("discarding unreadable memo data, starting empty: {}", e);
                self.memos = Vec::new();
            }
        }
        self.phase = Phase::Ready;
    }

    pub fn is_loaded(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// The current ordered sequence, newest first.
    pub fn memos(&self) -> &[Memo] {
        &self.memos
    }

    /// True when an in-memory change could not be written to the slot.
    /// The in-memory state stays authoritative for the session either way.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Creates a memo at the head of the sequence (newest first) and
    /// returns it. Text is trimmed and must be non-empty.
    pub fn add(&mut self, text: &str, category: Category) -> Result<Memo> {
        self.ensure_ready()?;
        let text = text.trim();
        if text.is_empty() {
            return Err(MemozError::EmptyText);
        }
        let memo = Memo::new(text.to_string(), category);
        self.memos.insert(0, memo.clone());
        self.persist();
        Ok(memo)
    }

    /// Replaces the text of the memo with the given id, preserving its
    /// position and every other field. Unknown ids are a silent no-op
    /// (`Ok(None)`); re-setting identical text is harmless.
    pub fn update(&mut self, id: Uuid, text: &str) -> Result<Option<Memo>> {
        self.ensure_ready()?;
        let text = text.trim();
        if text.is_empty() {
            return Err(MemozError::EmptyText);
        }
        let Some(memo) = self.memos.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        memo.text = text.to_string();
        let updated = memo.clone();
        self.persist();
        Ok(Some(updated))
    }

    /// Removes the memo with the given id. Unknown ids are a silent no-op
    /// (`Ok(None)`).
    pub fn remove(&mut self, id: Uuid) -> Result<Option<Memo>> {
        self.ensure_ready()?;
        let Some(position) = self.memos.iter().position(|m| m.id == id) else {
            return Ok(None);
        };
        let memo = self.memos.remove(position);
        self.persist();
        Ok(Some(memo))
    }

    /// Moves the memo at index `from` to index `to` (0-based). No memo is
    /// ever added, removed, or duplicated, so any sequence of moves keeps
    /// the collection a permutation of itself. Out-of-range indices are a
    /// no-op (`Ok(false)`).
    pub fn move_memo(&mut self, from: usize, to: usize) -> Result<bool> {
        self.ensure_ready()?;
        if from >= self.memos.len() || to >= self.memos.len() {
            return Ok(false);
        }
        if from != to {
            let memo = self.memos.remove(from);
            self.memos.insert(to, memo);
        }
        self.persist();
        Ok(true)
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.phase == Phase::Ready {
            Ok(())
        } else {
            Err(MemozError::Store(
                "memo board is not hydrated yet".to_string(),
            ))
        }
    }

    // Exactly one wholesale write per mutation. A failed write keeps the
    // in-memory state authoritative and raises the unsaved flag.
    fn persist(&mut self) {
        match self.slot.save(&self.memos) {
            Ok(()) => self.unsaved = false,
            Err(e) => {
                warn!("could not write memos to storage: {}", e);
                self.unsaved = true;
            }
        }
    }
}
