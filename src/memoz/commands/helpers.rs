use crate::board::MemoBoard;
use crate::commands::{CmdMessage, DisplayMemo};
use crate::error::{MemozError, Result};
use crate::store::MemoSlot;
use uuid::Uuid;

/// Positions are 1-based and refer to the unfiltered board order, so they
/// stay valid for edit/delete/move even while a filtered list is on screen.
pub fn display_memos<S: MemoSlot>(board: &MemoBoard<S>) -> Vec<DisplayMemo> {
    board
        .memos()
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, memo)| DisplayMemo {
            memo,
            position: i + 1,
        })
        .collect()
}

pub fn resolve_position<S: MemoSlot>(board: &MemoBoard<S>, position: usize) -> Result<Uuid> {
    position
        .checked_sub(1)
        .and_then(|i| board.memos().get(i))
        .map(|memo| memo.id)
        .ok_or_else(|| MemozError::Api(format!("No memo at position {}", position)))
}

pub fn unsaved_warning<S: MemoSlot>(board: &MemoBoard<S>) -> Option<CmdMessage> {
    board.has_unsaved_changes().then(|| {
        CmdMessage::warning("Could not write to storage; changes are kept for this session only")
    })
}
