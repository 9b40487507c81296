use crate::board::MemoBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MemoSlot;

use super::helpers::{self, resolve_position};

/// Moves the memo at `from` to `to` (both 1-based board positions). The
/// terminal counterpart of dragging a card to a new spot.
pub fn run<S: MemoSlot>(board: &mut MemoBoard<S>, from: usize, to: usize) -> Result<CmdResult> {
    resolve_position(board, from)?;
    resolve_position(board, to)?;
    board.move_memo(from - 1, to - 1)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Memo moved from {} to {}",
        from, to
    )));
    if let Some(warning) = helpers::unsaved_warning(board) {
        result.add_message(warning);
    }
    Ok(result)
}
