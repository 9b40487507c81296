use crate::board::MemoBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MemoSlot;

use super::helpers::{self, resolve_position};

pub fn run<S: MemoSlot>(board: &mut MemoBoard<S>, position: usize) -> Result<CmdResult> {
    let id = resolve_position(board, position)?;
    let mut result = CmdResult::default();

    match board.remove(id)? {
        Some(memo) => {
            result.add_message(CmdMessage::success(format!(
                "Memo deleted ({}): {}",
                position, memo.text
            )));
            if let Some(warning) = helpers::unsaved_warning(board) {
                result.add_message(warning);
            }
            result.affected_memos.push(memo);
        }
        None => {
            result.add_message(CmdMessage::info(format!("No memo at position {}", position)));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::MemorySlot;

    #[test]
    fn removes_the_memo_at_the_given_position() {
        let mut board = MemoBoard::new(MemorySlot::new());
        board.hydrate();
        add::run(&mut board, "first".into(), None).unwrap();
        add::run(&mut board, "second".into(), None).unwrap();

        let result = run(&mut board, 1).unwrap();
        assert_eq!(result.affected_memos[0].text, "second");
        assert_eq!(board.memos().len(), 1);
        assert_eq!(board.memos()[0].text, "first");
    }
}
