use crate::board::MemoBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MemoSlot;

use super::helpers::{self, resolve_position};

pub fn run<S: MemoSlot>(
    board: &mut MemoBoard<S>,
    position: usize,
    text: String,
) -> Result<CmdResult> {
    let id = resolve_position(board, position)?;
    let mut result = CmdResult::default();

    match board.update(id, &text)? {
        Some(memo) => {
            result.add_message(CmdMessage::success(format!(
                "Memo updated ({}): {}",
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
    use crate::error::MemozError;
    use crate::model::Category;
    use crate::store::memory::MemorySlot;

    fn ready_board() -> MemoBoard<MemorySlot> {
        let mut board = MemoBoard::new(MemorySlot::new());
        board.hydrate();
        board
    }

    #[test]
    fn rewrites_the_memo_at_the_given_position() {
        let mut board = ready_board();
        add::run(&mut board, "buy milk".into(), Some(Category::Todo)).unwrap();
        add::run(&mut board, "call mom".into(), None).unwrap();

        run(&mut board, 2, "buy oat milk".into()).unwrap();
        assert_eq!(board.memos()[1].text, "buy oat milk");
        assert_eq!(board.memos()[1].category, Category::Todo);
        assert_eq!(board.memos()[0].text, "call mom");
    }

    #[test]
    fn out_of_range_position_is_an_api_error() {
        let mut board = ready_board();
        add::run(&mut board, "only".into(), None).unwrap();
        assert!(matches!(
            run(&mut board, 4, "nope".into()),
            Err(MemozError::Api(_))
        ));
    }
}
