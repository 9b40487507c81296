use crate::board::MemoBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Category;
use crate::store::MemoSlot;

use super::helpers;

pub fn run<S: MemoSlot>(
    board: &mut MemoBoard<S>,
    text: String,
    category: Option<Category>,
) -> Result<CmdResult> {
    let category = category.unwrap_or_default();
    let memo = board.add(&text, category)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Memo added ({}): {}",
        memo.category, memo.text
    )));
    if let Some(warning) = helpers::unsaved_warning(board) {
        result.add_message(warning);
    }
    result.affected_memos.push(memo);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MemozError;
    use crate::store::memory::MemorySlot;

    fn ready_board() -> MemoBoard<MemorySlot> {
        let mut board = MemoBoard::new(MemorySlot::new());
        board.hydrate();
        board
    }

    #[test]
    fn omitted_category_falls_back_to_the_catch_all() {
        let mut board = ready_board();
        let result = run(&mut board, "note to self".into(), None).unwrap();

        assert_eq!(result.affected_memos[0].category, Category::Etc);
        assert_eq!(board.memos()[0].text, "note to self");
    }

    #[test]
    fn explicit_category_is_kept() {
        let mut board = ready_board();
        run(&mut board, "standup at ten".into(), Some(Category::Todo)).unwrap();
        assert_eq!(board.memos()[0].category, Category::Todo);
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut board = ready_board();
        assert!(matches!(
            run(&mut board, "  ".into(), None),
            Err(MemozError::EmptyText)
        ));
        assert!(board.memos().is_empty());
    }
}
