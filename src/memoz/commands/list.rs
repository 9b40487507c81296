use crate::board::MemoBoard;
use crate::commands::CmdResult;
use crate::error::{MemozError, Result};
use crate::model::Category;
use crate::store::MemoSlot;
use std::str::FromStr;

use super::helpers::display_memos;

/// Display-side category filter. `All` mirrors the board's 전체 pseudo-label,
/// which is not a storable category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    One(Category),
}

impl FromStr for CategoryFilter {
    type Err = MemozError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim();
        if needle == "전체" || needle.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(needle).map(CategoryFilter::One)
    }
}

/// Lists the board, optionally narrowed by a case-insensitive text search
/// and a category filter. Filtering is display-only and never touches the
/// stored sequence.
pub fn run<S: MemoSlot>(
    board: &MemoBoard<S>,
    search: Option<&str>,
    filter: CategoryFilter,
) -> Result<CmdResult> {
    let term_lower = search.map(|term| term.to_lowercase());

    let listed: Vec<_> = display_memos(board)
        .into_iter()
        .filter(|dm| match filter {
            CategoryFilter::All => true,
            CategoryFilter::One(category) => dm.memo.category == category,
        })
        .filter(|dm| match &term_lower {
            None => true,
            Some(term) => dm.memo.text.to_lowercase().contains(term),
        })
        .collect();

    Ok(CmdResult::default().with_listed_memos(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::MemorySlot;

    fn seeded_board() -> MemoBoard<MemorySlot> {
        let mut board = MemoBoard::new(MemorySlot::new());
        board.hydrate();
        add::run(&mut board, "Buy milk".into(), Some(Category::Todo)).unwrap();
        add::run(&mut board, "pitch deck joke".into(), Some(Category::Humor)).unwrap();
        add::run(&mut board, "milk the idea".into(), Some(Category::Idea)).unwrap();
        board
    }

    #[test]
    fn search_is_case_insensitive() {
        let board = seeded_board();
        let result = run(&board, Some("MILK"), CategoryFilter::All).unwrap();
        assert_eq!(result.listed_memos.len(), 2);
    }

    #[test]
    fn category_filter_narrows_the_listing() {
        let board = seeded_board();
        let result = run(&board, None, CategoryFilter::One(Category::Humor)).unwrap();
        assert_eq!(result.listed_memos.len(), 1);
        assert_eq!(result.listed_memos[0].memo.text, "pitch deck joke");
    }

    #[test]
    fn filtering_keeps_board_positions_and_store_untouched() {
        let board = seeded_board();
        let result = run(&board, Some("milk"), CategoryFilter::All).unwrap();

        // "milk the idea" is position 1, "Buy milk" is position 3
        let positions: Vec<_> = result.listed_memos.iter().map(|dm| dm.position).collect();
        assert_eq!(positions, [1, 3]);
        assert_eq!(board.memos().len(), 3);
    }

    #[test]
    fn filter_parses_the_all_pseudo_label() {
        assert_eq!(CategoryFilter::from_str("전체").unwrap(), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_str("All").unwrap(), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_str("유머").unwrap(),
            CategoryFilter::One(Category::Humor)
        );
        assert!(CategoryFilter::from_str("nope").is_err());
    }
}
