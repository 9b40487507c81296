use memoz::board::MemoBoard;
use memoz::model::{Category, Memo};
use memoz::store::fs::FileSlot;
use memoz::store::MemoSlot;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileSlot) {
    let dir = TempDir::new().unwrap();
    let slot = FileSlot::new(dir.path().to_path_buf());
    (dir, slot)
}

#[test]
fn round_trip_preserves_memos_field_for_field() {
    let (dir, mut slot) = setup();
    let memos = vec![
        Memo::new("첫 번째 메모".to_string(), Category::Idea),
        Memo::new("second".to_string(), Category::Etc),
    ];

    slot.save(&memos).unwrap();

    let reread = FileSlot::new(dir.path().to_path_buf()).load().unwrap();
    assert_eq!(reread, memos);
}

#[test]
fn absent_slot_loads_as_an_empty_board() {
    let (_dir, slot) = setup();
    assert!(slot.load().unwrap().is_empty());
}

#[test]
fn saves_replace_the_slot_wholesale() {
    let (dir, mut slot) = setup();
    let three: Vec<Memo> = ["a", "b", "c"]
        .iter()
        .map(|t| Memo::new(t.to_string(), Category::default()))
        .collect();
    slot.save(&three).unwrap();

    let one = vec![Memo::new("only".to_string(), Category::default())];
    slot.save(&one).unwrap();

    let reread = FileSlot::new(dir.path().to_path_buf()).load().unwrap();
    assert_eq!(reread, one);
}

#[test]
fn hydration_alone_never_writes_the_slot() {
    let (dir, slot) = setup();
    let mut board = MemoBoard::new(slot);
    board.hydrate();

    assert!(board.is_loaded());
    assert!(!dir.path().join("memos.json").exists());
}

#[test]
fn malformed_slot_fails_open_and_recovers_on_the_next_write() {
    let (dir, slot) = setup();
    fs::write(dir.path().join("memos.json"), "{ definitely not an array").unwrap();

    let mut board = MemoBoard::new(slot);
    board.hydrate();
    assert!(board.is_loaded());
    assert!(board.memos().is_empty());

    board.add("fresh start", Category::default()).unwrap();
    let reread = FileSlot::new(dir.path().to_path_buf()).load().unwrap();
    assert_eq!(reread.len(), 1);
    assert_eq!(reread[0].text, "fresh start");
}
