use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn memoz(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("memoz").unwrap();
    cmd.env("MEMOZ_HOME", home);
    cmd
}

#[test]
fn add_then_list_shows_the_memo_across_invocations() {
    let home = tempfile::tempdir().unwrap();

    memoz(home.path())
        .args(["add", "buy milk", "--category", "할일"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Memo added"));

    // a separate process sees the persisted board
    memoz(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("buy milk"))
        .stdout(predicates::str::contains("할일"));

    assert!(home.path().join("memos.json").exists());
}

#[test]
fn edit_rewrites_the_text_in_place() {
    let home = tempfile::tempdir().unwrap();
    memoz(home.path()).args(["add", "buy milk"]).assert().success();

    memoz(home.path())
        .args(["edit", "1", "buy oat milk"])
        .assert()
        .success();

    memoz(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("buy oat milk"));
}

#[test]
fn delete_takes_the_memo_off_the_board() {
    let home = tempfile::tempdir().unwrap();
    memoz(home.path()).args(["add", "keeper"]).assert().success();
    memoz(home.path()).args(["add", "goner"]).assert().success();

    memoz(home.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("goner"));

    memoz(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("goner").not())
        .stdout(predicates::str::contains("keeper"));
}

#[test]
fn move_reorders_the_board() {
    let home = tempfile::tempdir().unwrap();
    for text in ["alpha", "bravo", "charlie"] {
        memoz(home.path()).args(["add", text]).assert().success();
    }

    // board is charlie, bravo, alpha; send charlie to the bottom
    memoz(home.path()).args(["move", "1", "3"]).assert().success();

    memoz(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::is_match("(?s)bravo.*alpha.*charlie").unwrap());
}

#[test]
fn search_and_category_filters_narrow_the_listing() {
    let home = tempfile::tempdir().unwrap();
    memoz(home.path())
        .args(["add", "buy milk", "--category", "todo"])
        .assert()
        .success();
    memoz(home.path())
        .args(["add", "call mom"])
        .assert()
        .success();

    memoz(home.path())
        .args(["list", "--search", "milk"])
        .assert()
        .success()
        .stdout(predicates::str::contains("buy milk"))
        .stdout(predicates::str::contains("call mom").not());

    memoz(home.path())
        .args(["list", "--category", "할일"])
        .assert()
        .success()
        .stdout(predicates::str::contains("buy milk"))
        .stdout(predicates::str::contains("call mom").not());
}

#[test]
fn blank_text_and_unknown_categories_are_rejected() {
    let home = tempfile::tempdir().unwrap();

    memoz(home.path())
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicates::str::contains("cannot be empty"));

    memoz(home.path())
        .args(["add", "note", "--category", "groceries"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown category"));
}

#[test]
fn config_changes_the_default_category() {
    let home = tempfile::tempdir().unwrap();

    memoz(home.path())
        .args(["config", "default-category", "idea"])
        .assert()
        .success()
        .stdout(predicates::str::contains("set to"));

    memoz(home.path()).args(["add", "spark"]).assert().success();

    memoz(home.path())
        .args(["list", "--category", "아이디어"])
        .assert()
        .success()
        .stdout(predicates::str::contains("spark"));
}

#[test]
fn categories_prints_the_fixed_label_set() {
    let home = tempfile::tempdir().unwrap();

    memoz(home.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicates::str::contains("할일"))
        .stdout(predicates::str::contains("etc"));
}
