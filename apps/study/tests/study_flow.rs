//! End-to-end study flows over an on-disk database.

mod common;

use common::{fixtures, TestContext};
use pretty_assertions::assert_eq;
use std::fs;
use vocab_core::types::{AnswerStatus, PageSelection, Theme, WordPair};
use vocab_study::commands::{self, CommandError, PracticeTarget};
use vocab_study::db::{BookmarkRepository, KeyValueStore, BOOKMARKS_KEY};

#[test]
fn test_pagination_over_uploaded_corpus() {
    let mut ctx = TestContext::new(50);
    let path = ctx.dir.path().join("words.csv");
    fs::write(&path, fixtures::corpus_csv(120)).unwrap();

    let summary = commands::upload_file(&mut ctx.state, &path).unwrap();
    assert_eq!(summary.imported, 120);
    assert_eq!(summary.page_count, 3);

    let info = commands::select_set(&mut ctx.state, PageSelection::Page(3));
    assert_eq!(info.size, 20);
    assert_eq!(commands::next_set(&mut ctx.state).label, "Set 1 of 3");
    assert_eq!(commands::prev_set(&mut ctx.state).label, "Set 3 of 3");

    commands::select_set(&mut ctx.state, PageSelection::All);
    assert_eq!(commands::next_set(&mut ctx.state).label, "Set 1 of 3");
    commands::select_set(&mut ctx.state, PageSelection::All);
    assert_eq!(commands::prev_set(&mut ctx.state).label, "Set 3 of 3");
}

#[test]
fn test_rejected_upload_keeps_previous_corpus() {
    let mut ctx = TestContext::new(50);
    let before = ctx.state.store.pairs().to_vec();

    let empty = ctx.dir.path().join("empty.csv");
    fs::write(&empty, "  \n").unwrap();
    assert!(matches!(
        commands::upload_file(&mut ctx.state, &empty),
        Err(CommandError::Upload(_))
    ));

    let missing = ctx.dir.path().join("missing.csv");
    assert!(matches!(
        commands::upload_file(&mut ctx.state, &missing),
        Err(CommandError::Io(_))
    ));
    assert_eq!(ctx.state.store.pairs(), before.as_slice());
}

#[test]
fn test_progress_percentage_and_persistence() {
    let mut ctx = TestContext::new(50);
    commands::load_corpus(&mut ctx.state, &fixtures::corpus_csv(10)).unwrap();

    let answers: Vec<String> = vec!["woord 0".into(), "WOORD 1 ".into(), "woord 2".into()];
    let report =
        commands::submit_practice(&mut ctx.state, PracticeTarget::CurrentSet, &answers).unwrap();
    assert_eq!(report.correct, 3);

    let summary = commands::progress_summary(&ctx.state);
    assert_eq!(summary.percent, 30);

    let mut ctx = ctx.reopen();
    commands::load_corpus(&mut ctx.state, &fixtures::corpus_csv(10)).unwrap();
    let restored = commands::restore_practice(&ctx.state, PracticeTarget::CurrentSet);
    assert_eq!(restored[1].answer, "WOORD 1 ");
    assert_eq!(restored[1].status, AnswerStatus::Correct);
    assert_eq!(restored[3].status, AnswerStatus::Unanswered);
    assert_eq!(commands::progress_summary(&ctx.state).percent, 30);
}

#[test]
fn test_bookmark_roundtrip_survives_restart() {
    let mut ctx = TestContext::new(50);
    let kept = WordPair::new("the dog", "de hond");
    commands::toggle_bookmark(&mut ctx.state, &kept).unwrap();
    let original = ctx.state.repository.get_item(BOOKMARKS_KEY).unwrap();

    let pair = WordPair::new("the cat", "de kat");
    commands::toggle_bookmark(&mut ctx.state, &pair).unwrap();
    commands::toggle_bookmark(&mut ctx.state, &pair).unwrap();
    assert!(!ctx.state.bookmarks.contains(&pair));
    assert_eq!(ctx.state.repository.get_item(BOOKMARKS_KEY).unwrap(), original);

    let ctx = ctx.reopen();
    assert!(ctx.state.bookmarks.contains(&kept));
    assert_eq!(commands::list_bookmarks(&ctx.state), vec![kept]);
}

#[test]
fn test_import_without_bookmarks_is_rejected() {
    let mut ctx = TestContext::new(50);
    let pair = WordPair::new("the dog", "de hond");
    commands::toggle_bookmark(&mut ctx.state, &pair).unwrap();
    commands::save_partial(&mut ctx.state, "the dog", "de ho").unwrap();
    let ledger = ctx.state.ledger.clone();

    let result = commands::import_progress(&mut ctx.state, fixtures::bundle_without_bookmarks());
    assert!(matches!(result, Err(CommandError::Import(_))));

    assert_eq!(ctx.state.ledger, ledger);
    assert!(ctx.state.bookmarks.contains(&pair));
    assert_eq!(
        ctx.state.repository.load_bookmarks().unwrap(),
        vec![pair.bookmark_key()]
    );
}

#[test]
fn test_export_then_import_replaces_state() {
    let mut ctx = TestContext::new(50);
    commands::save_partial(&mut ctx.state, "the dog", "de hond").unwrap();
    commands::toggle_bookmark(&mut ctx.state, &WordPair::new("the dog", "de hond")).unwrap();
    let path = ctx.dir.path().join("progress.json");
    assert_eq!(commands::export_progress(&ctx.state, &path).unwrap(), 1);

    let exported: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(exported["version"], 1);
    assert!(exported["exportedAt"].is_string());

    commands::reset_progress(&mut ctx.state).unwrap();
    commands::clear_bookmarks(&mut ctx.state).unwrap();

    let summary = commands::import_progress_file(&mut ctx.state, &path).unwrap();
    assert_eq!(summary.records, 1);
    assert_eq!(summary.bookmarks, Some(1));
    assert_eq!(ctx.state.ledger.read("the dog").unwrap().answer, "de hond");
    assert_eq!(ctx.state.bookmarks.len(), 1);
}

#[test]
fn test_preferences_survive_restart() {
    let mut ctx = TestContext::new(50);
    commands::set_theme(&mut ctx.state, Theme::Light).unwrap();
    commands::set_shuffle(&mut ctx.state, true).unwrap();
    commands::set_active_tab(&mut ctx.state, "game").unwrap();

    let ctx = ctx.reopen();
    let prefs = commands::preferences(&ctx.state);
    assert_eq!(prefs.theme, Theme::Light);
    assert!(prefs.shuffle);
    assert!(ctx.state.store.shuffle());
    assert_eq!(prefs.active_tab.as_deref(), Some("game"));
}
