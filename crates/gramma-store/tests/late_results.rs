//! Concurrent checks racing a history reset, in one process and across
//! processes sharing the history file.

use std::sync::Arc;
use std::time::Duration;

use gramma_core::entities::{GrammarResult, Stats};
use gramma_store::{Applied, Dashboard, HistoryFile};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn result(sentence: &str) -> GrammarResult {
    GrammarResult {
        sentence: sentence.to_string(),
        ll1_valid: true,
        dependency_valid: true,
        language_tool_issues: Vec::new(),
        is_grammatically_correct: true,
    }
}

#[tokio::test]
async fn in_flight_check_completing_after_clear_is_stale() {
    let dashboard = Arc::new(Dashboard::new());
    let ticket = dashboard.begin_check().await.unwrap();

    let worker = {
        let dashboard = Arc::clone(&dashboard);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            dashboard.apply(ticket, result("slow")).await.unwrap()
        })
    };

    dashboard.clear().await.unwrap();
    assert_eq!(worker.await.unwrap(), Applied::Stale);
    assert!(dashboard.history().await.is_empty());
}

#[tokio::test]
async fn clear_from_another_process_is_not_undone_by_a_late_result() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    HistoryFile::new(path.clone())
        .save(&[result("old1"), result("old2")])
        .unwrap();

    // Two `gramma` invocations sharing one history file.
    let checking = Dashboard::open(HistoryFile::new(path.clone())).unwrap();
    let ticket = checking.begin_check().await.unwrap();

    let clearing = Dashboard::open(HistoryFile::new(path.clone())).unwrap();
    assert_eq!(clearing.clear().await.unwrap(), 2);

    let applied = checking.apply(ticket, result("late")).await.unwrap();
    assert_eq!(applied, Applied::Stale);
    assert!(HistoryFile::new(path.clone()).load().unwrap().is_empty());
    assert!(checking.history().await.is_empty());
    assert_eq!(checking.stats().await, Stats::default());

    // A check started after the clear lands normally.
    let ticket = checking.begin_check().await.unwrap();
    checking.apply(ticket, result("fresh")).await.unwrap();
    let on_disk: Vec<_> = HistoryFile::new(path)
        .load()
        .unwrap()
        .into_iter()
        .map(|r| r.sentence)
        .collect();
    assert_eq!(on_disk, vec!["fresh"]);
}

#[tokio::test]
async fn concurrent_checks_in_separate_openers_lose_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    let mut handles = Vec::new();
    for i in 0..6 {
        let path = path.clone();
        handles.push(tokio::spawn(async move {
            let dashboard = Dashboard::open(HistoryFile::new(path)).unwrap();
            let ticket = dashboard.begin_check().await.unwrap();
            tokio::time::sleep(Duration::from_millis(5)).await;
            dashboard.apply(ticket, result(&format!("s{i}"))).await.unwrap()
        }));
    }
    for handle in handles {
        assert!(matches!(handle.await.unwrap(), Applied::Appended(_)));
    }
    assert_eq!(HistoryFile::new(path).load().unwrap().len(), 6);
}

#[tokio::test]
async fn concurrent_applies_are_all_recorded() {
    let dashboard = Arc::new(Dashboard::new());
    let mut handles = Vec::new();
    for i in 0..16 {
        let dashboard = Arc::clone(&dashboard);
        handles.push(tokio::spawn(async move {
            let ticket = dashboard.begin_check().await.unwrap();
            dashboard.apply(ticket, result(&format!("s{i}"))).await.unwrap()
        }));
    }
    for handle in handles {
        assert!(matches!(handle.await.unwrap(), Applied::Appended(_)));
    }
    let stats = dashboard.stats().await;
    assert_eq!(stats.total_checks, 16);
    assert_eq!(stats.streak, 16);
}
