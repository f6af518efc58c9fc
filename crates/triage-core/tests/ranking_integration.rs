//! Integration tests for the ranking pipeline.
//!
//! These tests feed JSON payloads through the same path a transport layer
//! would use: parse, rank or suggest, serialize.

use chrono::{Duration, Local, NaiveDate};
use serde_json::json;
use triage_core::{
    parse_task_list, rank, suggest, tasks_from_value, RawTask, Ranker, Strategy, TaskId,
};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[test]
fn test_overdue_outranks_far_future_under_every_strategy() {
    let today = fixed_today();
    for strategy in Strategy::all() {
        let tasks = tasks_from_value(json!([
            {"title": "Future", "due_date": iso(today + Duration::days(12)), "estimated_hours": 2, "importance": 5},
            {"title": "Overdue", "due_date": iso(today - Duration::days(2)), "estimated_hours": 2, "importance": 5}
        ]))
        .unwrap();
        let ranked = Ranker::at(strategy, today).rank(&tasks);
        assert_eq!(ranked[0].title(), "Overdue", "strategy {strategy}");
        assert!(ranked[0].score > ranked[1].score);
    }
}

#[test]
fn test_missing_importance_matches_explicit_five() {
    let today = fixed_today();
    let tasks = tasks_from_value(json!([
        {"title": "Implicit", "due_date": iso(today + Duration::days(1)), "estimated_hours": 2},
        {"title": "Explicit", "due_date": iso(today + Duration::days(1)), "estimated_hours": 2, "importance": 5}
    ]))
    .unwrap();
    let ranked = Ranker::at(Strategy::SmartBalance, today).rank(&tasks);
    assert_eq!(ranked[0].score, ranked[1].score);
    assert_eq!(ranked[0].title(), "Implicit");
    assert!(ranked[0].explanation.contains("Importance 5 × 5"));
}

#[test]
fn test_fastest_wins_quick_over_long() {
    let today = fixed_today();
    let tasks = vec![
        RawTask::new().with_title("Long").with_hours(8.0).with_importance(5),
        RawTask::new().with_title("Quick").with_hours(1.0).with_importance(5),
    ];
    let ranked = Ranker::at(Strategy::FastestWins, today).rank(&tasks);
    assert_eq!(ranked[0].title(), "Quick");
    assert!(ranked[0].score > ranked[1].score);
}

#[test]
fn test_cycle_and_dependents_end_to_end() {
    let payload = r#"[
        {"id": "A", "title": "A", "dependencies": ["B"]},
        {"id": "B", "title": "B", "dependencies": ["C"]},
        {"id": "C", "title": "C", "dependencies": ["A"]},
        {"id": "X", "title": "X", "dependencies": ["Z", "A"]},
        {"id": "Y", "title": "Y", "dependencies": ["Z"]},
        {"id": "Z", "title": "Z"}
    ]"#;
    let tasks = parse_task_list(payload).unwrap();
    let ranked = Ranker::at(Strategy::SmartBalance, fixed_today()).rank(&tasks);
    let find = |id: &str| {
        ranked
            .iter()
            .find(|t| *t.id() == TaskId::from(id))
            .unwrap()
    };

    for id in ["A", "B", "C"] {
        assert!(find(id).in_cycle, "{id} should be in the cycle");
    }
    for id in ["X", "Y", "Z"] {
        assert!(!find(id).in_cycle, "{id} should not be in the cycle");
    }
    assert_eq!(find("Z").dependents_count, 2);
    assert_eq!(find("A").dependents_count, 2);
    // Z: 25 + 30 + 5 + 16, the top task
    assert_eq!(ranked[0].title(), "Z");
    assert_eq!(ranked[0].score, 76.0);
}

#[test]
fn test_dangling_dependencies_are_counted_but_not_traversed() {
    let tasks = parse_task_list(r#"[{"id": 1, "dependencies": [99, 99]}]"#).unwrap();
    let ranked = Ranker::at(Strategy::SmartBalance, fixed_today()).rank(&tasks);
    assert_eq!(ranked.len(), 1);
    assert!(!ranked[0].in_cycle);
    assert!(ranked[0].explanation.contains("2 dependencies → -10"));
}

#[test]
fn test_malformed_fields_degrade_to_defaults() {
    let tasks = parse_task_list(
        r#"[{
            "title": "Messy",
            "due_date": "next tuesday",
            "estimated_hours": "lots",
            "importance": {"level": "high"},
            "dependencies": "1,2,3"
        }]"#,
    )
    .unwrap();
    let ranked = Ranker::at(Strategy::SmartBalance, fixed_today()).rank(&tasks);
    let clean = Ranker::at(Strategy::SmartBalance, fixed_today())
        .rank(&[RawTask::new().with_title("Messy")]);
    assert_eq!(ranked, clean);
    assert!(ranked[0].task.due_date.is_none());
    assert_eq!(ranked[0].task.importance, 5);
    assert_eq!(ranked[0].task.estimated_hours, 1.0);
}

#[test]
fn test_rank_is_deterministic_and_does_not_touch_input() {
    let today = Local::now().date_naive();
    let tasks = tasks_from_value(json!([
        {"id": 1, "title": "a", "due_date": iso(today), "dependencies": [2]},
        {"id": 2, "title": "b", "importance": 8},
        {"id": 3, "title": "c", "estimated_hours": 9, "dependencies": [3]}
    ]))
    .unwrap();
    let snapshot = tasks.clone();

    let first = rank(&tasks, "deadline_driven");
    let second = rank(&tasks, "deadline_driven");
    assert_eq!(first, second);
    assert_eq!(tasks, snapshot);
}

#[test]
fn test_equal_scores_keep_input_order() {
    let tasks = tasks_from_value(json!([
        {"id": "first", "importance": 4, "estimated_hours": 3},
        {"id": "top", "importance": 9},
        {"id": "second", "importance": 4, "estimated_hours": 5}
    ]))
    .unwrap();
    let ranked = Ranker::at(Strategy::SmartBalance, fixed_today()).rank(&tasks);
    let ids: Vec<String> = ranked.iter().map(|t| t.id().to_string()).collect();
    assert_eq!(ids, vec!["top", "first", "second"]);
    assert_eq!(ranked[1].score, ranked[2].score);
}

#[test]
fn test_suggest_on_empty_payload() {
    let tasks = parse_task_list("[]").unwrap();
    let suggestion = suggest(&tasks, "smart_balance", 3);
    assert!(suggestion.suggested.is_empty());
    assert_eq!(suggestion.summary, "No tasks provided.");
}

#[test]
fn test_suggest_serializes_for_transport() {
    let tasks = tasks_from_value(json!([
        {"title": "One", "importance": 9},
        {"title": "Two", "importance": 1}
    ]))
    .unwrap();
    let suggestion = suggest(&tasks, "high_impact", 1);
    let value = serde_json::to_value(&suggestion).unwrap();

    assert_eq!(value["strategy"], json!("high_impact"));
    assert_eq!(value["suggested_tasks"].as_array().unwrap().len(), 1);
    assert_eq!(value["suggested_tasks"][0]["title"], json!("One"));
    assert_eq!(value["suggested_tasks"][0]["id"], json!(0));
    assert_eq!(value["suggested_tasks"][0]["in_cycle"], json!(false));
    assert_eq!(value["suggested_tasks"][0]["priority"], json!("medium"));
    // 9*6 + 25 + 5
    assert_eq!(
        value["summary"],
        json!("1. 'One' (Score: 84.0) – No due date provided → treated as low urgency; Importance 9 × 6 → +54; Very quick task (≤1h) → +25; No dependencies → +5")
    );
}

#[test]
fn test_non_list_payload_is_rejected() {
    assert!(parse_task_list(r#"{"tasks": []}"#).is_err());
    assert!(parse_task_list("null").is_err());
    assert!(parse_task_list("not json").is_err());
}
