use ai_core::{Blackboard, SampleStatus, Status, TelemetryConfig};

fn blackboard(tick_interval: f64, retention_window: f64) -> Blackboard {
    Blackboard::with_telemetry(TelemetryConfig {
        tick_interval,
        retention_window,
    })
}

fn history(bb: &Blackboard, name: &str) -> Vec<(f64, SampleStatus)> {
    bb.node_execution(name)
        .map(|r| {
            r.execution_history
                .iter()
                .map(|s| (s.time, s.status))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn first_record_creates_entry_with_latest_fields() {
    let mut bb = blackboard(1.0, 10.0);
    bb.record_node_execution("eat", Status::Running, 2.0, 3, "chewing");

    let record = bb.node_execution_data().get("eat").unwrap();
    assert_eq!(record.last_executed, 2.0);
    assert_eq!(record.status, Status::Running);
    assert_eq!(record.depth, 3);
    assert_eq!(record.debug_info, "chewing");
    assert_eq!(history(&bb, "eat"), vec![(2.0, SampleStatus::Running)]);
}

#[test]
fn later_record_overwrites_latest_fields() {
    let mut bb = blackboard(1.0, 10.0);
    bb.record_node_execution("eat", Status::Running, 1.0, 2, "chewing");
    bb.record_node_execution("eat", Status::Success, 2.0, 4, "");

    let record = bb.node_execution("eat").unwrap();
    assert_eq!(record.status, Status::Success);
    assert_eq!(record.last_executed, 2.0);
    assert_eq!(record.depth, 4);
    assert_eq!(record.debug_info, "");
}

#[test]
fn consecutive_ticks_do_not_insert_filler() {
    let mut bb = blackboard(1.0, 10.0);
    bb.record_node_execution("n", Status::Success, 1.0, 0, "");
    bb.record_node_execution("n", Status::Failure, 2.0, 0, "");

    assert_eq!(
        history(&bb, "n"),
        vec![(1.0, SampleStatus::Success), (2.0, SampleStatus::Failure)]
    );
}

#[test]
fn gap_larger_than_tick_interval_inserts_exactly_one_filler() {
    let mut bb = blackboard(1.0, 100.0);
    bb.record_node_execution("n", Status::Success, 1.0, 0, "");
    bb.record_node_execution("n", Status::Success, 5.0, 0, "");

    assert_eq!(
        history(&bb, "n"),
        vec![
            (1.0, SampleStatus::Success),
            (2.0, SampleStatus::NotEvaluated),
            (5.0, SampleStatus::Success),
        ]
    );
}

#[test]
fn history_is_pruned_to_retention_window() {
    let mut bb = blackboard(1.0, 3.0);
    for t in 0..10 {
        bb.record_node_execution("n", Status::Running, t as f64, 0, "");
    }

    let samples = history(&bb, "n");
    assert!(samples.iter().all(|(time, _)| *time >= 9.0 - 3.0));
    assert_eq!(samples.first().map(|s| s.0), Some(6.0));
    assert_eq!(samples.last().map(|s| s.0), Some(9.0));
}

#[test]
fn filler_older_than_window_is_pruned_immediately() {
    let mut bb = blackboard(1.0, 2.0);
    bb.record_node_execution("n", Status::Success, 0.0, 0, "");
    bb.record_node_execution("n", Status::Failure, 10.0, 0, "");

    assert_eq!(history(&bb, "n"), vec![(10.0, SampleStatus::Failure)]);
}

#[test]
fn nodes_are_tracked_independently() {
    let mut bb = blackboard(1.0, 10.0);
    bb.record_node_execution("a", Status::Success, 1.0, 1, "");
    bb.record_node_execution("b", Status::Failure, 1.0, 2, "");

    let names: Vec<&str> = bb.node_execution_data().keys().map(|k| k.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}
