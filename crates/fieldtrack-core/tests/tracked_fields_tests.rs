mod common;

use common::{local_date, start_record, tracker_for, START_NUMBER, START_TEXT};
use fieldtrack_core::{ChangeTracker, Record};

fn text_and_flag_tracker(record: &Record) -> ChangeTracker {
    let mut tracker = tracker_for(record);
    tracker.clear_tracked_fields();
    tracker.add_tracked_fields(["MyText", "MyTrueFalse"]);
    tracker
}

// ===== FILTERING =====

#[test]
fn test_starts_tracking_every_schema_field() {
    let tracker = tracker_for(&start_record());
    assert_eq!(
        tracker.tracked_fields().iter().collect::<Vec<_>>(),
        vec!["MyText", "MyNumber", "MyTrueFalse", "MyDate", "MyLink"]
    );
}

#[test]
fn test_changing_tracked_field() {
    let mut record = start_record();
    let tracker = text_and_flag_tracker(&record);
    record.set("MyText", "Haters gonna hate");
    assert!(tracker.changes_were_made(&mut record));
}

#[test]
fn test_changing_untracked_field() {
    let mut record = start_record();
    let tracker = text_and_flag_tracker(&record);
    record.set("MyNumber", 1002);
    assert!(!tracker.changes_were_made(&mut record));
}

#[test]
fn test_changing_tracked_and_untracked_then_restoring_untracked() {
    let mut record = start_record();
    let tracker = text_and_flag_tracker(&record);
    record.set("MyNumber", 1002);
    record.set("MyText", "Haters gonna hate");
    assert!(tracker.changes_were_made(&mut record));
    record.set("MyNumber", 1001);
    assert!(tracker.changes_were_made(&mut record));
}

#[test]
fn test_changing_tracked_and_untracked_then_restoring_tracked() {
    let mut record = start_record();
    let tracker = text_and_flag_tracker(&record);
    record.set("MyNumber", 1002);
    record.set("MyText", "Haters gonna hate");
    assert!(tracker.changes_were_made(&mut record));
    record.set("MyText", START_TEXT);
    assert!(!tracker.changes_were_made(&mut record));
}

#[test]
fn test_untracked_changes_then_tracked_changes() {
    let mut record = start_record();
    let tracker = text_and_flag_tracker(&record);
    record.set("MyNumber", 1002);
    record.set("MyDate", local_date(2020, 12, 25));
    assert!(!tracker.changes_were_made(&mut record));

    record.set("MyText", "Haters gonna hate");
    record.set("MyTrueFalse", false);
    assert!(tracker.changes_were_made(&mut record));

    record.set("MyText", START_TEXT);
    assert!(tracker.changes_were_made(&mut record));

    record.set("MyTrueFalse", true);
    assert!(!tracker.changes_were_made(&mut record));
}

#[test]
fn test_removing_tracked_field() {
    let mut record = start_record();
    let mut tracker = text_and_flag_tracker(&record);
    record.set("MyText", "Haters gonna hate");
    assert!(tracker.changes_were_made(&mut record));
    tracker.remove_tracked_fields(["MyText"]);
    assert!(!tracker.changes_were_made(&mut record));
}

#[test]
fn test_unknown_ids_are_ignored_on_add() {
    let mut record = start_record();
    let mut tracker = tracker_for(&record);
    tracker.clear_tracked_fields();
    tracker.add_tracked_fields(["NotAField", "_id", "MyNumber", "MyNumber"]);
    assert_eq!(
        tracker.tracked_fields().iter().collect::<Vec<_>>(),
        vec!["MyNumber"]
    );
    record.set("_id", "456");
    assert!(!tracker.changes_were_made(&mut record));
}

#[test]
fn test_removing_untracked_is_noop() {
    let mut tracker = tracker_for(&start_record());
    tracker.remove_tracked_fields(["NotAField"]);
    assert_eq!(tracker.tracked_fields().len(), 5);
}

#[test]
fn test_cleared_set_reports_nothing() {
    let mut record = start_record();
    let mut tracker = tracker_for(&record);
    tracker.clear_tracked_fields();
    record.set("MyText", "x");
    record.remove("MyNumber");
    assert!(!tracker.changes_were_made(&mut record));
    // untracked erasures are not fixed either
    assert_eq!(record.get("MyNumber"), None);
}

// ===== HELPERS THAT DECLARE WHAT THEY TOUCH =====

fn update_my_number(tracker: &mut ChangeTracker, record: &mut Record, n: f64) {
    let current = record.get("MyNumber").and_then(|v| v.as_number()).unwrap_or(0.0);
    record.set("MyNumber", current + n);
    tracker.add_tracked_fields(["MyNumber"]);
}

fn update_my_text(tracker: &mut ChangeTracker, record: &mut Record, n: usize) {
    let current = record
        .get("MyText")
        .and_then(|v| v.as_text())
        .unwrap_or_default()
        .to_string();
    record.set("MyText", format!("{}{}", current, "!".repeat(n)));
    tracker.add_tracked_fields(["MyText"]);
}

#[test]
fn test_each_helper_declares_its_fields() {
    let mut record = start_record();
    let mut tracker = tracker_for(&record);
    tracker.clear_tracked_fields();

    update_my_number(&mut tracker, &mut record, 0.0);
    assert!(!tracker.changes_were_made(&mut record));
    update_my_number(&mut tracker, &mut record, 10.0);
    assert!(tracker.changes_were_made(&mut record));
    update_my_number(&mut tracker, &mut record, -10.0);
    assert!(!tracker.changes_were_made(&mut record));
    assert_eq!(record.get("MyNumber").and_then(|v| v.as_number()), Some(START_NUMBER));
}

#[test]
fn test_late_tracking_picks_up_earlier_changes() {
    let mut record = start_record();
    let mut tracker = tracker_for(&record);
    tracker.clear_tracked_fields();

    update_my_number(&mut tracker, &mut record, 0.0);
    update_my_number(&mut tracker, &mut record, 10.0);
    update_my_number(&mut tracker, &mut record, -10.0);
    assert!(!tracker.changes_were_made(&mut record));

    record.set("MyText", "Haters gonna hate!");
    assert!(!tracker.changes_were_made(&mut record));

    update_my_text(&mut tracker, &mut record, 0);
    assert!(tracker.changes_were_made(&mut record));

    tracker.clear_tracked_fields();
    assert!(!tracker.changes_were_made(&mut record));
}
