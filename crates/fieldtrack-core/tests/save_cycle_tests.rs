//! Update-handler loops: each iteration builds a tracker over the stored
//! record, erases a field, and saves only if the tracker reports a change.
//! Saving restores erased numbers to their stored value, so the policy
//! decides whether the loop settles or runs until the cap.

mod common;

use common::{start_record, tracker_with_policy, START_NUMBER};
use fieldtrack_core::{ErasurePolicy, Record, Value};
use std::convert::Infallible;

const END_OF_TIMES: usize = 1000;

fn save(record: &mut Record) -> Result<(), Infallible> {
    if !record.contains_key("MyNumber") {
        record.set("MyNumber", START_NUMBER);
    }
    Ok(())
}

fn run_cycle(policy: ErasurePolicy, mut update: impl FnMut(&mut Record)) -> (usize, Record) {
    let mut record = start_record();
    let mut times_saved = 0;

    while times_saved < END_OF_TIMES {
        let tracker = tracker_with_policy(&record, policy);
        update(&mut record);
        match tracker.save_if_changed(&mut record, save) {
            Ok(true) => times_saved += 1,
            Ok(false) => break,
            Err(never) => match never {},
        }
    }

    (times_saved, record)
}

#[test]
fn test_fix_settles_after_one_save() {
    let (times_saved, record) = run_cycle(ErasurePolicy::Fix, |r| {
        r.remove("MyNumber");
    });
    assert_eq!(times_saved, 1);
    assert_eq!(record.get("MyNumber"), Some(&Value::Number(0.0)));
}

#[test]
fn test_ignore_never_saves() {
    let (times_saved, record) = run_cycle(ErasurePolicy::Ignore, |r| {
        r.remove("MyNumber");
    });
    assert_eq!(times_saved, 0);
    assert_eq!(record.get("MyNumber"), None);
}

#[test]
fn test_none_saves_until_the_cap() {
    let (times_saved, record) = run_cycle(ErasurePolicy::None, |r| {
        r.remove("MyNumber");
    });
    assert_eq!(times_saved, END_OF_TIMES);
    assert_eq!(record.get("MyNumber"), Some(&Value::Number(START_NUMBER)));
}

#[test]
fn test_none_with_value_copied_from_missing_related_record() {
    let related = Record::new("Related");
    let (times_saved, record) = run_cycle(ErasurePolicy::None, |r| {
        match related.get("MyNumber") {
            Some(value) => {
                r.set("MyNumber", value.clone());
            }
            None => {
                r.remove("MyNumber");
            }
        }
    });
    assert_eq!(times_saved, END_OF_TIMES);
    assert_eq!(record.get("MyNumber"), Some(&Value::Number(START_NUMBER)));
}
