mod common;

use common::{product, start_record, tracker_for, tracker_with_policy};
use fieldtrack_core::compare::{normalize_link, LinkId};
use fieldtrack_core::{ErasurePolicy, Value};
use proptest::prelude::*;

fn link_ids() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9]{1,6}", 0..8)
}

fn link_of(ids: &[String]) -> Value {
    Value::List(ids.iter().map(|id| product(id, 1, true)).collect())
}

proptest! {
    #[test]
    fn property_unmutated_record_never_changes(number in any::<f64>(), text in ".*", flag in any::<bool>()) {
        let mut record = start_record()
            .with("MyNumber", number)
            .with("MyText", text)
            .with("MyTrueFalse", flag);
        let tracker = tracker_for(&record);
        let before = record.clone();

        prop_assert!(!tracker.changes_were_made(&mut record));
        prop_assert!(!tracker.changes_were_made(&mut record));
        prop_assert_eq!(record.fields().len(), before.fields().len());
    }

    #[test]
    fn property_link_order_and_duplicates_do_not_matter(ids in link_ids(), seed in any::<u64>()) {
        let mut shuffled = ids.clone();
        shuffled.extend(ids.iter().take((seed % 4) as usize).cloned());
        if !shuffled.is_empty() {
            let pivot = (seed as usize) % shuffled.len();
            shuffled.rotate_left(pivot);
        }
        shuffled.reverse();

        let mut record = start_record().with("MyLink", link_of(&ids));
        let tracker = tracker_for(&record);
        record.set("MyLink", link_of(&shuffled));
        prop_assert!(!tracker.changes_were_made(&mut record));
    }

    #[test]
    fn property_normalized_links_are_sorted_and_unique(ids in link_ids()) {
        let normalized = normalize_link(Some(&link_of(&ids)));
        let mut expected: Vec<LinkId> = ids.iter().map(|id| LinkId::Text(id.clone())).collect();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(normalized, expected);
    }

    #[test]
    fn property_number_change_is_detected(a in -1.0e9f64..1.0e9, b in -1.0e9f64..1.0e9) {
        let mut record = start_record().with("MyNumber", a);
        let tracker = tracker_for(&record);
        record.set("MyNumber", b);
        prop_assert_eq!(tracker.changes_were_made(&mut record), a != b);
    }

    #[test]
    fn property_fix_settles_after_one_query(number in -1.0e9f64..1.0e9) {
        let mut record = start_record().with("MyNumber", number);
        let tracker = tracker_with_policy(&record, ErasurePolicy::Fix);
        record.remove("MyNumber");

        prop_assert_eq!(tracker.changes_were_made(&mut record), number != 0.0);
        prop_assert_eq!(record.get("MyNumber"), Some(&Value::Number(0.0)));

        // a tracker built over the fixed record sees a stable state
        let next = tracker_for(&record);
        record.remove("MyNumber");
        prop_assert!(!next.changes_were_made(&mut record));
    }

    #[test]
    fn property_ignore_never_reports_erasures(number in any::<f64>()) {
        let mut record = start_record().with("MyNumber", number);
        let tracker = tracker_with_policy(&record, ErasurePolicy::Ignore);
        record.remove("MyNumber");
        prop_assert!(!tracker.changes_were_made(&mut record));
        prop_assert_eq!(record.get("MyNumber"), None);
    }
}
