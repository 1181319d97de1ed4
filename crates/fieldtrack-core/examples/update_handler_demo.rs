//! Update Handler Demonstration
//!
//! This example runs the "save only if something changed" loop an update
//! handler would run, once per erasure policy.
//!
//! Key concepts illustrated:
//! 1. Loading a schema catalog and tracker config from JSON
//! 2. Narrowing the tracked fields
//! 3. Reading a change report and its summary
//! 4. How each erasure policy behaves when saving restores erased fields
#![allow(clippy::unwrap_used, clippy::expect_used)]

use fieldtrack_core::logging_facility::{init, Profile};
use fieldtrack_core::{
    render_change_summary, ChangeTracker, ErasurePolicy, InMemoryCatalog, Record, TrackerConfig,
    TracingSink,
};
use std::convert::Infallible;

const CATALOG: &str = r#"{
    "InvoiceItem": {
        "fields": [
            {"field_id": "Description", "type": "Text"},
            {"field_id": "Quantity", "type": "Numeric"},
            {"field_id": "Paid", "type": "True/False"},
            {"field_id": "Product", "type": "Link"}
        ]
    }
}"#;

fn stored_item() -> Record {
    Record::from_json(
        "InvoiceItem",
        serde_json::json!({
            "_id": "123",
            "Description": "Blue widget",
            "Quantity": 10,
            "Paid": false,
            "Product": [{"_id": "p-1", "Price": 5}]
        }),
    )
    .expect("stored item is a JSON object")
}

// Saving restores erased quantities to the stored value
fn save(record: &mut Record) -> Result<(), Infallible> {
    if !record.contains_key("Quantity") {
        record.set("Quantity", 10);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);
    println!("=== fieldtrack Update Handler Demo ===\n");

    let catalog = InMemoryCatalog::from_json_str(CATALOG)?;

    // ===== Part 1: A single change query =====
    println!("## Part 1: Change Report\n");

    let mut item = stored_item();
    let tracker = ChangeTracker::new(&catalog, &item)?.with_sink(TracingSink);

    item.set("Description", "Red widget");
    item.remove("Paid");
    item.set(
        "Product",
        serde_json::json!({"_id": "p-1", "Price": 7}),
    );

    let report = tracker.detect_changes(&mut item);
    println!("{}", render_change_summary(&report));

    // ===== Part 2: Narrowed tracking =====
    println!("## Part 2: Tracked Fields\n");

    let mut item = stored_item();
    let mut tracker = ChangeTracker::new(&catalog, &item)?;
    tracker.clear_tracked_fields();
    tracker.add_tracked_fields(["Quantity"]);

    item.set("Description", "Ignored edit");
    println!(
        "Untracked edit reported as change: {}",
        tracker.changes_were_made(&mut item)
    );
    item.set("Quantity", 11);
    println!(
        "Tracked edit reported as change: {}\n",
        tracker.changes_were_made(&mut item)
    );

    // ===== Part 3: Save cycles per erasure policy =====
    println!("## Part 3: Save Cycles\n");

    for policy in [ErasurePolicy::Fix, ErasurePolicy::Ignore, ErasurePolicy::None] {
        let config = TrackerConfig::default().with_erased_compare(policy);
        let mut item = stored_item();
        let mut saves = 0;

        while saves < 25 {
            let tracker = ChangeTracker::with_config(&catalog, &item, config)?;
            item.remove("Quantity");
            if !tracker.save_if_changed(&mut item, save)? {
                break;
            }
            saves += 1;
        }

        println!(
            "{:?}: saved {} time(s), Quantity = {}",
            policy,
            saves,
            fieldtrack_core::model::value::render_value(item.get("Quantity"))
        );
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
