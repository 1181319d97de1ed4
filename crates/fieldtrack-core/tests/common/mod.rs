use chrono::{FixedOffset, TimeZone};
use fieldtrack_core::{
    ChangeTracker, ErasurePolicy, FieldDescriptor, FieldType, InMemoryCatalog, Record,
    TrackerConfig, Value,
};
use serde_json::json;

#[allow(dead_code)]
pub const SCHEMA_ID: &str = "InvoiceItem";
#[allow(dead_code)]
pub const START_TEXT: &str = "Life is a mistery";
#[allow(dead_code)]
pub const START_NUMBER: f64 = 1000.0;

/// Catalog with one schema covering every modeled field type
#[allow(dead_code)]
pub fn invoice_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new().with_schema(
        SCHEMA_ID,
        vec![
            FieldDescriptor::new("MyText", FieldType::Text),
            FieldDescriptor::new("MyNumber", FieldType::Numeric),
            FieldDescriptor::new("MyTrueFalse", FieldType::TrueFalse),
            FieldDescriptor::new("MyDate", FieldType::Date),
            FieldDescriptor::new("MyLink", FieldType::Link),
        ],
    )
}

/// Date in a fixed +01:00 offset, like a locally-constructed timestamp
#[allow(dead_code)]
pub fn local_date(year: i32, month: u32, day: u32) -> Value {
    let offset = FixedOffset::east_opt(3600).unwrap();
    Value::date(offset.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap())
}

#[allow(dead_code)]
pub fn product(id: &str, price: i64, available: bool) -> Value {
    Value::from(json!({
        "_id": id,
        "Price": price,
        "Available": available,
        "schemaId": "Product"
    }))
}

#[allow(dead_code)]
pub fn product1() -> Value {
    product("111", 100, true)
}

#[allow(dead_code)]
pub fn product2() -> Value {
    product("222", 200, true)
}

#[allow(dead_code)]
pub fn product3() -> Value {
    product("333", 300, false)
}

#[allow(dead_code)]
pub fn links(items: Vec<Value>) -> Value {
    Value::List(items)
}

/// Fresh copy of the starting invoice item
#[allow(dead_code)]
pub fn start_record() -> Record {
    Record::new(SCHEMA_ID)
        .with("_id", "123")
        .with("MyText", START_TEXT)
        .with("MyNumber", START_NUMBER)
        .with("MyTrueFalse", true)
        .with("MyDate", local_date(2020, 11, 11))
        .with("MyLink", links(vec![product1()]))
}

#[allow(dead_code)]
pub fn tracker_for(record: &Record) -> ChangeTracker {
    ChangeTracker::new(&invoice_catalog(), record).unwrap()
}

#[allow(dead_code)]
pub fn tracker_with_policy(record: &Record, policy: ErasurePolicy) -> ChangeTracker {
    ChangeTracker::with_config(
        &invoice_catalog(),
        record,
        TrackerConfig::default().with_erased_compare(policy),
    )
    .unwrap()
}
