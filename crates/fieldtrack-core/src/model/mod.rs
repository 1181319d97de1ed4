pub mod field;
pub mod record;
pub mod value;

pub use field::{DefaultValues, FieldDescriptor, FieldType};
pub use record::Record;
pub use value::Value;
