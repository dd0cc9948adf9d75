pub mod collection;
pub mod date;
pub mod id;

pub use collection::RecordMap;
pub use date::Date;
pub use id::RecordId;
