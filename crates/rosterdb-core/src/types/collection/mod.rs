pub mod record_map;

pub use record_map::RecordMap;
