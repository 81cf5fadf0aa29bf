// Adapters layer: concrete implementations for external systems (storage, record sources).

pub mod csv_source;
pub mod json_source;
pub mod local_storage;

pub use csv_source::CsvRecordSource;
pub use json_source::JsonRecordSource;
pub use local_storage::LocalStorage;
