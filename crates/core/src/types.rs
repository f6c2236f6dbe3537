/// All database primary keys are SQLite 64-bit INTEGER rowids.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
