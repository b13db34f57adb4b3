/// Store-assigned integer primary key of a to-do row.
pub type DbId = i64;

/// All storage timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
