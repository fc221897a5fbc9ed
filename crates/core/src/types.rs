/// User primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Role ids are fixed small integers assigned by the seed step.
pub type RoleId = i32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
