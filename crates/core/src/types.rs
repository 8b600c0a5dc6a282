/// All database primary keys are PostgreSQL BIGINT / BIGSERIAL.
pub type DbId = i64;

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;
