/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (release dates, air dates) carry no time component.
pub type Date = chrono::NaiveDate;

/// Identifier assigned by the external catalog (TMDB), distinct from local ids.
pub type ExternalId = i64;
