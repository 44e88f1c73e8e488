/// CMS document identifiers are opaque strings.
pub type DocumentId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
