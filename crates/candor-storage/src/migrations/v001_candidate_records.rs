//! v001: candidate_records — one row per submission, fields as JSON.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS candidate_records (
    id            TEXT PRIMARY KEY,
    submitted_at  TEXT NOT NULL,
    fields        TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_candidate_records_submitted_at
    ON candidate_records(submitted_at);
";
