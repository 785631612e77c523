//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a stored submission.
pub fn submission_recorded(record_id: &str, field_count: usize) {
    tracing::info!(
        event = "submission_recorded",
        record_id = %record_id,
        field_count = field_count,
        "submission recorded"
    );
}

/// Log a completed assessment.
pub fn profile_computed(record_id: &str, probability: f64, attributes: usize) {
    tracing::info!(
        event = "profile_computed",
        record_id = %record_id,
        probability = probability,
        attributes = attributes,
        "sensitivity profile computed"
    );
}

/// Log a scoring failure that aborted an assessment.
pub fn scoring_failed(record_id: &str, error: &str) {
    tracing::warn!(
        event = "scoring_failed",
        record_id = %record_id,
        error = %error,
        "unable to compute sensitivity profile"
    );
}

/// Log a rejected form submission.
pub fn submission_rejected(reason: &str) {
    tracing::info!(
        event = "submission_rejected",
        reason = %reason,
        "submission rejected"
    );
}
