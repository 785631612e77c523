/// Upper bound of a sensitivity score. The best enumerated value of an
/// attribute always lands here.
pub const SCORE_CEILING: f64 = 10.0;

/// Lower bound of a sensitivity score.
pub const SCORE_FLOOR: f64 = 0.0;

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CANDOR_LOG";

/// Environment variable overriding the record store location.
pub const DB_PATH_ENV_VAR: &str = "CANDOR_DB_PATH";

/// Shown to the user when the sensitivity profile cannot be produced.
pub const PROFILE_UNAVAILABLE_MESSAGE: &str =
    "unable to compute sensitivity profile for this candidate";
