// Single source of truth for all default values.

// --- Classifier ---
pub const DEFAULT_MODEL_PATH: &str = "candor-model.json";

// --- Storage ---
pub const DEFAULT_DB_PATH: &str = "candor.db";
pub const DEFAULT_WAL_MODE: bool = true;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "candor=info";
pub const DEFAULT_JSON_LOGS: bool = false;
