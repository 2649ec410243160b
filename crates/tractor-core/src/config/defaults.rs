// Single source of truth for all default values.
// Scores are only comparable across submissions when every run uses the
// same values here.

// --- Ingestion ---
pub const DEFAULT_LENGTH_THRESHOLD: f32 = 35.0;

// --- Shuffle ---
pub const DEFAULT_SHUFFLE_SEED: u64 = 2;

// --- Clustering ---
pub const DEFAULT_DISTANCE_THRESHOLD: f32 = 20.0;
pub const DEFAULT_RESAMPLE_POINTS: usize = 12;
pub const MIN_RESAMPLE_POINTS: usize = 2;

// --- Export ---
pub const DEFAULT_SAVE_TRACTS: bool = false;

// --- Scoring ---
/// Version marker stamped on score records rewritten by the reclassifier.
pub const RECLASSIFICATION_ALGO_VERSION: u32 = 5;

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "tractor.toml";
pub const DEFAULT_LOG_FILTER: &str = "tractor=info";
pub const VERBOSE_LOG_FILTER: &str = "tractor=debug";
pub const LOG_ENV_VAR: &str = "TRACTOR_LOG";
