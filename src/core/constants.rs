// Frame-rate normalization: physics constants are tuned per 16ms tick, and
// every `update(dt)` scales by `dt / REFERENCE_FRAME_MS`.
pub const REFERENCE_FRAME_MS: f64 = 16.0;

// Terminal frame pacing (~60 FPS)
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

// Gap placement margins
pub const GAP_MARGIN_TOP: f64 = 50.0;
pub const GAP_MARGIN_BOTTOM: f64 = 50.0;

// Storage keys
pub const HIGH_SCORE_KEY: &str = "flappy-pigeon-high-score";
pub const MUTED_KEY: &str = "flappy-pigeon-muted";

// Files under ~/.flappy-pigeon/
pub const APP_DIR_NAME: &str = ".flappy-pigeon";
pub const STORE_FILE_NAME: &str = "store.json";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "flappy.log";

// Logging filter env var
pub const LOG_ENV_VAR: &str = "FLAPPY_LOG";
