/// Number of history entries retained, newest first.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Storage key for the persisted history list.
pub const DEFAULT_HISTORY_KEY: &str = "dorkHistory";

/// Name of the per-user config directory under `$HOME`.
pub const USER_DIR_NAME: &str = ".dorkscope";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "dorkscope.toml";

/// Maximum refinement suggestions per synthesis.
pub const MAX_REFINEMENTS: usize = 4;

/// Maximum recommendations per analysis.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Maximum quoted keywords emitted by the fallback.
pub const MAX_FALLBACK_KEYWORDS: usize = 3;

/// Characters of the raw intent kept by the `intitle:` fallback.
pub const FALLBACK_TITLE_CHARS: usize = 30;

/// Sample results shown per simulated result set.
pub const MAX_SAMPLE_RESULTS: usize = 3;

/// Detectability is fixed: search-engine reconnaissance is passive.
pub const DETECTABILITY_SCORE: u8 = 4;

/// Output formats understood by the reporters.
pub const OUTPUT_FORMATS: &[&str] = &["console", "json"];
