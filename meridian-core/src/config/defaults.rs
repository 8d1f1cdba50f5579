//! Named default constants for every configuration surface.

/// Confidence at or above which a single backend is trusted alone.
pub const DEFAULT_ROUTING_THRESHOLD: f64 = 0.7;

/// Per-backend call timeout during any invocation (ms).
pub const DEFAULT_PER_BACKEND_TIMEOUT_MS: u64 = 8_000;

/// Domain used when a confidence cell is missing for the classified domain.
pub const DEFAULT_FALLBACK_DOMAIN: &str = "general";

/// Backend of last resort when no cell resolves at all.
pub const DEFAULT_FALLBACK_MODEL: &str = "general-med";

/// EMA smoothing factor for confidence updates, in (0, 1).
pub const DEFAULT_SMOOTHING: f64 = 0.1;

/// Rating at or above which an entry belongs in the core tier.
pub const DEFAULT_CORE_THRESHOLD: f64 = 0.95;

/// Rating at or above which an entry belongs in the extended tier.
pub const DEFAULT_EXTENDED_THRESHOLD: f64 = 0.80;

/// Per-event field weights for the aggregate rating.
pub const DEFAULT_EXPLICIT_WEIGHT: f64 = 0.6;
pub const DEFAULT_IMPLICIT_WEIGHT: f64 = 0.3;
pub const DEFAULT_EXPERT_WEIGHT: f64 = 0.1;

/// Number of lock shards in the tiered store.
pub const DEFAULT_STORE_SHARDS: usize = 64;

/// Quality floor for serving a core-tier entry straight from cache.
pub const DEFAULT_CACHE_SERVE_THRESHOLD: f64 = 0.9;

/// HTTP bind address for the daemon.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7180";
