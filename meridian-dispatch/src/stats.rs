use serde::Serialize;

/// Per-backend call accounting. Mutated under the stats map's entry lock.
#[derive(Debug, Default, Clone)]
pub struct BackendStats {
    pub calls: u64,
    pub successes: u64,
    pub failures: u64,
    pub total_latency_ms: u64,
}

impl BackendStats {
    pub fn record_success(&mut self, latency_ms: u64) {
        self.calls += 1;
        self.successes += 1;
        self.total_latency_ms += latency_ms;
    }

    pub fn record_failure(&mut self, latency_ms: u64) {
        self.calls += 1;
        self.failures += 1;
        self.total_latency_ms += latency_ms;
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            calls: self.calls,
            successes: self.successes,
            failures: self.failures,
            avg_latency_ms: if self.calls == 0 {
                0
            } else {
                self.total_latency_ms / self.calls
            },
        }
    }
}

/// Point-in-time view of one backend's accounting, for the status surface.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub calls: u64,
    pub successes: u64,
    pub failures: u64,
    pub avg_latency_ms: u64,
}
