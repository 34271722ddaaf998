//! Sweeper Service - idle session eviction
//!
//! Abandoned games (started but never ended) would otherwise accumulate
//! in the registry forever. The sweeper drops sessions whose idle time
//! exceeds the configured TTL.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::interval;

use augur::SessionRegistry;

/// Sweeper configuration
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How long a session may stay idle before eviction
    pub ttl: Duration,
    /// Interval between sweeps
    pub interval: Duration,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(1800),
            interval: Duration::from_secs(60),
        }
    }
}

/// Idle session sweeper
pub struct SessionSweeper {
    registry: Arc<SessionRegistry>,
    config: SweeperConfig,
}

impl SessionSweeper {
    /// Creates a new sweeper
    pub fn new(registry: Arc<SessionRegistry>, config: Option<SweeperConfig>) -> Self {
        Self {
            registry,
            config: config.unwrap_or_default(),
        }
    }

    /// Start the sweeper (runs in background)
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    /// Run the sweep loop
    async fn run(self) {
        tracing::info!(
            "Session sweeper started (ttl: {:?}, interval: {:?})",
            self.config.ttl,
            self.config.interval
        );

        let mut ticker = interval(self.config.interval);

        // Skip the first immediate tick
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let evicted = self.registry.evict_idle(self.config.ttl);
            if evicted > 0 {
                tracing::info!(
                    "Evicted {} idle game session(s), {} remaining",
                    evicted,
                    self.registry.len()
                );
            }
        }
    }
}

/// Start the sweeper unless the TTL is zero (zero disables eviction).
pub fn maybe_start_sweeper(
    registry: Arc<SessionRegistry>,
    ttl_secs: u64,
) -> Option<tokio::task::JoinHandle<()>> {
    if ttl_secs == 0 {
        return None;
    }

    let config = SweeperConfig {
        ttl: Duration::from_secs(ttl_secs),
        ..SweeperConfig::default()
    };

    Some(SessionSweeper::new(registry, Some(config)).start())
}
