use std::env;
use std::time::Duration;

use super::parse_var;
use crate::error::AppError;

/// Pause between a trick's last card and the move to the next trick or round.
pub const DEFAULT_TRICK_REVEAL_DELAY: Duration = Duration::from_millis(3000);

/// Game-engine knobs read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub trick_reveal_delay: Duration,
    /// Base seed for reproducible shuffles; `None` seeds every game from OS entropy.
    pub deal_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trick_reveal_delay: DEFAULT_TRICK_REVEAL_DELAY,
            deal_seed: None,
        }
    }
}

impl EngineConfig {
    /// Read `TRICK_REVEAL_DELAY_MS` and `DEAL_SEED`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let delay_ms: Option<u64> = parse_var(&lookup, "TRICK_REVEAL_DELAY_MS")?;
        let deal_seed: Option<u64> = parse_var(&lookup, "DEAL_SEED")?;
        Ok(Self {
            trick_reveal_delay: delay_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_TRICK_REVEAL_DELAY),
            deal_seed,
        })
    }
}
