//! Runtime configuration for the terminal binary.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_TICK_MS, MIN_TICK_MS};

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Gravity interval in milliseconds, at least `MIN_TICK_MS`.
    pub tick_ms: u32,
    /// Seed for the first episode's bag.
    pub seed: u64,
    /// JSONL event log destination, if any.
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            seed: clock_seed(),
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Read `TETRIS_TICK_MS`, `TETRIS_SEED` and `TETRIS_LOG_PATH`.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = lookup("TETRIS_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_TICK_MS)
            .max(MIN_TICK_MS);

        let seed = lookup("TETRIS_SEED")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            tick_ms,
            seed,
            log_path,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = GameConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg.tick_ms, 200);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.tick_interval(), Duration::from_millis(200));
    }

    #[test]
    fn reads_all_variables() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("TETRIS_TICK_MS", "350"),
            ("TETRIS_SEED", " 42 "),
            ("TETRIS_LOG_PATH", "/tmp/tetris.jsonl"),
        ]));
        assert_eq!(cfg.tick_ms, 350);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/tetris.jsonl")));
    }

    #[test]
    fn tick_is_clamped_and_garbage_ignored() {
        let cfg = GameConfig::from_lookup(lookup(&[("TETRIS_TICK_MS", "5")]));
        assert_eq!(cfg.tick_ms, MIN_TICK_MS);

        let cfg = GameConfig::from_lookup(lookup(&[("TETRIS_TICK_MS", "fast")]));
        assert_eq!(cfg.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn blank_log_path_disables_log() {
        let cfg = GameConfig::from_lookup(lookup(&[("TETRIS_LOG_PATH", "   ")]));
        assert_eq!(cfg.log_path, None);
    }
}
