//! Runtime configuration read from environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{BASE_FALL_MS, INPUT_POLL_MS};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed for piece selection
    pub seed: u32,
    /// Fall interval at level 1 (ms)
    pub base_fall_ms: u32,
    /// Input poll timeout (ms)
    pub poll_ms: u32,
    /// flexi_logger spec; `None` disables logging
    pub log_spec: Option<String>,
    pub log_dir: String,
    /// Variables that were set but could not be used, as (name, raw value).
    pub rejected: Vec<(&'static str, String)>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            base_fall_ms: BASE_FALL_MS,
            poll_ms: INPUT_POLL_MS,
            log_spec: None,
            log_dir: ".".to_string(),
            rejected: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        let mut number = |key: &'static str, allow_zero: bool| -> Option<u32> {
            let raw = lookup(key)?;
            match raw.trim().parse::<u32>() {
                Ok(n) if allow_zero || n > 0 => Some(n),
                _ => {
                    rejected.push((key, raw));
                    None
                }
            }
        };

        if let Some(seed) = number("TETRIS_SEED", true) {
            config.seed = seed;
        }
        if let Some(ms) = number("TETRIS_FALL_MS", false) {
            config.base_fall_ms = ms;
        }
        if let Some(ms) = number("TETRIS_POLL_MS", false) {
            config.poll_ms = ms;
        }

        config.log_spec = lookup("TETRIS_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        if let Some(dir) = lookup("TETRIS_LOG_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            config.log_dir = dir;
        }

        config.rejected = rejected;
        config
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    (nanos ^ (nanos >> 32)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GameConfig::from_lookup(|_| None);
        assert_eq!(config.base_fall_ms, 500);
        assert_eq!(config.poll_ms, 50);
        assert_eq!(config.log_spec, None);
        assert_eq!(config.log_dir, ".");
        assert!(config.rejected.is_empty());
    }

    #[test]
    fn test_values_are_parsed() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("TETRIS_SEED", "42"),
            ("TETRIS_FALL_MS", " 800 "),
            ("TETRIS_POLL_MS", "20"),
            ("TETRIS_LOG", "debug"),
            ("TETRIS_LOG_DIR", "/tmp/logs"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.base_fall_ms, 800);
        assert_eq!(config.poll_ms, 20);
        assert_eq!(config.log_spec.as_deref(), Some("debug"));
        assert_eq!(config.log_dir, "/tmp/logs");
    }

    #[test]
    fn test_bad_values_fall_back_and_are_recorded() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("TETRIS_SEED", "abc"),
            ("TETRIS_FALL_MS", "0"),
            ("TETRIS_POLL_MS", "-5"),
            ("TETRIS_LOG", "   "),
        ]));
        assert_eq!(config.base_fall_ms, 500);
        assert_eq!(config.poll_ms, 50);
        assert_eq!(config.log_spec, None);
        let names: Vec<_> = config.rejected.iter().map(|(k, _)| *k).collect();
        assert_eq!(names, vec!["TETRIS_SEED", "TETRIS_FALL_MS", "TETRIS_POLL_MS"]);
    }

    #[test]
    fn test_zero_seed_is_allowed() {
        let config = GameConfig::from_lookup(lookup_from(&[("TETRIS_SEED", "0")]));
        assert_eq!(config.seed, 0);
        assert!(config.rejected.is_empty());
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = GameConfig::from_env();
    }
}
