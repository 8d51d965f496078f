//! Runtime configuration for the editor host

use crate::constants::window;
use log::warn;

/// Environment variable holding a u64 seed for weight sampling
pub const SEED_VAR: &str = "NEUROTIC_SEED";

/// Environment variable overriding the frame rate
pub const FPS_VAR: &str = "NEUROTIC_FPS";

/// Settings the host reads once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Seed for the weight RNG; `None` seeds from the OS
    pub seed: Option<u64>,
    pub frame_rate: u32,
    pub window_size: [f32; 2],
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_rate: window::DEFAULT_FRAME_RATE,
            window_size: window::DEFAULT_SIZE,
        }
    }
}

impl EditorConfig {
    /// Builds a config from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, ignoring unparsable values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(err) => warn!("Ignoring {}={:?}: {}", SEED_VAR, raw, err),
            }
        }

        if let Some(raw) = lookup(FPS_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(fps) if fps > 0 => config.frame_rate = fps,
                Ok(_) => warn!("Ignoring {}=0", FPS_VAR),
                Err(err) => warn!("Ignoring {}={:?}: {}", FPS_VAR, raw, err),
            }
        }

        config
    }

    /// Time between frames at the configured rate
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.frame_rate as f64)
    }
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
    fn test_defaults_without_environment() {
        let config = EditorConfig::from_lookup(|_| None);
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.frame_rate, 60);
    }

    #[test]
    fn test_seed_and_fps_parsed() {
        let config = EditorConfig::from_lookup(lookup_from(&[(SEED_VAR, "42"), (FPS_VAR, "30")]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.frame_rate, 30);
    }

    #[test]
    fn test_bad_values_ignored() {
        let config = EditorConfig::from_lookup(lookup_from(&[(SEED_VAR, "abc"), (FPS_VAR, "0")]));
        assert_eq!(config.seed, None);
        assert_eq!(config.frame_rate, 60);
    }
}
