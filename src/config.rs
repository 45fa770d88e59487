use std::env;
use std::path::PathBuf;
use std::time::Duration;

use log::warn;

const SCORES_FILE: &str = "invaders.scores";
const LOG_FILE: &str = "invaders.log";

/// Milliseconds between changes in the name selection.
const SELECTION_TIME_MS: u64 = 200;
/// Grace period before a screen accepts input.
const INPUT_DELAY_MS: u64 = 1000;
const TICK_RATE_MS: u64 = 16; // ~60 FPS
/// How long a key counts as held after its last press or repeat event.
const KEY_HOLD_MS: u64 = 120;

#[derive(Clone, Debug)]
pub struct Settings {
    pub scores_path: PathBuf,
    pub log_path: PathBuf,
    pub selection_time: Duration,
    pub input_delay: Duration,
    pub tick_rate: Duration,
    pub key_hold: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        let dir = data_dir();
        Settings {
            scores_path: dir.join(SCORES_FILE),
            log_path: dir.join(LOG_FILE),
            selection_time: Duration::from_millis(SELECTION_TIME_MS),
            input_delay: Duration::from_millis(INPUT_DELAY_MS),
            tick_rate: Duration::from_millis(TICK_RATE_MS),
            key_hold: Duration::from_millis(KEY_HOLD_MS),
        }
    }
}

impl Settings {
    /// Defaults, overridden by `INVADERS_SCORES` and `INVADERS_INPUT_DELAY_MS`.
    pub fn from_env() -> Self {
        let mut settings = Settings::default();
        if let Some(path) = env::var_os("INVADERS_SCORES") {
            settings.scores_path = PathBuf::from(path);
        }
        if let Ok(raw) = env::var("INVADERS_INPUT_DELAY_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => settings.input_delay = Duration::from_millis(ms),
                Err(e) => warn!("Ignoring INVADERS_INPUT_DELAY_MS={raw:?}: {e}"),
            }
        }
        settings
    }
}

fn data_dir() -> PathBuf {
    // Store next to the executable
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.to_path_buf();
        }
    }
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_design_values() {
        let settings = Settings::default();
        assert_eq!(settings.selection_time, Duration::from_millis(200));
        assert_eq!(settings.input_delay, Duration::from_millis(1000));
        assert!(settings.scores_path.ends_with(SCORES_FILE));
    }
}
