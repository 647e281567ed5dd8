//! Settings passed in from JavaScript as plain objects.
//!
//! Missing fields fall back to defaults, so `{}` is a valid config.

use serde::Deserialize;

/// Interval between auto-play ticks.
pub const DEFAULT_TICK_MS: u32 = 100;

/// Editor grid size before any settings are applied.
pub const DEFAULT_EDITOR_SIZE: usize = 30;

/// Largest editor grid, in cells.
pub const MAX_EDITOR_CELLS: usize = 1 << 24;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    pub tick_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl SessionConfig {
    /// Tick period with zero clamped to 1ms.
    pub fn tick_period(&self) -> u32 {
        self.tick_ms.max(1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_EDITOR_SIZE,
            height: DEFAULT_EDITOR_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_defaults() {
        let cfg: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SessionConfig::default());
        assert_eq!(cfg.tick_period(), 100);
    }

    #[test]
    fn test_session_config_camel_case() {
        let cfg: SessionConfig = serde_json::from_str(r#"{"tickMs": 250}"#).unwrap();
        assert_eq!(cfg.tick_ms, 250);
    }

    #[test]
    fn test_zero_tick_is_clamped() {
        let cfg = SessionConfig { tick_ms: 0 };
        assert_eq!(cfg.tick_period(), 1);
    }

    #[test]
    fn test_editor_config_partial() {
        let cfg: EditorConfig = serde_json::from_str(r#"{"width": 12}"#).unwrap();
        assert_eq!((cfg.width, cfg.height), (12, DEFAULT_EDITOR_SIZE));
    }
}
