use serde::{Deserialize, Serialize};

use crate::components::colour::Rgb;
use crate::core::engine::Engine;
use crate::core::pool::{SOUND_LIMIT, SPRITE_LIMIT, TEXT_LIMIT};

/// Configuration for the engine, provided by the game.
///
/// Every field has a default, so a JSON document only needs the fields it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// DOM id of the canvas element (web host only).
    pub canvas_id: String,
    /// Canvas background colour as `#RRGGBB`.
    pub background: String,
    /// Maximum live sprites (default: 1000).
    pub sprite_limit: usize,
    /// Maximum live text labels (default: 1000).
    pub text_limit: usize,
    /// Maximum live sounds (default: 100).
    pub sound_limit: usize,
    /// Draw the fps overlay and sample frame rate every tick.
    pub show_stats: bool,
    /// Poll the gamepad.
    pub joypad_enabled: bool,
    /// Let `sprite_collision` report overlaps.
    pub physics_enabled: bool,
    /// Seed for `random_int` / `random_decimal`.
    pub rng_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            canvas_id: "viewport".to_string(),
            background: Rgb::BLACK.to_hex(),
            sprite_limit: SPRITE_LIMIT,
            text_limit: TEXT_LIMIT,
            sound_limit: SOUND_LIMIT,
            show_stats: false,
            joypad_enabled: false,
            physics_enabled: true,
            rng_seed: 42,
        }
    }
}

/// Rejected configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid engine config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be between 1 and {max}, got {value}")]
    Limit {
        field: &'static str,
        value: usize,
        max: usize,
    },
    #[error("background colour {0:?} is not #RRGGBB")]
    Background(String),
}

impl EngineConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Pool limits may be lowered but never raised above the engine's
    /// fixed capacities.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_limit("sprite_limit", self.sprite_limit, SPRITE_LIMIT)?;
        check_limit("text_limit", self.text_limit, TEXT_LIMIT)?;
        check_limit("sound_limit", self.sound_limit, SOUND_LIMIT)?;
        if Rgb::from_hex(&self.background).is_none() {
            return Err(ConfigError::Background(self.background.clone()));
        }
        Ok(())
    }
}

fn check_limit(field: &'static str, value: usize, max: usize) -> Result<(), ConfigError> {
    if value == 0 || value > max {
        return Err(ConfigError::Limit { field, value, max });
    }
    Ok(())
}

/// The contract every game must fulfill.
///
/// `T` and `A` are the host's texture and audio handle types.
pub trait Game<T, A> {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> EngineConfig {
        EngineConfig::default()
    }

    /// Create the initial sprites, texts and sounds.
    fn init(&mut self, engine: &mut Engine<T, A>);

    /// Per-frame game logic. Runs before the engine draws and advances.
    fn update(&mut self, engine: &mut Engine<T, A>);
}
