pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{ConfigError, EngineConfig, Game};
pub use api::types::{EntityId, Rect, Size};
pub use assets::{AudioResource, TextureResource};
pub use components::animation::{Animation, PlayState};
pub use components::colour::Rgb;
pub use components::sound::Sound;
pub use components::sprite::Sprite;
pub use components::text::{family, FontSpec, FontWeight, Text};
pub use core::engine::Engine;
pub use core::physics::{overlaps, BodyKind, PhysicsBody, Shape};
pub use core::pool::{Pool, SOUND_LIMIT, SPRITE_LIMIT, TEXT_LIMIT};
pub use core::time::FrameClock;
pub use input::keys::{JoyButton, Key};
pub use input::tracker::{GamepadSnapshot, GamepadSource, InputTracker, NoGamepad};
pub use renderer::{DrawSink, FrameHandle, ManualScheduler, Scheduler};
pub use systems::animation::tick_animations;
pub use glam::DVec2;
