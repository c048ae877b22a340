//! The engine: owns the entity pools, clock and input state, and runs the
//! draw-then-update tick.

use std::rc::Rc;

use glam::DVec2;

use crate::api::game::{ConfigError, EngineConfig};
use crate::api::types::{EntityId, Size};
use crate::assets::{AudioResource, TextureResource};
use crate::components::colour::Rgb;
use crate::components::sound::Sound;
use crate::components::sprite::Sprite;
use crate::components::text::{FontSpec, Text};
use crate::core::physics::overlaps;
use crate::core::pool::Pool;
use crate::core::rng::Rng;
use crate::core::time::FrameClock;
use crate::input::keys::{JoyButton, Key};
use crate::input::tracker::{GamepadSource, InputTracker};
use crate::renderer::traits::{DrawSink, FrameHandle, Scheduler};
use crate::systems::animation::tick_animations;
use crate::systems::render::{draw_scene, draw_stats};

pub struct Engine<T, A> {
    config: EngineConfig,
    sprites: Pool<Sprite<T>>,
    texts: Pool<Text>,
    sounds: Pool<Sound<A>>,
    next_id: u64,
    clock: FrameClock,
    input: InputTracker,
    gamepad: Box<dyn GamepadSource>,
    scheduler: Box<dyn Scheduler>,
    pending: Option<FrameHandle>,
    running: bool,
    show_stats: bool,
    physics_enabled: bool,
    rng: Rng,
    window: Size,
}

impl<T: TextureResource, A: AudioResource> Engine<T, A> {
    /// Build an engine drawing into a surface of `window` pixels.
    pub fn new(
        config: EngineConfig,
        window: Size,
        scheduler: Box<dyn Scheduler>,
        gamepad: Box<dyn GamepadSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut input = InputTracker::new();
        if config.joypad_enabled {
            input.enable_joypad();
        }

        Ok(Self {
            sprites: Pool::new(config.sprite_limit),
            texts: Pool::new(config.text_limit),
            sounds: Pool::new(config.sound_limit),
            next_id: 1,
            clock: FrameClock::new(),
            input,
            gamepad,
            scheduler,
            pending: None,
            running: false,
            show_stats: config.show_stats,
            physics_enabled: config.physics_enabled,
            rng: Rng::new(config.rng_seed),
            window,
            config,
        })
    }

    fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Canvas background as parsed from the config.
    pub fn background(&self) -> Rgb {
        Rgb::from_hex(&self.config.background).unwrap_or(Rgb::BLACK)
    }

    pub fn window_size(&self) -> Size {
        self.window
    }

    pub fn window_width(&self) -> f64 {
        self.window.w
    }

    pub fn window_height(&self) -> f64 {
        self.window.h
    }

    // -- Loop --

    /// Schedule the first tick. Does nothing if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.pending = self.scheduler.request_frame();
        log::info!("engine: started ({}x{})", self.window.w, self.window.h);
    }

    /// Cancel the pending tick and clear the surface.
    pub fn stop<S: DrawSink<T>>(&mut self, sink: &mut S) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        sink.clear();
        if self.running {
            log::info!("engine: stopped at t = {} ms", self.clock.current_time());
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handle of the tick the host is expected to run next.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Render the state left by the previous update.
    pub fn draw<S: DrawSink<T>>(&self, sink: &mut S) {
        sink.clear();
        draw_scene(&self.sprites, &self.texts, sink);
        if self.show_stats {
            draw_stats(self.clock.fps(), sink);
        }
    }

    /// Advance the clock to `elapsed_ms`, step animations, sample fps,
    /// release gamepad latches, and request the next tick while running.
    pub fn update(&mut self, elapsed_ms: f64) {
        self.clock.tick(elapsed_ms);
        // A backwards timestamp must not wind animations back.
        let dt = self.clock.delta_time().max(0.0);

        tick_animations(&mut self.sprites, dt);

        if self.show_stats && self.clock.sample_fps() {
            log::debug!("engine: fps {}", self.clock.fps());
        }

        if self.input.is_joypad_enabled() {
            let pad = self.gamepad.snapshot();
            self.input.joy_clear(pad.as_ref());
        }

        if self.running {
            self.pending = self.scheduler.request_frame();
        }
    }

    /// One full tick: draw, then update.
    pub fn tick<S: DrawSink<T>>(&mut self, elapsed_ms: f64, sink: &mut S) {
        self.draw(sink);
        self.update(elapsed_ms);
    }

    /// Seconds between the last two ticks.
    pub fn frame_time(&self) -> f64 {
        self.clock.delta_time()
    }

    pub fn fps(&self) -> i32 {
        self.clock.fps()
    }

    /// Turn on the fps overlay and sampling.
    pub fn show_fps(&mut self) {
        self.show_stats = true;
    }

    pub fn hide_fps(&mut self) {
        self.show_stats = false;
    }

    // -- Sprites --

    /// Create a sprite centered at `position`, physics body inactive.
    /// Returns `None` when the sprite pool is full.
    pub fn create_sprite(&mut self, texture: Rc<T>, size: Size, position: DVec2) -> Option<EntityId> {
        let id = self.next_id();
        let created = self.sprites.create(id, Sprite::new(texture, size, position, false));
        if created.is_some() {
            log::debug!("engine: sprite {:?} created", id);
        }
        created
    }

    /// Remove a sprite, leaving its slot free for reuse.
    pub fn remove_sprite(&mut self, id: EntityId) -> bool {
        let removed = self.sprites.remove(id).is_some();
        if removed {
            log::debug!("engine: sprite {:?} removed", id);
        }
        removed
    }

    pub fn sprite(&self, id: EntityId) -> Option<&Sprite<T>> {
        self.sprites.get(id)
    }

    pub fn sprite_mut(&mut self, id: EntityId) -> Option<&mut Sprite<T>> {
        self.sprites.get_mut(id)
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    // -- Texts --

    pub fn create_text(
        &mut self,
        content: impl Into<String>,
        font: FontSpec,
        colour: Rgb,
        position: DVec2,
    ) -> Option<EntityId> {
        let id = self.next_id();
        let created = self.texts.create(id, Text::new(content, font, colour, position));
        if created.is_some() {
            log::debug!("engine: text {:?} created", id);
        }
        created
    }

    pub fn remove_text(&mut self, id: EntityId) -> bool {
        let removed = self.texts.remove(id).is_some();
        if removed {
            log::debug!("engine: text {:?} removed", id);
        }
        removed
    }

    pub fn text(&self, id: EntityId) -> Option<&Text> {
        self.texts.get(id)
    }

    pub fn text_mut(&mut self, id: EntityId) -> Option<&mut Text> {
        self.texts.get_mut(id)
    }

    pub fn text_count(&self) -> usize {
        self.texts.len()
    }

    // -- Sounds --

    pub fn create_sound(&mut self, audio: A, looping: bool) -> Option<EntityId> {
        let id = self.next_id();
        let created = self.sounds.create(id, Sound::new(audio, looping));
        if created.is_some() {
            log::debug!("engine: sound {:?} created", id);
        }
        created
    }

    /// Stop and remove a sound.
    pub fn remove_sound(&mut self, id: EntityId) -> bool {
        match self.sounds.remove(id) {
            Some(mut sound) => {
                sound.stop();
                log::debug!("engine: sound {:?} removed", id);
                true
            }
            None => false,
        }
    }

    pub fn sound(&self, id: EntityId) -> Option<&Sound<A>> {
        self.sounds.get(id)
    }

    pub fn sound_mut(&mut self, id: EntityId) -> Option<&mut Sound<A>> {
        self.sounds.get_mut(id)
    }

    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }

    // -- Keyboard --

    /// Feed a raw key-down code from the host. Returns true if the code is
    /// one the engine tracks (the host should then suppress the default action).
    pub fn key_down(&mut self, code: u32) -> bool {
        self.input.key_down(code)
    }

    pub fn key_up(&mut self, code: u32) -> bool {
        self.input.key_up(code)
    }

    pub fn key_press(&mut self, key: Key) -> bool {
        self.input.key_press(key)
    }

    pub fn key_hold(&self, key: Key) -> bool {
        self.input.key_hold(key)
    }

    // -- Gamepad --

    pub fn is_joypad_connected(&self) -> bool {
        self.gamepad.snapshot().is_some()
    }

    pub fn is_joypad_enabled(&self) -> bool {
        self.input.is_joypad_enabled()
    }

    pub fn enable_joypad(&mut self) {
        self.input.enable_joypad();
    }

    pub fn disable_joypad(&mut self) {
        self.input.disable_joypad();
    }

    /// `None` while the joypad is disabled.
    pub fn joy_press(&mut self, button: JoyButton) -> Option<bool> {
        if !self.input.is_joypad_enabled() {
            return None;
        }
        let pad = self.gamepad.snapshot();
        Some(self.input.joy_press(button, pad.as_ref()))
    }

    /// `None` while the joypad is disabled.
    pub fn joy_hold(&self, button: JoyButton) -> Option<bool> {
        if !self.input.is_joypad_enabled() {
            return None;
        }
        let pad = self.gamepad.snapshot();
        Some(self.input.joy_hold(button, pad.as_ref()))
    }

    // -- Physics --

    pub fn set_physics_enabled(&mut self, enabled: bool) {
        self.physics_enabled = enabled;
    }

    pub fn is_physics_enabled(&self) -> bool {
        self.physics_enabled
    }

    /// Whether two live sprites with active bodies overlap. Always false
    /// while physics is disabled.
    pub fn sprite_collision(&self, a: EntityId, b: EntityId) -> bool {
        if !self.physics_enabled {
            return false;
        }
        let (Some(sa), Some(sb)) = (self.sprites.get(a), self.sprites.get(b)) else {
            return false;
        };
        if !sa.is_physics_active() || !sb.is_physics_active() {
            return false;
        }
        overlaps(sa.body().shape(), sa.center(), sb.body().shape(), sb.center())
    }

    // -- Random --

    /// Whole number in `[min, max)`.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.range_int(min, max)
    }

    /// Number in `[min, max]` rounded to one decimal place.
    pub fn random_decimal(&mut self, min: f64, max: f64) -> f64 {
        self.rng.range_decimal(min, max)
    }
}
