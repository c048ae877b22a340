use std::rc::Rc;

use flatland::*;
use flatland_web::{HtmlSound, HtmlTexture, WebEngine};

const MOVE_SPEED: f64 = 500.0;

pub struct HelloWorld {
    player: Option<EntityId>,
    circle: Option<Rc<HtmlTexture>>,
    blip: Option<EntityId>,
}

impl HelloWorld {
    pub fn new() -> Self {
        Self {
            player: None,
            circle: None,
            blip: None,
        }
    }
}

impl Game<HtmlTexture, HtmlSound> for HelloWorld {
    fn config(&self) -> EngineConfig {
        EngineConfig {
            show_stats: true,
            ..EngineConfig::default()
        }
    }

    fn init(&mut self, engine: &mut WebEngine) {
        let w = engine.window_width();
        let h = engine.window_height();

        engine.create_text(
            "Hello 2D world",
            FontSpec::new(48, family::COMIC_SANS_MS, FontWeight::Normal),
            Rgb::WHITE,
            DVec2::new(w * 0.34, h * 0.35),
        );
        engine.create_text(
            "Press the arrow keys to move me!",
            FontSpec::new(36, family::IMPACT, FontWeight::Normal),
            Rgb::SILVER,
            DVec2::new(w * 0.27, h * 0.45),
        );

        match (HtmlTexture::load("assets/enemy.png"), HtmlTexture::load("assets/circle1.png")) {
            (Ok(enemy), Ok(circle)) => {
                self.player = engine.create_sprite(
                    Rc::new(enemy),
                    Size::new(55.0, 40.0),
                    DVec2::new(w * 0.5, h * 0.65),
                );
                self.circle = Some(Rc::new(circle));
            }
            (Err(err), _) | (_, Err(err)) => log::error!("hello-world: texture load failed: {:?}", err),
        }

        match HtmlSound::load("assets/blip.wav") {
            Ok(sound) => self.blip = engine.create_sound(sound, false),
            Err(err) => log::warn!("hello-world: sound load failed: {:?}", err),
        }

        log::info!("hello-world: joypad connected = {}", engine.is_joypad_connected());
    }

    fn update(&mut self, engine: &mut WebEngine) {
        let step = MOVE_SPEED * engine.frame_time();
        let dy = if engine.key_hold(Key::Up) {
            -step
        } else if engine.key_hold(Key::Down) {
            step
        } else {
            0.0
        };
        let dx = if engine.key_hold(Key::Left) {
            -step
        } else if engine.key_hold(Key::Right) {
            step
        } else {
            0.0
        };

        let swap = engine.key_press(Key::Space);

        if let Some(player) = self.player {
            if let Some(sprite) = engine.sprite_mut(player) {
                sprite.move_x(dx);
                sprite.move_y(dy);
                if let (true, Some(circle)) = (swap, &self.circle) {
                    sprite.set_texture(Rc::clone(circle), Size::new(100.0, 100.0));
                }
            }
        }

        if let (true, Some(blip)) = (swap, self.blip) {
            if let Some(sound) = engine.sound_mut(blip) {
                sound.restart();
            }
        }
    }
}
