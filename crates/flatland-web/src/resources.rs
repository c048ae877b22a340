//! Browser-backed texture and audio handles.

use flatland::{AudioResource, TextureResource};
use wasm_bindgen::JsValue;
use web_sys::{HtmlAudioElement, HtmlImageElement};

/// `HAVE_FUTURE_DATA`: enough is buffered to start playing.
const HAVE_FUTURE_DATA: u16 = 3;

/// An `<img>` element loading or loaded from a URL.
#[derive(Debug, Clone)]
pub struct HtmlTexture {
    image: HtmlImageElement,
}

impl HtmlTexture {
    /// Start loading `src`. The texture is drawable once the browser
    /// reports the image complete.
    pub fn load(src: &str) -> Result<Self, JsValue> {
        let image = HtmlImageElement::new()?;
        image.set_src(src);
        log::debug!("texture: loading {}", src);
        Ok(Self { image })
    }

    pub fn image(&self) -> &HtmlImageElement {
        &self.image
    }
}

impl TextureResource for HtmlTexture {
    fn is_ready(&self) -> bool {
        self.image.complete() && self.image.natural_width() > 0
    }

    fn natural_size(&self) -> (u32, u32) {
        (self.image.natural_width(), self.image.natural_height())
    }
}

/// An `<audio>` element.
#[derive(Debug, Clone)]
pub struct HtmlSound {
    audio: HtmlAudioElement,
}

impl HtmlSound {
    pub fn load(src: &str) -> Result<Self, JsValue> {
        let audio = HtmlAudioElement::new_with_src(src)?;
        log::debug!("sound: loading {}", src);
        Ok(Self { audio })
    }
}

impl AudioResource for HtmlSound {
    fn is_ready(&self) -> bool {
        self.audio.ready_state() >= HAVE_FUTURE_DATA
    }

    fn is_playing(&self) -> bool {
        !self.audio.paused()
    }

    fn play(&mut self) {
        // A blocked autoplay rejects the promise, not this call.
        if let Err(err) = self.audio.play() {
            log::warn!("sound: play failed: {:?}", err);
        }
    }

    fn pause(&mut self) {
        if let Err(err) = self.audio.pause() {
            log::warn!("sound: pause failed: {:?}", err);
        }
    }

    fn stop(&mut self) {
        self.pause();
        self.audio.set_current_time(0.0);
    }

    fn set_volume(&mut self, volume: f64) {
        self.audio.set_volume(volume);
    }

    fn set_looping(&mut self, looping: bool) {
        self.audio.set_loop(looping);
    }

    fn set_muted(&mut self, muted: bool) {
        self.audio.set_muted(muted);
    }

    fn reload(&mut self) {
        self.audio.load();
    }
}
