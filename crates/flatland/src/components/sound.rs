use crate::assets::AudioResource;

/// A pooled audio clip with playback controls.
#[derive(Debug)]
pub struct Sound<A> {
    audio: A,
    looping: bool,
    volume: f64,
    muted: bool,
}

impl<A: AudioResource> Sound<A> {
    pub fn new(mut audio: A, looping: bool) -> Self {
        audio.set_looping(looping);
        Self {
            audio,
            looping,
            volume: 1.0,
            muted: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.audio.is_ready()
    }

    pub fn is_playing(&self) -> bool {
        self.audio.is_playing()
    }

    pub fn play(&mut self) {
        self.audio.play();
    }

    pub fn pause(&mut self) {
        self.audio.pause();
    }

    /// Pause and rewind.
    pub fn stop(&mut self) {
        self.audio.stop();
    }

    /// Rewind and play from the start.
    pub fn restart(&mut self) {
        self.audio.stop();
        self.audio.play();
    }

    pub fn reload(&mut self) {
        self.audio.reload();
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Set volume, clamped to `[0, 1]`.
    pub fn set_volume(&mut self, volume: f64) {
        if volume.is_nan() {
            return;
        }
        self.volume = volume.clamp(0.0, 1.0);
        self.audio.set_volume(self.volume);
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
        self.audio.set_looping(looping);
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn mute(&mut self) {
        self.muted = true;
        self.audio.set_muted(true);
    }

    pub fn unmute(&mut self) {
        self.muted = false;
        self.audio.set_muted(false);
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records the calls made against it.
    #[derive(Debug, Default)]
    pub(crate) struct FakeAudio {
        pub playing: bool,
        pub position: f64,
        pub volume: f64,
        pub looping: bool,
        pub muted: bool,
        pub stops: u32,
    }

    impl AudioResource for FakeAudio {
        fn is_ready(&self) -> bool {
            true
        }

        fn is_playing(&self) -> bool {
            self.playing
        }

        fn play(&mut self) {
            self.playing = true;
            self.position += 1.0;
        }

        fn pause(&mut self) {
            self.playing = false;
        }

        fn stop(&mut self) {
            self.playing = false;
            self.position = 0.0;
            self.stops += 1;
        }

        fn set_volume(&mut self, volume: f64) {
            self.volume = volume;
        }

        fn set_looping(&mut self, looping: bool) {
            self.looping = looping;
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn reload(&mut self) {}
    }

    #[test]
    fn new_applies_loop_flag() {
        let sound = Sound::new(FakeAudio::default(), true);
        assert!(sound.is_looping());
        assert!(sound.audio().looping);
    }

    #[test]
    fn volume_is_clamped() {
        let mut sound = Sound::new(FakeAudio::default(), false);
        sound.set_volume(3.0);
        assert_eq!(sound.volume(), 1.0);
        assert_eq!(sound.audio().volume, 1.0);
        sound.set_volume(-1.0);
        assert_eq!(sound.audio().volume, 0.0);
    }

    #[test]
    fn restart_rewinds_then_plays() {
        let mut sound = Sound::new(FakeAudio::default(), false);
        sound.play();
        sound.play();
        sound.restart();
        assert!(sound.is_playing());
        assert_eq!(sound.audio().position, 1.0);
        assert_eq!(sound.audio().stops, 1);
    }

    #[test]
    fn mute_toggles() {
        let mut sound = Sound::new(FakeAudio::default(), false);
        sound.mute();
        assert!(sound.is_muted() && sound.audio().muted);
        sound.unmute();
        assert!(!sound.audio().muted);
    }
}
