//! Spritesheet animation driver.
//!
//! Frames are laid out left to right in a single row; the current frame is
//! exposed as a horizontal pixel offset into the sheet.

use crate::api::types::Size;

/// Frame duration used by `setup` callers that have no better value.
pub const DEFAULT_FRAME_RATE: f64 = 0.333;

/// Frame duration substituted for a negative rate.
const FALLBACK_FRAME_RATE: f64 = 0.1;

/// Playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    /// Rewound to frame 0.
    #[default]
    Stopped,
    Playing,
    /// Halted mid-sequence; `play` resumes from the same frame.
    Paused,
}

/// Per-sprite animation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frame_width: f64,
    frame_height: f64,
    /// Seconds per frame.
    frame_rate: f64,
    frame_count: u32,
    index: u32,
    /// Always `index * frame_width`.
    frame_offset_x: f64,
    /// Seconds accumulated on the current frame.
    elapsed: f64,
    state: PlayState,
    looping: bool,
}

impl Animation {
    /// A stopped, single-frame animation covering `size`.
    pub fn new(size: Size) -> Self {
        Self {
            frame_width: size.w,
            frame_height: size.h,
            frame_rate: 1.0,
            frame_count: 1,
            index: 0,
            frame_offset_x: 0.0,
            elapsed: 0.0,
            state: PlayState::Stopped,
            looping: false,
        }
    }

    /// Reconfigure the sheet layout and rewind to frame 0.
    /// The play state is left alone, so a playing animation keeps playing.
    pub fn setup(&mut self, frame_size: Size, frame_count: u32, frame_rate: f64, looping: bool) {
        self.frame_width = frame_size.w;
        self.frame_height = frame_size.h;
        self.frame_rate = sanitize_rate(frame_rate);
        self.frame_count = frame_count.max(1);
        self.index = 0;
        self.frame_offset_x = 0.0;
        self.elapsed = 0.0;
        self.looping = looping;
    }

    /// Advance by `dt` seconds. Steps at most one frame per call.
    /// Returns true if the frame changed.
    pub fn update(&mut self, dt: f64) -> bool {
        if self.state != PlayState::Playing {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed < self.frame_rate || self.elapsed <= 0.0 {
            return false;
        }

        self.elapsed = 0.0;
        if self.index + 1 < self.frame_count {
            self.index += 1;
        } else {
            self.index = 0;
            if !self.looping {
                self.state = PlayState::Stopped;
            }
        }
        self.frame_offset_x = self.frame_width * self.index as f64;
        true
    }

    /// Start or resume from the current frame.
    pub fn play(&mut self) {
        self.state = PlayState::Playing;
    }

    /// Hold the current frame. Only meaningful while playing.
    pub fn pause(&mut self) {
        if self.state == PlayState::Playing {
            self.state = PlayState::Paused;
        }
    }

    /// Halt and rewind to frame 0.
    pub fn stop(&mut self) {
        self.state = PlayState::Stopped;
        self.index = 0;
        self.frame_offset_x = 0.0;
        self.elapsed = 0.0;
    }

    /// Jump to frame `index`. Out-of-range indices are ignored.
    pub fn set_frame(&mut self, index: u32) {
        if index < self.frame_count {
            self.index = index;
            self.frame_offset_x = self.frame_width * index as f64;
        }
    }

    pub fn set_frame_rate(&mut self, frame_rate: f64) {
        self.frame_rate = sanitize_rate(frame_rate);
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn set_frame_width(&mut self, width: f64) {
        self.frame_width = width;
        self.frame_offset_x = width * self.index as f64;
    }

    pub fn set_frame_height(&mut self, height: f64) {
        self.frame_height = height;
    }

    pub fn is_active(&self) -> bool {
        self.state == PlayState::Playing
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn frame_width(&self) -> f64 {
        self.frame_width
    }

    pub fn frame_height(&self) -> f64 {
        self.frame_height
    }

    pub fn frame_offset_x(&self) -> f64 {
        self.frame_offset_x
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

fn sanitize_rate(rate: f64) -> f64 {
    if rate < 0.0 || rate.is_nan() {
        FALLBACK_FRAME_RATE
    } else {
        rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(frames: u32, looping: bool) -> Animation {
        let mut anim = Animation::new(Size::new(32.0, 32.0));
        anim.setup(Size::new(32.0, 32.0), frames, 0.1, looping);
        anim
    }

    #[test]
    fn one_shot_ends_stopped() {
        let mut anim = strip(4, false);
        anim.play();
        for _ in 0..3 {
            anim.update(0.1);
        }
        assert_eq!(anim.index(), 3);
        assert_eq!(anim.frame_offset_x(), 96.0);

        anim.update(0.1);
        assert_eq!(anim.index(), 0);
        assert_eq!(anim.frame_offset_x(), 0.0);
        assert!(!anim.is_active());
        assert_eq!(anim.state(), PlayState::Stopped);

        // Further updates do nothing.
        assert!(!anim.update(0.1));
        assert_eq!(anim.index(), 0);
    }

    #[test]
    fn looping_cycles() {
        let mut anim = strip(4, true);
        anim.play();
        for _ in 0..4 {
            anim.update(0.1);
        }
        assert_eq!(anim.index(), 0);
        assert!(anim.is_active());

        anim.update(0.1);
        assert_eq!(anim.index(), 1);
        assert_eq!(anim.frame_offset_x(), 32.0);
    }

    #[test]
    fn zero_rate_needs_elapsed_time() {
        let mut anim = Animation::new(Size::new(32.0, 32.0));
        anim.setup(Size::new(32.0, 32.0), 4, 0.0, true);
        anim.play();
        for _ in 0..3 {
            assert!(!anim.update(0.0));
        }
        assert_eq!(anim.index(), 0);

        assert!(anim.update(0.016));
        assert_eq!(anim.index(), 1);
    }

    #[test]
    fn large_dt_steps_one_frame() {
        let mut anim = strip(8, true);
        anim.play();
        assert!(anim.update(5.0));
        assert_eq!(anim.index(), 1);
        assert_eq!(anim.elapsed(), 0.0);
    }

    #[test]
    fn partial_dt_accumulates() {
        let mut anim = strip(4, true);
        anim.play();
        assert!(!anim.update(0.04));
        assert!(!anim.update(0.04));
        assert!(anim.update(0.04));
        assert_eq!(anim.index(), 1);
    }

    #[test]
    fn update_ignored_unless_playing() {
        let mut anim = strip(4, true);
        assert!(!anim.update(1.0));
        assert_eq!(anim.elapsed(), 0.0);

        anim.play();
        anim.update(0.05);
        anim.pause();
        assert!(!anim.update(1.0));
        assert_eq!(anim.elapsed(), 0.05);
    }

    #[test]
    fn pause_then_play_resumes_in_place() {
        let mut anim = strip(4, true);
        anim.play();
        anim.update(0.1);
        anim.update(0.1);
        anim.pause();
        assert_eq!(anim.state(), PlayState::Paused);

        anim.play();
        assert_eq!(anim.index(), 2);
        anim.update(0.1);
        assert_eq!(anim.index(), 3);
    }

    #[test]
    fn pause_while_stopped_stays_stopped() {
        let mut anim = strip(4, true);
        anim.pause();
        assert_eq!(anim.state(), PlayState::Stopped);
    }

    #[test]
    fn stop_rewinds() {
        let mut anim = strip(4, true);
        anim.play();
        anim.update(0.1);
        anim.update(0.05);
        anim.stop();
        assert_eq!(anim.index(), 0);
        assert_eq!(anim.elapsed(), 0.0);
        assert_eq!(anim.frame_offset_x(), 0.0);
        assert_eq!(anim.state(), PlayState::Stopped);
    }

    #[test]
    fn set_frame_seeks_within_range() {
        let mut anim = strip(4, false);
        anim.set_frame(2);
        assert_eq!(anim.index(), 2);
        assert_eq!(anim.frame_offset_x(), 64.0);

        anim.set_frame(4);
        assert_eq!(anim.index(), 2);
        anim.set_frame(u32::MAX);
        assert_eq!(anim.frame_offset_x(), 64.0);
    }

    #[test]
    fn negative_rate_falls_back() {
        let mut anim = strip(4, false);
        anim.set_frame_rate(-2.0);
        assert_eq!(anim.frame_rate(), 0.1);
        anim.set_frame_rate(0.25);
        assert_eq!(anim.frame_rate(), 0.25);
    }

    #[test]
    fn setup_keeps_play_state() {
        let mut anim = strip(4, true);
        anim.play();
        anim.update(0.1);
        anim.setup(Size::new(16.0, 16.0), 6, DEFAULT_FRAME_RATE, false);
        assert!(anim.is_active());
        assert_eq!(anim.index(), 0);
        assert_eq!(anim.frame_count(), 6);
        assert!(!anim.is_looping());
    }

    #[test]
    fn zero_frame_setup_keeps_one_frame() {
        let mut anim = strip(0, true);
        anim.play();
        anim.update(0.1);
        assert_eq!(anim.index(), 0);
        assert_eq!(anim.frame_count(), 1);
    }
}
