//! Host-facing contracts for drawing and frame scheduling.
//!
//! The engine computes rectangles and strings; a `DrawSink` turns them into
//! pixels. In the browser that is a Canvas 2D context (see `flatland-web`);
//! tests use a recording sink.

use glam::DVec2;

use crate::api::types::Rect;
use crate::components::colour::Rgb;
use crate::components::text::FontSpec;

/// A 2D drawing surface.
pub trait DrawSink<T> {
    /// Erase the whole surface.
    fn clear(&mut self);

    /// Copy `src` (texture pixels) of `texture` into `dst` (surface pixels).
    fn blit(&mut self, texture: &T, src: Rect, dst: Rect);

    /// Draw `text` with its baseline-left corner at `pos`.
    /// `colour` is a CSS colour string such as `rgba(255, 0, 0, 1)`.
    fn fill_text(&mut self, text: &str, font: &FontSpec, colour: &str, pos: DVec2);

    fn fill_rect(&mut self, rect: Rect, colour: Rgb);
}

/// Identifies a pending frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Display-refresh scheduling primitive.
///
/// `request_frame` asks the host to run one more tick at the next refresh;
/// `cancel_frame` withdraws a pending request.
pub trait Scheduler {
    fn request_frame(&mut self) -> Option<FrameHandle>;

    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler for hosts that drive ticks themselves (tests, headless runs).
/// Hands out increasing handles and records nothing else.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    next: i32,
    pending: Option<FrameHandle>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently requested, not yet cancelled, frame.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Consume the pending request, as the host would when it fires.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending = Some(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}
