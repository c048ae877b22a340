//! Contracts for externally decoded resources.
//!
//! The engine never decodes images or audio. It holds host-provided handles
//! and polls them for readiness; nothing here blocks waiting for a load.

/// A decoded (or still loading) image.
pub trait TextureResource {
    /// Whether the image can be drawn yet.
    fn is_ready(&self) -> bool;

    /// Natural pixel size of the image. Meaningless until `is_ready`.
    fn natural_size(&self) -> (u32, u32);
}

/// A playable audio clip.
pub trait AudioResource {
    /// Whether enough data is buffered to start playback.
    fn is_ready(&self) -> bool;

    fn is_playing(&self) -> bool;

    fn play(&mut self);

    fn pause(&mut self);

    /// Pause and rewind to the start.
    fn stop(&mut self);

    /// `volume` is already clamped to `[0, 1]` by the caller.
    fn set_volume(&mut self, volume: f64);

    fn set_looping(&mut self, looping: bool);

    fn set_muted(&mut self, muted: bool);

    /// Restart loading from the source.
    fn reload(&mut self);
}
