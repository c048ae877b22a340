//! Animation system: advances every playing sprite animation.

use crate::assets::TextureResource;
use crate::components::sprite::Sprite;
use crate::core::pool::Pool;

/// Advance all playing sprite animations by `dt` seconds.
/// Returns the number of sprites whose frame changed.
pub fn tick_animations<T: TextureResource>(sprites: &mut Pool<Sprite<T>>, dt: f64) -> usize {
    let mut changed = 0;
    for sprite in sprites.values_mut() {
        if sprite.is_animation_active() && sprite.animation_mut().update(dt) {
            changed += 1;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{EntityId, Size};
    use crate::components::sprite::tests::FakeTexture;
    use glam::DVec2;

    fn walker(frames: u32) -> Sprite<FakeTexture> {
        let mut s = Sprite::new(
            FakeTexture::ready(32 * frames, 32),
            Size::new(32.0, 32.0),
            DVec2::ZERO,
            false,
        );
        s.setup_animation(Size::new(32.0, 32.0), frames, 0.1, true);
        s
    }

    #[test]
    fn only_playing_sprites_advance() {
        let mut pool = Pool::new(10);
        let mut playing = walker(4);
        playing.play_animation();
        pool.create(EntityId(1), playing);
        pool.create(EntityId(2), walker(4));

        assert_eq!(tick_animations(&mut pool, 0.1), 1);
        assert_eq!(pool.get(EntityId(1)).unwrap().animation().index(), 1);
        assert_eq!(pool.get(EntityId(2)).unwrap().animation().index(), 0);
    }

    #[test]
    fn tick_updates_source_rect() {
        let mut pool = Pool::new(10);
        let mut s = walker(4);
        s.play_animation();
        pool.create(EntityId(1), s);

        tick_animations(&mut pool, 0.1);
        tick_animations(&mut pool, 0.1);
        let rect = pool.get(EntityId(1)).unwrap().source_rect();
        assert_eq!(rect.x, 64.0);
    }
}
