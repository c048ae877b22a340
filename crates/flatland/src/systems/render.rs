use glam::DVec2;

use crate::api::types::Rect;
use crate::assets::TextureResource;
use crate::components::colour::Rgb;
use crate::components::sprite::Sprite;
use crate::components::text::{family, FontSpec, FontWeight, Text};
use crate::core::pool::Pool;
use crate::renderer::traits::DrawSink;

/// Panel behind the fps readout.
const STATS_PANEL: Rect = Rect { x: 0.0, y: 0.0, w: 100.0, h: 80.0 };
const STATS_PANEL_COLOUR: Rgb = Rgb::new(0x8A, 0xCF, 0x17);
const STATS_TEXT_POS: DVec2 = DVec2::new(10.0, 65.0);

/// Draw every drawable sprite, then every visible text, in slot order.
/// Returns the number of draw calls issued.
pub fn draw_scene<T, S>(sprites: &Pool<Sprite<T>>, texts: &Pool<Text>, sink: &mut S) -> usize
where
    T: TextureResource,
    S: DrawSink<T>,
{
    let mut calls = 0;

    for (_, sprite) in sprites.iter() {
        if !sprite.is_drawable() {
            continue;
        }
        sink.blit(sprite.texture(), sprite.source_rect(), sprite.dest_rect());
        calls += 1;
    }

    for (_, text) in texts.iter() {
        if !text.is_visible() {
            continue;
        }
        sink.fill_text(text.text(), text.font(), &text.colour_css(), text.position());
        calls += 1;
    }

    calls
}

/// Draw the frame-rate overlay in the top-left corner.
pub fn draw_stats<T, S: DrawSink<T>>(fps: i32, sink: &mut S) {
    sink.fill_rect(STATS_PANEL, STATS_PANEL_COLOUR);
    let font = FontSpec::new(72, family::ARIAL, FontWeight::Bold);
    sink.fill_text(&fps.to_string(), &font, &Rgb::WHITE.to_hex(), STATS_TEXT_POS);
}
