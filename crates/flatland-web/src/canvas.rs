use flatland::{DVec2, DrawSink, FontSpec, Rect, Rgb};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::resources::HtmlTexture;

/// Draws engine output onto a `<canvas>` through its 2D context.
pub struct Canvas2dSink {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Canvas2dSink {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        })
    }
}

impl DrawSink<HtmlTexture> for Canvas2dSink {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn blit(&mut self, texture: &HtmlTexture, src: Rect, dst: Rect) {
        let drawn = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                texture.image(),
                src.x,
                src.y,
                src.w,
                src.h,
                dst.x,
                dst.y,
                dst.w,
                dst.h,
            );
        if let Err(err) = drawn {
            log::warn!("canvas: drawImage failed: {:?}", err);
        }
    }

    fn fill_text(&mut self, text: &str, font: &FontSpec, colour: &str, pos: DVec2) {
        self.ctx.set_font(&font.to_css());
        self.ctx.set_fill_style_str(colour);
        if let Err(err) = self.ctx.fill_text(text, pos.x, pos.y) {
            log::warn!("canvas: fillText failed: {:?}", err);
        }
    }

    fn fill_rect(&mut self, rect: Rect, colour: Rgb) {
        self.ctx.set_fill_style_str(&colour.to_hex());
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }
}
