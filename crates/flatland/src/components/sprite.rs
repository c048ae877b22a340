use std::rc::Rc;

use glam::DVec2;

use crate::api::types::{Rect, Size};
use crate::assets::TextureResource;
use crate::components::animation::Animation;
use crate::core::physics::{BodyKind, PhysicsBody};

/// Scale factors are clamped into this range.
pub const MIN_SCALE: f64 = 0.001;
pub const MAX_SCALE: f64 = 1000.0;

/// A textured, optionally animated and collidable quad.
///
/// The sprite stores its top-left draw corner. The logical position is the
/// point inside the quad selected by the origin fraction (the center by
/// default), and every getter/setter of `position` works in those terms.
#[derive(Debug)]
pub struct Sprite<T> {
    texture: Rc<T>,
    animation: Animation,
    body: PhysicsBody,
    /// Top-left draw corner.
    draw_pos: DVec2,
    size: Size,
    /// Anchor fraction in `[0, 1]` on each axis.
    origin: DVec2,
    visible: bool,
}

impl<T: TextureResource> Sprite<T> {
    /// Create a sprite of `size` whose center sits at `position`.
    pub fn new(texture: Rc<T>, size: Size, position: DVec2, physics_active: bool) -> Self {
        let origin = DVec2::splat(0.5);
        Self {
            texture,
            animation: Animation::new(size),
            body: PhysicsBody::new(BodyKind::Box, size, physics_active),
            draw_pos: position - DVec2::new(size.w, size.h) * origin,
            size,
            origin,
            visible: true,
        }
    }

    /// Swap in a different texture drawn at `size`, keeping the logical
    /// position fixed. Animation frames and the physics body follow the new size.
    pub fn set_texture(&mut self, texture: Rc<T>, size: Size) {
        self.texture = texture;
        self.resize(size);
        self.animation.set_frame_width(size.w);
        self.animation.set_frame_height(size.h);
    }

    pub fn texture(&self) -> &Rc<T> {
        &self.texture
    }

    /// Whether the sprite should be drawn this frame.
    pub fn is_drawable(&self) -> bool {
        self.visible && self.texture.is_ready()
    }

    /// Source rectangle inside the texture for the current animation frame.
    pub fn source_rect(&self) -> Rect {
        Rect::new(
            self.animation.frame_offset_x(),
            0.0,
            self.animation.frame_width(),
            self.animation.frame_height(),
        )
    }

    /// Destination rectangle on the draw surface.
    pub fn dest_rect(&self) -> Rect {
        Rect::new(self.draw_pos.x, self.draw_pos.y, self.size.w, self.size.h)
    }

    // -- Geometry --

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f64 {
        self.size.w
    }

    pub fn height(&self) -> f64 {
        self.size.h
    }

    pub fn half_width(&self) -> f64 {
        self.size.w * 0.5
    }

    pub fn half_height(&self) -> f64 {
        self.size.h * 0.5
    }

    fn anchor_offset(&self) -> DVec2 {
        DVec2::new(self.size.w, self.size.h) * self.origin
    }

    /// Logical position (the origin point).
    pub fn position(&self) -> DVec2 {
        self.draw_pos + self.anchor_offset()
    }

    pub fn set_position(&mut self, position: DVec2) {
        self.draw_pos = position - self.anchor_offset();
    }

    pub fn x(&self) -> f64 {
        self.position().x
    }

    pub fn y(&self) -> f64 {
        self.position().y
    }

    pub fn set_x(&mut self, x: f64) {
        self.draw_pos.x = x - self.size.w * self.origin.x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.draw_pos.y = y - self.size.h * self.origin.y;
    }

    /// Top-left draw corner.
    pub fn draw_position(&self) -> DVec2 {
        self.draw_pos
    }

    /// Geometric center of the quad, whatever the origin. Collision shapes
    /// are centered here.
    pub fn center(&self) -> DVec2 {
        self.draw_pos + DVec2::new(self.half_width(), self.half_height())
    }

    pub fn move_x(&mut self, amount: f64) {
        self.draw_pos.x += amount;
    }

    pub fn move_y(&mut self, amount: f64) {
        self.draw_pos.y += amount;
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// Set the anchor fraction. Each axis is clamped to `[0, 1]`.
    /// The draw corner stays put; the logical position moves with the anchor.
    pub fn set_origin(&mut self, origin_x: f64, origin_y: f64) {
        self.origin = DVec2::new(clamp_unit(origin_x), clamp_unit(origin_y));
    }

    /// Multiply the drawn size by `factor`, growing or shrinking about the
    /// origin. The factor is clamped to `[MIN_SCALE, MAX_SCALE]`.
    pub fn scale(&mut self, factor: f64) {
        if factor.is_nan() {
            return;
        }
        let factor = factor.clamp(MIN_SCALE, MAX_SCALE);
        self.resize(Size::new(self.size.w * factor, self.size.h * factor));
    }

    fn resize(&mut self, size: Size) {
        let grow = DVec2::new(size.w - self.size.w, size.h - self.size.h);
        self.draw_pos -= grow * self.origin;
        self.size = size;
        self.body.set_size(size);
    }

    // -- Visibility --

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // -- Animation --

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut Animation {
        &mut self.animation
    }

    pub fn setup_animation(&mut self, frame_size: Size, frame_count: u32, frame_rate: f64, looping: bool) {
        self.animation.setup(frame_size, frame_count, frame_rate, looping);
    }

    /// Treat the whole texture as a horizontal strip of `frame_count` equal
    /// frames. Returns false (and changes nothing) while the texture is
    /// still loading.
    pub fn setup_animation_strip(&mut self, frame_count: u32, frame_rate: f64, looping: bool) -> bool {
        if !self.texture.is_ready() {
            return false;
        }
        let (w, h) = self.texture.natural_size();
        let frame_w = w as f64 / frame_count.max(1) as f64;
        self.animation
            .setup(Size::new(frame_w, h as f64), frame_count, frame_rate, looping);
        true
    }

    pub fn play_animation(&mut self) {
        self.animation.play();
    }

    pub fn pause_animation(&mut self) {
        self.animation.pause();
    }

    pub fn stop_animation(&mut self) {
        self.animation.stop();
    }

    pub fn set_animation_frame(&mut self, index: u32) {
        self.animation.set_frame(index);
    }

    pub fn set_animation_rate(&mut self, frame_rate: f64) {
        self.animation.set_frame_rate(frame_rate);
    }

    pub fn set_animation_looping(&mut self, looping: bool) {
        self.animation.set_looping(looping);
    }

    pub fn is_animation_active(&self) -> bool {
        self.animation.is_active()
    }

    // -- Physics --

    pub fn body(&self) -> &PhysicsBody {
        &self.body
    }

    pub fn is_physics_active(&self) -> bool {
        self.body.is_active()
    }

    pub fn activate_physics(&mut self) {
        self.body.activate();
    }

    pub fn deactivate_physics(&mut self) {
        self.body.deactivate();
    }

    /// Rebuild the body as `kind` sized to the sprite. Activates physics.
    pub fn set_body(&mut self, kind: BodyKind) {
        self.body.set_kind(kind, self.size);
    }

    /// Resize the body independently of the drawn size.
    pub fn set_body_size(&mut self, size: Size) {
        self.body.set_size(size);
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
