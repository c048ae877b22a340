pub mod animation;
pub mod colour;
pub mod sound;
pub mod sprite;
pub mod text;
