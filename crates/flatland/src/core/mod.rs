pub mod engine;
pub mod physics;
pub mod pool;
pub mod rng;
pub mod time;
