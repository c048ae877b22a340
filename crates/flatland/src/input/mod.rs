pub mod keys;
pub mod tracker;
