pub mod traits;

pub use traits::{DrawSink, FrameHandle, ManualScheduler, Scheduler};
