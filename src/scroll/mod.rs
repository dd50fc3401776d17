pub mod frame;
pub mod metrics;
pub mod progress;

pub use frame::{FrameClock, FrameLoop};
pub use metrics::{ScrollMetrics, StageLayout, TravelDistance, Viewport};
pub use progress::ProgressTracker;
