pub mod mapper;
pub mod range;
pub mod spring;

pub use mapper::{MotionMapper, MotionSpec, Property, PropertyCurve, Unit};
pub use range::{Curve, ScrollRange};
pub use spring::SpringConfig;
