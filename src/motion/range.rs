use crate::error::MotionError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    start: f64,
    end: f64,
}

impl ScrollRange {
    pub const FULL: ScrollRange = ScrollRange { start: 0.0, end: 1.0 };

    pub fn new(start: f64, end: f64) -> Result<Self, MotionError> {
        let valid = start.is_finite()
            && end.is_finite()
            && start >= 0.0
            && end <= 1.0
            && start < end;
        if !valid {
            return Err(MotionError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, other: &ScrollRange) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    // NaN progress counts as the start of the range.
    #[inline]
    pub fn local(&self, progress: f64) -> f64 {
        if progress.is_nan() || progress <= self.start {
            0.0
        } else if progress >= self.end {
            1.0
        } else {
            (progress - self.start) / (self.end - self.start)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    range: ScrollRange,
    from: f64,
    to: f64,
}

impl Curve {
    pub fn new(range: ScrollRange, from: f64, to: f64) -> Result<Self, MotionError> {
        if !from.is_finite() || !to.is_finite() {
            return Err(MotionError::NonFiniteOutput { from, to });
        }
        Ok(Self { range, from, to })
    }

    pub fn range(&self) -> ScrollRange {
        self.range
    }

    /// Value of the curve at `progress`. At or past either boundary the
    /// declared endpoint is returned as-is.
    pub fn sample(&self, progress: f64) -> f64 {
        let t = self.range.local(progress);
        if t <= 0.0 {
            self.from
        } else if t >= 1.0 {
            self.to
        } else {
            self.from + (self.to - self.from) * t
        }
    }
}
