use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("invalid scroll range [{start}, {end}]: expected 0 <= start < end <= 1")]
    InvalidRange { start: f64, end: f64 },

    #[error("non-finite curve output ({from} -> {to})")]
    NonFiniteOutput { from: f64, to: f64 },

    #[error("curve range {range:?} falls outside its section window {window:?}")]
    OutsideWindow { range: (f64, f64), window: (f64, f64) },
}
