use web_sys::Element;
use yew::NodeRef;

use super::metrics::TravelDistance;

/// Normalized position of `scroll` between two anchors, clamped to [0, 1].
/// A zero-height span, or any non-finite input, yields 0.
pub fn progress(scroll: f64, anchor_start: f64, anchor_end: f64) -> f64 {
    let span = anchor_end - anchor_start;
    if !span.is_finite() || span <= 0.0 || !scroll.is_finite() {
        return 0.0;
    }
    ((scroll - anchor_start) / span).clamp(0.0, 1.0)
}

// Progress is 0 when the spacer's top reaches the top of the viewport and 1
// when its bottom reaches the bottom of the viewport. The spacer is one
// viewport taller than the travel, so that span equals the travel.
pub struct ProgressTracker {
    spacer: NodeRef,
}

impl ProgressTracker {
    pub fn new(spacer: NodeRef) -> Self {
        Self { spacer }
    }

    pub fn anchors(spacer_top: f64, travel: TravelDistance) -> (f64, f64) {
        (spacer_top, spacer_top + travel.get())
    }

    pub fn update(&self, travel: TravelDistance) -> f64 {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let spacer_top = self
            .spacer
            .cast::<Element>()
            .map(|spacer| spacer.get_bounding_client_rect().top() + scroll_y)
            .unwrap_or(0.0);
        Self::at(scroll_y, spacer_top, travel)
    }

    fn at(scroll_y: f64, spacer_top: f64, travel: TravelDistance) -> f64 {
        let (start, end) = Self::anchors(spacer_top, travel);
        progress(scroll_y, start, end)
    }
}
