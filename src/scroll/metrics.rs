use web_sys::Element;
use yew::NodeRef;

// Never negative: content narrower than the viewport yields zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TravelDistance(f64);

impl TravelDistance {
    pub const ZERO: TravelDistance = TravelDistance(0.0);

    pub fn between(content_width: f64, viewport_width: f64) -> Self {
        let travel = content_width - viewport_width;
        if travel.is_finite() && travel > 0.0 {
            Self(travel)
        } else {
            Self::ZERO
        }
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn current() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            value
                .ok()
                .and_then(|v| v.as_f64())
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(0.0)
        };
        Self {
            width: read(window.inner_width()),
            height: read(window.inner_height()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StageLayout {
    pub travel: TravelDistance,
    pub viewport: Viewport,
}

impl StageLayout {
    pub fn new(content_width: f64, viewport: Viewport) -> Self {
        Self {
            travel: TravelDistance::between(content_width, viewport.width),
            viewport,
        }
    }

    /// Height of the scroll spacer: one viewport of dwell on the last section
    /// on top of the horizontal travel.
    pub fn spacer_height(&self) -> f64 {
        self.travel.get() + self.viewport.height
    }
}

#[derive(Clone)]
pub struct ScrollMetrics {
    track: NodeRef,
}

impl ScrollMetrics {
    pub fn new(track: NodeRef) -> Self {
        Self { track }
    }

    pub fn content_width(&self) -> f64 {
        self.track
            .cast::<Element>()
            .map(|track| f64::from(track.scroll_width()))
            .unwrap_or(0.0)
    }

    /// Current travel distance, along with the viewport it was measured in.
    pub fn measure(&self) -> StageLayout {
        StageLayout::new(self.content_width(), Viewport::current())
    }
}
