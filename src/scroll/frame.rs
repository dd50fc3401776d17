use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub const DEFAULT_DT: f64 = 1.0 / 60.0;
// Keeps a backgrounded tab from jumping on its first frame back.
pub const MAX_DT: f64 = 0.064;

/// Turns `requestAnimationFrame` timestamps (ms) into step sizes (s).
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last {
            Some(last) if now_ms.is_finite() && now_ms > last => ((now_ms - last) / 1000.0).min(MAX_DT),
            _ => DEFAULT_DT,
        };
        if now_ms.is_finite() {
            self.last = Some(now_ms);
        }
        dt
    }

    pub fn idle(&mut self) {
        self.last = None;
    }
}

struct FrameLoopInner {
    window: Window,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

/// `request` is a no-op while a frame is already pending. The frame callback
/// returns whether it wants another frame.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

impl FrameLoop {
    /// `None` when there is no window to schedule frames on.
    pub fn new<F>(mut on_frame: F) -> Option<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window()?;
        let inner = Rc::new(FrameLoopInner {
            window,
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak: Weak<FrameLoopInner> = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |now: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if on_frame(now) {
                FrameLoop { inner }.request();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(callback);

        Some(Self { inner })
    }

    pub fn request(&self) {
        if self.inner.pending.get().is_some() {
            return;
        }
        let callback = self.inner.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match self
            .inner
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.inner.pending.set(Some(id)),
            Err(err) => debug!("requestAnimationFrame failed: {:?}", err),
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.inner.pending.take() {
            let _ = self.inner.window.cancel_animation_frame(id);
        }
        self.inner.callback.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_uses_default() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(1000.0), DEFAULT_DT);
    }

    #[test]
    fn test_tick_measures_gap() {
        let mut clock = FrameClock::default();
        clock.tick(1000.0);
        assert!((clock.tick(1020.0) - 0.02).abs() < 1e-9);
    }

    #[test]
    fn test_tick_clamps_long_gaps() {
        let mut clock = FrameClock::default();
        clock.tick(1000.0);
        assert_eq!(clock.tick(6000.0), MAX_DT);
    }

    #[test]
    fn test_tick_non_increasing_timestamp() {
        let mut clock = FrameClock::default();
        clock.tick(1000.0);
        assert_eq!(clock.tick(1000.0), DEFAULT_DT);
        assert_eq!(clock.tick(900.0), DEFAULT_DT);
    }

    #[test]
    fn test_idle_resets() {
        let mut clock = FrameClock::default();
        clock.tick(1000.0);
        clock.idle();
        assert_eq!(clock.tick(5000.0), DEFAULT_DT);
    }
}
