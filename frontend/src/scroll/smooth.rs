use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{WheelEvent, Window};
use yew::Callback;

use crate::config::{SCROLL_DURATION_MS, WHEEL_MULTIPLIER};
use crate::utils::scheduler::{Scheduler, TaskHandle};

const DOM_DELTA_LINE: u32 = 1;
const DOM_DELTA_PAGE: u32 = 2;
const LINE_HEIGHT_PX: f64 = 16.0;

/// Exponential ease-out, reaching 1 slightly before `t = 1`.
pub fn ease(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Normalizes a wheel delta to pixels.
pub fn wheel_delta_px(delta: f64, mode: u32, viewport_height: f64) -> f64 {
    match mode {
        DOM_DELTA_LINE => delta * LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => delta * viewport_height,
        _ => delta,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glide {
    from: f64,
    elapsed: f64,
}

/// Eased momentum scrolling toward a wheel-driven target.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentumScroll {
    position: f64,
    target: f64,
    limit: f64,
    glide: Option<Glide>,
    last_frame: Option<f64>,
}

impl MomentumScroll {
    pub fn new(position: f64, limit: f64) -> Self {
        let limit = limit.max(0.0);
        let position = position.clamp(0.0, limit);
        Self {
            position,
            target: position,
            limit,
            glide: None,
            last_frame: None,
        }
    }

    #[cfg(test)]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[cfg(test)]
    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
    }

    /// Pushes the target by a wheel delta. Returns false only when the
    /// position already rests at the edge, so the event goes to the browser.
    /// A glide still heading for a pinned target keeps the event.
    pub fn on_wheel(&mut self, delta_px: f64) -> bool {
        let target = (self.target + delta_px * WHEEL_MULTIPLIER).clamp(0.0, self.limit);
        if target == self.target {
            return self.glide.is_some();
        }
        self.target = target;
        self.glide = Some(Glide {
            from: self.position,
            elapsed: 0.0,
        });
        true
    }

    /// Advances the glide to `now_ms`. Returns the new position when it moved.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        let dt = self
            .last_frame
            .map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_frame = Some(now_ms);

        let (from, elapsed) = {
            let glide = self.glide.as_mut()?;
            glide.elapsed += dt;
            (glide.from, glide.elapsed)
        };
        let progress = (elapsed / SCROLL_DURATION_MS).min(1.0);
        let next = if progress >= 1.0 {
            self.glide = None;
            self.target
        } else {
            from + (self.target - from) * ease(progress)
        };
        if next == self.position {
            return None;
        }
        self.position = next;
        Some(next)
    }

    /// Adopts a native scroll position the glide did not cause (scrollbar,
    /// keyboard, anchor jump). Returns true when it was adopted.
    pub fn sync(&mut self, native: f64) -> bool {
        if (native - self.position).abs() < 1.0 {
            return false;
        }
        self.position = native;
        self.target = native.clamp(0.0, self.limit);
        self.glide = None;
        true
    }
}

/// Smooth wheel scrolling for the window. Emits the scroll position on every
/// frame that moves it and on every foreign native scroll.
pub struct SmoothScroll {
    _frames: TaskHandle,
    _wheel: EventListener,
    _native: EventListener,
}

impl SmoothScroll {
    pub fn attach(scheduler: &dyn Scheduler, on_scroll: Callback<f64>) -> Option<Self> {
        let window = web_sys::window()?;
        let start = window.scroll_y().unwrap_or(0.0);
        let state = Rc::new(RefCell::new(MomentumScroll::new(start, scroll_limit(&window))));

        let wheel = {
            let state = Rc::clone(&state);
            EventListener::new_with_options(
                &window,
                "wheel",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let (Some(wheel), Some(window)) = (event.dyn_ref::<WheelEvent>(), web_sys::window()) else {
                        return;
                    };
                    // ctrl + wheel is pinch-zoom
                    if wheel.ctrl_key() {
                        return;
                    }
                    let delta = wheel_delta_px(wheel.delta_y(), wheel.delta_mode(), viewport_height(&window));
                    let mut state = state.borrow_mut();
                    state.set_limit(scroll_limit(&window));
                    if state.on_wheel(delta) {
                        event.prevent_default();
                    }
                },
            )
        };

        let native = {
            let state = Rc::clone(&state);
            let on_scroll = on_scroll.clone();
            EventListener::new(&window, "scroll", move |_| {
                if let Some(window) = web_sys::window() {
                    let y = window.scroll_y().unwrap_or(0.0);
                    let adopted = state.borrow_mut().sync(y);
                    if adopted {
                        on_scroll.emit(y);
                    }
                }
            })
        };

        let frames = scheduler.frames(Box::new(move |now| {
            let next = state.borrow_mut().tick(now);
            if let Some(y) = next {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, y);
                }
                on_scroll.emit(y);
            }
        }));

        Some(Self {
            _frames: frames,
            _wheel: wheel,
            _native: native,
        })
    }
}

fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

fn scroll_limit(window: &Window) -> f64 {
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| f64::from(e.scroll_height()))
        .unwrap_or(0.0);
    (document_height - viewport_height(window)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_is_monotonic_and_bounded() {
        let samples: Vec<f64> = (0..=100).map(|i| ease(i as f64 / 100.0)).collect();
        assert!(samples.windows(2).all(|w| w[1] >= w[0]));
        assert!(samples.iter().all(|v| (0.0..=1.0).contains(v)));
        assert_eq!(ease(1.0), 1.0);
    }

    #[test]
    fn wheel_deltas_are_normalized_to_pixels() {
        assert_eq!(wheel_delta_px(3.0, DOM_DELTA_LINE, 800.0), 48.0);
        assert_eq!(wheel_delta_px(1.0, DOM_DELTA_PAGE, 800.0), 800.0);
        assert_eq!(wheel_delta_px(120.0, 0, 800.0), 120.0);
    }

    #[test]
    fn wheel_target_is_scaled_and_clamped() {
        let mut scroll = MomentumScroll::new(0.0, 1_000.0);
        assert!(scroll.on_wheel(100.0));
        assert!((scroll.target() - 110.0).abs() < 1e-9);

        assert!(scroll.on_wheel(5_000.0));
        assert_eq!(scroll.target(), 1_000.0);

        let mut top = MomentumScroll::new(0.0, 1_000.0);
        assert!(!top.on_wheel(-50.0));
        assert!(!top.is_gliding());
    }

    #[test]
    fn wheel_toward_a_pinned_edge_is_kept_while_gliding() {
        let mut scroll = MomentumScroll::new(0.0, 1_000.0);
        scroll.tick(0.0);
        assert!(scroll.on_wheel(5_000.0));
        let mid = scroll.tick(100.0).unwrap_or_default();
        assert!(mid > 0.0 && mid < 1_000.0);

        assert!(scroll.on_wheel(100.0));
        assert!(scroll.is_gliding());
        assert_eq!(scroll.target(), 1_000.0);

        scroll.tick(100.0 + SCROLL_DURATION_MS);
        assert_eq!(scroll.position(), 1_000.0);
        assert!(!scroll.on_wheel(100.0));
    }

    #[test]
    fn glide_lands_on_target_after_the_duration() {
        let mut scroll = MomentumScroll::new(0.0, 5_000.0);
        scroll.tick(0.0);
        scroll.on_wheel(1_000.0);

        let mut last = 0.0;
        let mut now = 0.0;
        while now < SCROLL_DURATION_MS {
            now += 16.0;
            if let Some(y) = scroll.tick(now) {
                assert!(y >= last);
                last = y;
            }
        }
        assert!((scroll.position() - 1_100.0).abs() < 1e-9);
        assert!(!scroll.is_gliding());
        assert_eq!(scroll.tick(now + 16.0), None);
    }

    #[test]
    fn idle_frames_emit_nothing() {
        let mut scroll = MomentumScroll::new(300.0, 5_000.0);
        assert_eq!(scroll.tick(0.0), None);
        assert_eq!(scroll.tick(16.0), None);
        assert_eq!(scroll.position(), 300.0);
    }

    #[test]
    fn foreign_scroll_cancels_the_glide() {
        let mut scroll = MomentumScroll::new(0.0, 5_000.0);
        scroll.tick(0.0);
        scroll.on_wheel(500.0);
        let y = scroll.tick(100.0).unwrap_or_default();

        // echo of our own scroll_to
        assert!(!scroll.sync(y + 0.4));
        assert!(scroll.is_gliding());

        assert!(scroll.sync(2_000.0));
        assert!(!scroll.is_gliding());
        assert_eq!(scroll.position(), 2_000.0);
        assert_eq!(scroll.target(), 2_000.0);
    }

    #[test]
    fn shrinking_page_clamps_the_target() {
        let mut scroll = MomentumScroll::new(0.0, 5_000.0);
        scroll.on_wheel(4_000.0);
        scroll.set_limit(1_200.0);
        assert_eq!(scroll.target(), 1_200.0);
    }
}
