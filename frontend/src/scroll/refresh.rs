use std::cell::Cell;

use yew::Callback;

use crate::scroll::signals::{LayoutSnapshot, ScrollSignals};

/// Owns the latest [`ScrollSignals`] and decides which part of them each page
/// event recomputes. Layout is read through `measure` on every trigger.
pub struct ScrollRefresh {
    latest: Cell<ScrollSignals>,
    measure: Box<dyn Fn() -> LayoutSnapshot>,
    on_change: Callback<ScrollSignals>,
}

impl ScrollRefresh {
    pub fn new<M>(measure: M, on_change: Callback<ScrollSignals>) -> Self
    where
        M: Fn() -> LayoutSnapshot + 'static,
    {
        Self {
            latest: Cell::new(ScrollSignals::default()),
            measure: Box::new(measure),
            on_change,
        }
    }

    pub fn on_scroll(&self) {
        self.recompute_all();
    }

    /// The host load event or the safety timeout standing in for it.
    pub fn on_page_loaded(&self) {
        self.recompute_all();
    }

    /// The content just became visible; only the hero flag is re-read.
    pub fn on_reveal_start(&self) {
        let layout = (self.measure)();
        self.publish(self.latest.get().recompute_hero(layout.hero));
    }

    fn recompute_all(&self) {
        let layout = (self.measure)();
        self.publish(self.latest.get().recompute(&layout));
    }

    fn publish(&self, next: ScrollSignals) {
        if next != self.latest.get() {
            self.latest.set(next);
            self.on_change.emit(next);
        }
    }
}
