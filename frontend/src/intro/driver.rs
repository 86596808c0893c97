use std::cell::RefCell;
use std::rc::{Rc, Weak};

use yew::Callback;

use crate::config::IntroTimings;
#[cfg(test)]
use crate::intro::sequencer::IntroPhase;
use crate::intro::sequencer::{IntroEvent, IntroSequencer, IntroSignal};
use crate::utils::scheduler::{Scheduler, TaskHandle};

/// Outward notifications of an [`IntroDriver`].
#[derive(Clone, Default)]
pub struct IntroCallbacks {
    /// Snapshot after every signal that changed something.
    pub on_update: Callback<IntroSequencer>,
    /// Once, when the page-loaded latch is set by the load event or the
    /// safety timeout.
    pub on_page_loaded: Callback<()>,
    /// Once, synchronously, on the transition into `Revealing`.
    pub on_reveal: Callback<()>,
}

/// Runs an [`IntroSequencer`] against real (or virtual) timers.
///
/// Starting the driver arms the dwell timer and the load safety timeout.
/// Dropping the driver cancels every pending timer and releases whatever was
/// handed to [`IntroDriver::keep_until_hidden`].
pub struct IntroDriver {
    inner: Rc<RefCell<DriverState>>,
}

struct DriverState {
    machine: IntroSequencer,
    scheduler: Rc<dyn Scheduler>,
    timings: IntroTimings,
    callbacks: IntroCallbacks,
    dwell: Option<TaskHandle>,
    safety: Option<TaskHandle>,
    exit: Option<TaskHandle>,
    retained: Vec<TaskHandle>,
}

impl IntroDriver {
    pub fn start(
        scheduler: Rc<dyn Scheduler>,
        timings: IntroTimings,
        callbacks: IntroCallbacks,
    ) -> Self {
        let inner = Rc::new(RefCell::new(DriverState {
            machine: IntroSequencer::new(),
            scheduler,
            timings,
            callbacks,
            dwell: None,
            safety: None,
            exit: None,
            retained: Vec::new(),
        }));
        let dwell = schedule(&inner, timings.dwell_ms, IntroSignal::DwellElapsed);
        let safety = schedule(&inner, timings.safety_timeout_ms, IntroSignal::PageLoaded);
        {
            let mut state = inner.borrow_mut();
            state.dwell = Some(dwell);
            state.safety = Some(safety);
        }
        log::debug!("intro started: {:?}", timings);
        Self { inner }
    }

    pub fn page_loaded(&self) {
        dispatch(&self.inner, IntroSignal::PageLoaded);
    }

    /// A detached trigger for the host load event. Does nothing once the
    /// driver is gone.
    pub fn page_loaded_trigger(&self) -> impl Fn() + 'static {
        let weak = Rc::downgrade(&self.inner);
        move || {
            if let Some(inner) = weak.upgrade() {
                dispatch(&inner, IntroSignal::PageLoaded);
            }
        }
    }

    /// Holds a listener (or any handle) until the overlay is hidden.
    pub fn keep_until_hidden(&self, handle: TaskHandle) {
        let mut state = self.inner.borrow_mut();
        if state.machine.overlay_mounted() {
            state.retained.push(handle);
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> IntroPhase {
        self.inner.borrow().machine.phase()
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> IntroSequencer {
        self.inner.borrow().machine.clone()
    }
}

fn schedule(inner: &Rc<RefCell<DriverState>>, millis: u32, signal: IntroSignal) -> TaskHandle {
    let weak: Weak<RefCell<DriverState>> = Rc::downgrade(inner);
    let scheduler = Rc::clone(&inner.borrow().scheduler);
    scheduler.timeout(
        millis,
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                dispatch(&inner, signal);
            }
        }),
    )
}

fn dispatch(inner: &Rc<RefCell<DriverState>>, signal: IntroSignal) {
    let (event, snapshot, loaded_now, callbacks, exit_ms) = {
        let mut state = inner.borrow_mut();
        let before = state.machine.clone();
        let event = state.machine.handle(signal);
        if event.is_none() && state.machine == before {
            return;
        }
        let loaded_now = !before.page_loaded() && state.machine.page_loaded();
        (
            event,
            state.machine.clone(),
            loaded_now,
            state.callbacks.clone(),
            state.timings.exit_ms,
        )
    };
    log::debug!("intro {:?} -> {:?}", signal, snapshot.phase());

    let released = match event {
        Some(IntroEvent::BeginReveal) => {
            log::info!("intro reveal started");
            let exit = schedule(inner, exit_ms, IntroSignal::ExitElapsed);
            let mut state = inner.borrow_mut();
            state.exit = Some(exit);
            let safety = state.safety.take();
            safety.into_iter().collect()
        }
        Some(IntroEvent::Unmount) => {
            log::debug!("intro overlay hidden");
            let mut state = inner.borrow_mut();
            let mut released: Vec<TaskHandle> = state.retained.drain(..).collect();
            released.extend(state.dwell.take());
            released.extend(state.safety.take());
            released.extend(state.exit.take());
            released
        }
        None => Vec::new(),
    };
    // handles are dropped outside the borrow, a cancel may touch the scheduler
    drop(released);

    callbacks.on_update.emit(snapshot);
    if loaded_now {
        callbacks.on_page_loaded.emit(());
    }
    if event == Some(IntroEvent::BeginReveal) {
        callbacks.on_reveal.emit(());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use yew::Callback;

    use super::{IntroCallbacks, IntroDriver};
    use crate::config::IntroTimings;
    use crate::intro::sequencer::IntroPhase;
    use crate::utils::scheduler::manual::ManualScheduler;
    use crate::utils::scheduler::TaskHandle;

    struct Harness {
        clock: ManualScheduler,
        driver: IntroDriver,
        reveals: Rc<RefCell<Vec<u64>>>,
        loads: Rc<RefCell<Vec<u64>>>,
        phases: Rc<RefCell<Vec<(u64, IntroPhase)>>>,
    }

    fn harness() -> Harness {
        let clock = ManualScheduler::new();
        let reveals = Rc::new(RefCell::new(Vec::new()));
        let loads = Rc::new(RefCell::new(Vec::new()));
        let phases = Rc::new(RefCell::new(Vec::new()));
        let on_update = {
            let clock = clock.clone();
            let phases = Rc::clone(&phases);
            Callback::from(move |intro: crate::intro::sequencer::IntroSequencer| {
                phases.borrow_mut().push((clock.now(), intro.phase()));
            })
        };
        let on_reveal = {
            let clock = clock.clone();
            let reveals = Rc::clone(&reveals);
            Callback::from(move |_: ()| reveals.borrow_mut().push(clock.now()))
        };
        let on_page_loaded = {
            let clock = clock.clone();
            let loads = Rc::clone(&loads);
            Callback::from(move |_: ()| loads.borrow_mut().push(clock.now()))
        };
        let driver = IntroDriver::start(
            Rc::new(clock.clone()),
            IntroTimings::default(),
            IntroCallbacks {
                on_update,
                on_page_loaded,
                on_reveal,
            },
        );
        Harness {
            clock,
            driver,
            reveals,
            loads,
            phases,
        }
    }

    fn phase_at(h: &Harness, phase: IntroPhase) -> Option<u64> {
        h.phases
            .borrow()
            .iter()
            .find(|(_, p)| *p == phase)
            .map(|(t, _)| *t)
    }

    #[test]
    fn early_load_is_bound_by_dwell() {
        let h = harness();
        h.clock.advance_to(500);
        h.driver.page_loaded();
        assert_eq!(h.driver.phase(), IntroPhase::AwaitingNetwork);

        h.clock.advance_to(2_499);
        assert!(h.reveals.borrow().is_empty());

        h.clock.advance_to(10_000);
        assert_eq!(*h.reveals.borrow(), vec![2_500]);
        assert_eq!(phase_at(&h, IntroPhase::Revealing), Some(2_500));
        assert_eq!(phase_at(&h, IntroPhase::Hidden), Some(3_700));
        assert_eq!(h.clock.pending_timers(), 0);
    }

    #[test]
    fn missing_load_event_is_bound_by_safety_timeout() {
        let h = harness();
        h.clock.advance_to(2_500);
        assert_eq!(h.driver.phase(), IntroPhase::ReadyToExit);

        h.clock.advance_to(4_999);
        assert!(h.reveals.borrow().is_empty());

        h.clock.advance_to(5_000);
        assert_eq!(*h.reveals.borrow(), vec![5_000]);

        h.clock.advance_to(6_200);
        assert_eq!(h.driver.phase(), IntroPhase::Hidden);
    }

    #[test]
    fn page_loaded_is_reported_once_from_either_source() {
        let h = harness();
        h.clock.advance_to(4_999);
        assert!(h.loads.borrow().is_empty());
        h.clock.advance_to(5_000);
        assert_eq!(*h.loads.borrow(), vec![5_000]);
        h.driver.page_loaded();
        assert_eq!(h.loads.borrow().len(), 1);

        let early = harness();
        early.clock.advance_to(800);
        early.driver.page_loaded();
        early.driver.page_loaded();
        early.clock.advance_to(10_000);
        assert_eq!(*early.loads.borrow(), vec![800]);
    }

    #[test]
    fn repeated_load_signals_reveal_once() {
        let h = harness();
        let trigger = h.driver.page_loaded_trigger();
        trigger();
        h.clock.advance_to(3_000);
        trigger();
        h.driver.page_loaded();
        h.clock.advance_to(20_000);
        trigger();
        assert_eq!(h.reveals.borrow().len(), 1);
        assert_eq!(
            h.phases
                .borrow()
                .iter()
                .filter(|(_, p)| *p == IntroPhase::Revealing)
                .count(),
            1
        );
    }

    #[test]
    fn dropping_the_driver_cancels_everything() {
        let h = harness();
        let trigger = h.driver.page_loaded_trigger();
        drop(h.driver);
        assert_eq!(h.clock.pending_timers(), 0);

        trigger();
        h.clock.advance_to(10_000);
        assert!(h.reveals.borrow().is_empty());
        assert!(h.phases.borrow().is_empty());
    }

    #[test]
    fn retained_handles_are_released_when_hidden() {
        let h = harness();
        let released = Rc::new(RefCell::new(false));

        struct Flag(Rc<RefCell<bool>>);
        impl Drop for Flag {
            fn drop(&mut self) {
                *self.0.borrow_mut() = true;
            }
        }

        h.driver
            .keep_until_hidden(TaskHandle::new(Flag(Rc::clone(&released))));
        h.driver.page_loaded();
        h.clock.advance_to(3_699);
        assert!(!*released.borrow());
        h.clock.advance_to(3_700);
        assert!(*released.borrow());
        assert!(!h.driver.snapshot().overlay_mounted());
    }
}
