use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;

/// Keeps a scheduled task or listener alive. Dropping the handle cancels it.
pub struct TaskHandle {
    _guard: Box<dyn Any>,
}

impl TaskHandle {
    pub fn new<G: 'static>(guard: G) -> Self {
        Self {
            _guard: Box::new(guard),
        }
    }
}

/// Timers and per-frame loops, so the animation code never touches a
/// particular frame-callback primitive directly.
pub trait Scheduler {
    /// Runs `task` once after `millis`.
    fn timeout(&self, millis: u32, task: Box<dyn FnOnce()>) -> TaskHandle;

    /// Runs `task` every frame with the frame timestamp in milliseconds,
    /// until the returned handle is dropped.
    fn frames(&self, task: Box<dyn FnMut(f64)>) -> TaskHandle;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn timeout(&self, millis: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        TaskHandle::new(Timeout::new(millis, task))
    }

    fn frames(&self, task: Box<dyn FnMut(f64)>) -> TaskHandle {
        let state = Rc::new(FrameState {
            active: Cell::new(true),
            frame: RefCell::new(None),
            task: RefCell::new(task),
        });
        request_next_frame(Rc::clone(&state));
        TaskHandle::new(FrameLoop { state })
    }
}

struct FrameState {
    active: Cell<bool>,
    frame: RefCell<Option<AnimationFrame>>,
    task: RefCell<Box<dyn FnMut(f64)>>,
}

fn request_next_frame(state: Rc<FrameState>) {
    let next = Rc::clone(&state);
    let handle = request_animation_frame(move |timestamp| {
        next.frame.borrow_mut().take();
        (next.task.borrow_mut())(timestamp);
        // the task may have torn the loop down
        if next.active.get() {
            request_next_frame(next);
        }
    });
    *state.frame.borrow_mut() = Some(handle);
}

struct FrameLoop {
    state: Rc<FrameState>,
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.state.active.set(false);
        if let Ok(mut frame) = self.state.frame.try_borrow_mut() {
            frame.take();
        }
    }
}

#[cfg(test)]
pub mod manual {
    //! Virtual clock used by the tests. Time only moves when told to.

    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::{Scheduler, TaskHandle};

    type FrameTask = Rc<RefCell<Box<dyn FnMut(f64)>>>;

    #[derive(Default)]
    struct Queue {
        now: u64,
        next_id: u64,
        timers: Vec<PendingTimer>,
        frames: Vec<(u64, FrameTask)>,
    }

    struct PendingTimer {
        id: u64,
        due: u64,
        task: Box<dyn FnOnce()>,
    }

    struct Cancel {
        queue: Weak<RefCell<Queue>>,
        id: u64,
    }

    impl Drop for Cancel {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                if let Ok(mut queue) = queue.try_borrow_mut() {
                    queue.timers.retain(|t| t.id != self.id);
                    queue.frames.retain(|(id, _)| *id != self.id);
                }
            }
        }
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.queue.borrow().now
        }

        pub fn pending_timers(&self) -> usize {
            self.queue.borrow().timers.len()
        }

        pub fn frame_loops(&self) -> usize {
            self.queue.borrow().frames.len()
        }

        /// Fires every timer due up to `until`, in due order, then parks the clock there.
        pub fn advance_to(&self, until: u64) {
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let earliest = queue
                        .timers
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= until)
                        .min_by_key(|(_, t)| (t.due, t.id))
                        .map(|(index, _)| index);
                    earliest.map(|index| {
                        let timer = queue.timers.remove(index);
                        queue.now = queue.now.max(timer.due);
                        timer.task
                    })
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
            let mut queue = self.queue.borrow_mut();
            queue.now = queue.now.max(until);
        }

        pub fn advance_by(&self, millis: u64) {
            let until = self.now() + millis;
            self.advance_to(until);
        }

        /// Runs every registered frame loop once at the current time.
        pub fn frame(&self) {
            let (now, tasks): (u64, Vec<FrameTask>) = {
                let queue = self.queue.borrow();
                (
                    queue.now,
                    queue.frames.iter().map(|(_, task)| Rc::clone(task)).collect(),
                )
            };
            for task in tasks {
                (task.borrow_mut())(now as f64);
            }
        }

        fn register(&self) -> (u64, Cancel) {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            (
                id,
                Cancel {
                    queue: Rc::downgrade(&self.queue),
                    id,
                },
            )
        }
    }

    impl Scheduler for ManualScheduler {
        fn timeout(&self, millis: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
            let (id, cancel) = self.register();
            let mut queue = self.queue.borrow_mut();
            let due = queue.now + u64::from(millis);
            queue.timers.push(PendingTimer { id, due, task });
            TaskHandle::new(cancel)
        }

        fn frames(&self, task: Box<dyn FnMut(f64)>) -> TaskHandle {
            let (id, cancel) = self.register();
            self.queue
                .borrow_mut()
                .frames
                .push((id, Rc::new(RefCell::new(task))));
            TaskHandle::new(cancel)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::manual::ManualScheduler;
    use super::Scheduler;

    #[test]
    fn timers_fire_in_due_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let handles: Vec<_> = [(300, "late"), (100, "early"), (200, "middle")]
            .into_iter()
            .map(|(delay, name)| {
                let log = Rc::clone(&log);
                scheduler.timeout(delay, Box::new(move || log.borrow_mut().push(name)))
            })
            .collect();

        scheduler.advance_to(250);
        assert_eq!(*log.borrow(), vec!["early", "middle"]);
        scheduler.advance_to(300);
        assert_eq!(*log.borrow(), vec!["early", "middle", "late"]);
        drop(handles);
    }

    #[test]
    fn dropping_a_handle_cancels_the_timer() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(false));
        let handle = {
            let fired = Rc::clone(&fired);
            scheduler.timeout(10, Box::new(move || *fired.borrow_mut() = true))
        };
        drop(handle);
        assert_eq!(scheduler.pending_timers(), 0);
        scheduler.advance_by(100);
        assert!(!*fired.borrow());
    }

    #[test]
    fn frame_loops_run_until_cancelled() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(RefCell::new(0));
        let handle = {
            let count = Rc::clone(&count);
            scheduler.frames(Box::new(move |_| *count.borrow_mut() += 1))
        };
        scheduler.frame();
        scheduler.frame();
        drop(handle);
        scheduler.frame();
        assert_eq!(*count.borrow(), 2);
        assert_eq!(scheduler.frame_loops(), 0);
    }

    #[test]
    fn timers_scheduled_from_a_timer_use_the_firing_time() {
        let scheduler = ManualScheduler::new();
        let fired_at = Rc::new(RefCell::new(None));
        let inner_handle = Rc::new(RefCell::new(None));
        let _outer = {
            let scheduler2 = scheduler.clone();
            let fired_at = Rc::clone(&fired_at);
            let inner_handle = Rc::clone(&inner_handle);
            scheduler.timeout(
                100,
                Box::new(move || {
                    let clock = scheduler2.clone();
                    let handle = scheduler2.timeout(
                        50,
                        Box::new(move || *fired_at.borrow_mut() = Some(clock.now())),
                    );
                    *inner_handle.borrow_mut() = Some(handle);
                }),
            )
        };
        scheduler.advance_to(1_000);
        assert_eq!(*fired_at.borrow(), Some(150));
    }
}
