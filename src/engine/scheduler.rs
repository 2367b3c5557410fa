use gloo_timers::callback::{Interval, Timeout};

/// Source of cooperative timers.
///
/// Dropping a returned handle cancels its timer, so a generator that owns its
/// handles can never leak a timer past its own lifetime.
pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    fn timeout<F>(&self, millis: u32, callback: F) -> Self::Handle
    where
        F: FnOnce() + 'static;

    fn interval<F>(&self, millis: u32, callback: F) -> Self::Handle
    where
        F: FnMut() + 'static;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserScheduler;

/// Live `setTimeout` / `setInterval` registration.
pub struct BrowserTimer {
    _timeout: Option<Timeout>,
    _interval: Option<Interval>,
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn timeout<F>(&self, millis: u32, callback: F) -> BrowserTimer
    where
        F: FnOnce() + 'static,
    {
        BrowserTimer {
            _timeout: Some(Timeout::new(millis, callback)),
            _interval: None,
        }
    }

    fn interval<F>(&self, millis: u32, callback: F) -> BrowserTimer
    where
        F: FnMut() + 'static,
    {
        BrowserTimer {
            _timeout: None,
            _interval: Some(Interval::new(millis, callback)),
        }
    }
}

#[cfg(test)]
pub mod manual {
    //! Virtual-time scheduler: nothing fires until the test calls `advance`.

    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;
    use std::rc::Rc;

    use super::Scheduler;

    enum Job {
        Once(Box<dyn FnOnce()>),
        Repeat(Box<dyn FnMut()>, u64),
    }

    struct Task {
        due: u64,
        alive: Rc<Cell<bool>>,
        job: Job,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        tasks: BTreeMap<u64, Task>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct ManualTimer {
        alive: Rc<Cell<bool>>,
    }

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            self.alive.set(false);
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        /// Timers that are still registered and not cancelled.
        pub fn pending(&self) -> usize {
            self.clock
                .borrow()
                .tasks
                .values()
                .filter(|t| t.alive.get())
                .count()
        }

        /// Runs every timer due within the next `millis`, in due order.
        pub fn advance(&self, millis: u64) {
            let target = self.now() + millis;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    clock.tasks.retain(|_, t| t.alive.get());
                    let id = clock
                        .tasks
                        .iter()
                        .filter(|(_, t)| t.due <= target)
                        .min_by_key(|(id, t)| (t.due, **id))
                        .map(|(id, _)| *id);
                    match id.and_then(|id| clock.tasks.remove(&id)) {
                        Some(task) => {
                            clock.now = task.due;
                            task
                        }
                        None => break,
                    }
                };
                // The clock is released here so callbacks can schedule more work.
                match next.job {
                    Job::Once(callback) => callback(),
                    Job::Repeat(mut callback, period) => {
                        callback();
                        if next.alive.get() {
                            self.insert(Task {
                                due: next.due + period,
                                alive: next.alive,
                                job: Job::Repeat(callback, period),
                            });
                        }
                    }
                }
            }
            self.clock.borrow_mut().now = target;
        }

        fn insert(&self, task: Task) {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            clock.tasks.insert(id, task);
        }

        fn register(&self, delay: u32, job: Job) -> ManualTimer {
            let alive = Rc::new(Cell::new(true));
            let due = self.now() + u64::from(delay);
            self.insert(Task {
                due,
                alive: Rc::clone(&alive),
                job,
            });
            ManualTimer { alive }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualTimer;

        fn timeout<F>(&self, millis: u32, callback: F) -> ManualTimer
        where
            F: FnOnce() + 'static,
        {
            self.register(millis, Job::Once(Box::new(callback)))
        }

        fn interval<F>(&self, millis: u32, callback: F) -> ManualTimer
        where
            F: FnMut() + 'static,
        {
            let period = u64::from(millis.max(1));
            self.register(millis, Job::Repeat(Box::new(callback), period))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::manual::ManualScheduler;
    use super::Scheduler;

    #[test]
    fn timeouts_fire_once_at_their_due_time() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&fired);
        let _t = scheduler.timeout(100, move || log.borrow_mut().push("a"));

        scheduler.advance(99);
        assert!(fired.borrow().is_empty());
        scheduler.advance(1);
        assert_eq!(*fired.borrow(), vec!["a"]);
        scheduler.advance(1_000);
        assert_eq!(fired.borrow().len(), 1);
    }

    #[test]
    fn intervals_repeat_until_dropped() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&ticks);
        let handle = scheduler.interval(500, move || *counter.borrow_mut() += 1);

        scheduler.advance(1_600);
        assert_eq!(*ticks.borrow(), 3);

        drop(handle);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(5_000);
        assert_eq!(*ticks.borrow(), 3);
    }
}
