//! A single streak that re-fires itself at random intervals.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::scheduler::Scheduler;
use super::{ensure_at_most, ensure_delay, EngineError, Span, MAX_DELAY_MS};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CometConfig {
    pub first_delay_ms: u32,
    pub gap_ms: Span,
    /// Flights start within this percentage of the top-left corner.
    pub reach: f64,
}

impl Default for CometConfig {
    fn default() -> Self {
        Self {
            first_delay_ms: 2_000,
            gap_ms: Span::new(3_000.0, 7_000.0),
            reach: 30.0,
        }
    }
}

impl CometConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        self.gap_ms.validate("gap_ms")?;
        if self.gap_ms.min < 1.0 {
            return Err(EngineError::Zero("gap_ms"));
        }
        ensure_at_most("gap_ms", self.gap_ms.max, f64::from(MAX_DELAY_MS))?;
        ensure_delay("first_delay_ms", self.first_delay_ms)?;
        Span::new(0.0, self.reach).validate("reach")?;
        ensure_at_most("reach", self.reach, 100.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flight {
    /// Changes on every flight so the element is re-created and the CSS
    /// animation replays.
    pub seq: u64,
    /// vw
    pub left: f64,
    /// vh
    pub top: f64,
}

struct CometState<S: Scheduler> {
    flight: Option<Flight>,
    rng: Box<dyn RngCore>,
    config: CometConfig,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> CometState<S> {
    /// Launches the next flight and returns the delay until the one after.
    fn fire(&mut self) -> u32 {
        let seq = self.flight.map_or(0, |f| f.seq + 1);
        let reach = self.config.reach;
        self.flight = Some(Flight {
            seq,
            left: self.rng.gen_range(0.0..reach.max(f64::EPSILON)),
            top: self.rng.gen_range(0.0..reach.max(f64::EPSILON)),
        });
        self.config.gap_ms.sample(self.rng.as_mut()) as u32
    }
}

pub struct Comet<S: Scheduler> {
    state: Rc<RefCell<CometState<S>>>,
}

impl<S: Scheduler> Comet<S> {
    pub fn new<F>(scheduler: S, rng: Box<dyn RngCore>, config: CometConfig, notify: F) -> Self
    where
        F: Fn() + 'static,
    {
        let first = config.first_delay_ms;
        let state = Rc::new(RefCell::new(CometState {
            flight: None,
            rng,
            config,
            pending: None,
        }));
        let handle = arm(Rc::downgrade(&state), scheduler, first, Rc::new(notify));
        state.borrow_mut().pending = Some(handle);
        Self { state }
    }

    pub fn flight(&self) -> Option<Flight> {
        self.state.borrow().flight
    }
}

// Timer closures only hold a weak reference; the comet owns the pending
// handle, so dropping the comet drops the timer with it.
fn arm<S: Scheduler>(
    state: Weak<RefCell<CometState<S>>>,
    scheduler: S,
    delay: u32,
    notify: Rc<dyn Fn()>,
) -> S::Handle {
    let next = scheduler.clone();
    scheduler.timeout(delay, move || {
        let Some(state) = state.upgrade() else {
            return;
        };
        let gap = state.borrow_mut().fire();
        notify();
        let handle = arm(Rc::downgrade(&state), next, gap, notify);
        state.borrow_mut().pending = Some(handle);
    })
}
