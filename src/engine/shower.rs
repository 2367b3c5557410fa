//! Hover-driven shooting-star generator.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::scheduler::Scheduler;
use super::{ensure_at_most, ensure_delay, ensure_nonzero, EngineError, Span};

/// Off-screen coordinate a trajectory starts from or ends at, in percent.
pub const NEAR_EDGE: f64 = -10.0;
pub const FAR_EDGE: f64 = 110.0;
/// Largest sideways drift, in percent of the host box.
pub const MAX_DRIFT: f64 = 100.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowerConfig {
    pub seed_delay_ms: u32,
    pub interval_ms: u32,
    pub grace_ms: u32,
    pub duration: Span,
    pub delay: Span,
    pub drift: f64,
}

impl Default for ShowerConfig {
    fn default() -> Self {
        Self {
            seed_delay_ms: 100,
            interval_ms: 500,
            grace_ms: 500,
            duration: Span::new(1.5, 3.0),
            delay: Span::new(0.0, 0.5),
            drift: 20.0,
        }
    }
}

impl ShowerConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        ensure_nonzero("interval_ms", self.interval_ms)?;
        ensure_delay("interval_ms", self.interval_ms)?;
        ensure_delay("seed_delay_ms", self.seed_delay_ms)?;
        ensure_delay("grace_ms", self.grace_ms)?;
        self.duration.validate("duration")?;
        self.delay.validate("delay")?;
        if !(self.drift.is_finite() && self.drift >= 0.0) {
            return Err(EngineError::EmptyRange {
                name: "drift",
                min: -self.drift,
                max: self.drift,
            });
        }
        ensure_at_most("drift", self.drift, MAX_DRIFT)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..4) {
            0 => Edge::Top,
            1 => Edge::Right,
            2 => Edge::Bottom,
            _ => Edge::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub edge: Edge,
    pub start: Point,
    pub end: Point,
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
}

impl Particle {
    /// Travel from start to end as `(dx, dy)` in percent of the host box.
    pub fn displacement(&self) -> (f64, f64) {
        (self.end.x - self.start.x, self.end.y - self.start.y)
    }
}

/// Builds one particle entering from a random edge.
pub fn launch<R: Rng + ?Sized>(rng: &mut R, id: u64, config: &ShowerConfig) -> Particle {
    let edge = Edge::pick(rng);
    let along = rng.gen_range(0.0..=100.0);
    let drifted = (along + rng.gen_range(-config.drift..=config.drift)).clamp(NEAR_EDGE, FAR_EDGE);

    let (start, end) = match edge {
        Edge::Top => (
            Point { x: along, y: NEAR_EDGE },
            Point { x: drifted, y: FAR_EDGE },
        ),
        Edge::Right => (
            Point { x: FAR_EDGE, y: along },
            Point { x: NEAR_EDGE, y: drifted },
        ),
        Edge::Bottom => (
            Point { x: along, y: FAR_EDGE },
            Point { x: drifted, y: NEAR_EDGE },
        ),
        Edge::Left => (
            Point { x: NEAR_EDGE, y: along },
            Point { x: FAR_EDGE, y: drifted },
        ),
    };

    Particle {
        id,
        edge,
        start,
        end,
        duration: config.duration.sample_inclusive(rng),
        delay: config.delay.sample_inclusive(rng),
    }
}

struct ShowerState {
    particles: Vec<Particle>,
    next_id: u64,
    rng: Box<dyn RngCore>,
    config: ShowerConfig,
}

impl ShowerState {
    fn emit(&mut self) {
        let id = self.next_id;
        self.next_id += 1;
        let particle = launch(self.rng.as_mut(), id, &self.config);
        self.particles.push(particle);
    }
}

/// Active set of shooting stars with its own timers.
///
/// `start` seeds one particle shortly after the trigger and keeps adding one
/// per interval; `stop` halts production and empties the set once the grace
/// delay has let in-flight animations finish. Every timer handle lives in
/// `timers`, so dropping the shower cancels all of them.
///
/// `notify` runs after every timer-driven change. Changes made by `start` and
/// `stop` themselves are visible as soon as they return.
pub struct Shower<S: Scheduler> {
    state: Rc<RefCell<ShowerState>>,
    scheduler: S,
    notify: Rc<dyn Fn()>,
    active: bool,
    timers: Vec<S::Handle>,
}

impl<S: Scheduler> Shower<S> {
    pub fn new<F>(scheduler: S, rng: Box<dyn RngCore>, config: ShowerConfig, notify: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            state: Rc::new(RefCell::new(ShowerState {
                particles: Vec::new(),
                next_id: 0,
                rng,
                config,
            })),
            scheduler,
            notify: Rc::new(notify),
            active: false,
            timers: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn particles(&self) -> Vec<Particle> {
        self.state.borrow().particles.clone()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn start(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        // Drops a pending grace timer from the previous stop.
        self.timers.clear();
        self.state.borrow_mut().particles.clear();

        let (seed_delay, interval) = {
            let state = self.state.borrow();
            (state.config.seed_delay_ms, state.config.interval_ms)
        };
        debug!("shower started, one star every {interval}ms");

        let seed = {
            let state = Rc::clone(&self.state);
            let notify = Rc::clone(&self.notify);
            self.scheduler.timeout(seed_delay, move || {
                state.borrow_mut().emit();
                notify();
            })
        };
        let repeat = {
            let state = Rc::clone(&self.state);
            let notify = Rc::clone(&self.notify);
            self.scheduler.interval(interval, move || {
                state.borrow_mut().emit();
                notify();
            })
        };
        self.timers.push(seed);
        self.timers.push(repeat);
    }

    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.timers.clear();

        let grace = self.state.borrow().config.grace_ms;
        debug!("shower stopped, clearing in {grace}ms");
        let state = Rc::clone(&self.state);
        let notify = Rc::clone(&self.notify);
        let clear = self.scheduler.timeout(grace, move || {
            state.borrow_mut().particles.clear();
            notify();
        });
        self.timers.push(clear);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::engine::scheduler::manual::ManualScheduler;

    fn shower(scheduler: &ManualScheduler) -> Shower<ManualScheduler> {
        Shower::new(
            scheduler.clone(),
            Box::new(StdRng::seed_from_u64(42)),
            ShowerConfig::default(),
            || {},
        )
    }

    #[test]
    fn trajectories_stay_within_spill_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = ShowerConfig::default();
        let mut edges = HashSet::new();
        for id in 0..2_000 {
            let p = launch(&mut rng, id, &config);
            for v in [p.start.x, p.start.y, p.end.x, p.end.y] {
                assert!((NEAR_EDGE..=FAR_EDGE).contains(&v), "{v} out of bounds");
            }
            assert!((1.5..=3.0).contains(&p.duration));
            assert!((0.0..=0.5).contains(&p.delay));
            edges.insert(format!("{:?}", p.edge));
        }
        assert_eq!(edges.len(), 4);
    }

    #[test]
    fn top_edge_falls_to_the_bottom() {
        let mut rng = StdRng::seed_from_u64(9);
        let config = ShowerConfig::default();
        let p = (0..)
            .map(|id| launch(&mut rng, id, &config))
            .find(|p| p.edge == Edge::Top)
            .unwrap();
        assert_eq!(p.start.y, NEAR_EDGE);
        assert_eq!(p.end.y, FAR_EDGE);
        assert!((p.end.x - p.start.x).abs() <= config.drift);
    }

    #[test]
    fn at_most_one_star_in_the_first_100ms() {
        let scheduler = ManualScheduler::new();
        let mut shower = shower(&scheduler);
        shower.start();

        scheduler.advance(99);
        assert_eq!(shower.len(), 0);
        scheduler.advance(1);
        assert_eq!(shower.len(), 1);
    }

    #[test]
    fn hover_on_then_off_empties_after_grace() {
        let scheduler = ManualScheduler::new();
        let mut shower = shower(&scheduler);

        shower.start();
        scheduler.advance(600);
        assert!(shower.len() >= 1);

        shower.stop();
        scheduler.advance(600);
        assert!(shower.is_empty());
    }

    #[test]
    fn particles_keep_arriving_while_hovered() {
        let scheduler = ManualScheduler::new();
        let mut shower = shower(&scheduler);
        shower.start();
        scheduler.advance(2_000);
        // seed + one per 500ms
        assert_eq!(shower.len(), 5);

        let ids: HashSet<u64> = shower.particles().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn restarting_during_grace_keeps_the_new_stars() {
        let scheduler = ManualScheduler::new();
        let mut shower = shower(&scheduler);
        shower.start();
        scheduler.advance(600);
        shower.stop();
        scheduler.advance(200);
        shower.start();
        assert!(shower.is_empty());

        scheduler.advance(400);
        // The old grace timer would have fired at 300ms into this run.
        assert_eq!(shower.len(), 1);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let scheduler = ManualScheduler::new();
        let mut shower = shower(&scheduler);
        shower.stop();
        assert_eq!(scheduler.pending(), 0);

        shower.start();
        shower.start();
        assert_eq!(scheduler.pending(), 2);
        scheduler.advance(100);
        assert_eq!(shower.len(), 1);
    }

    #[test]
    fn dropping_the_shower_cancels_its_timers() {
        let scheduler = ManualScheduler::new();
        let mut shower = shower(&scheduler);
        shower.start();
        assert_eq!(scheduler.pending(), 2);
        drop(shower);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn every_change_is_announced() {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut shower = Shower::new(
            scheduler.clone(),
            Box::new(StdRng::seed_from_u64(3)),
            ShowerConfig::default(),
            move || counter.set(counter.get() + 1),
        );
        shower.start();
        scheduler.advance(500);
        shower.stop();
        scheduler.advance(500);
        // seed, first interval, grace clear
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = ShowerConfig {
            interval_ms: 0,
            ..ShowerConfig::default()
        };
        assert!(matches!(config.validate(), Err(EngineError::Zero("interval_ms"))));
        assert!(ShowerConfig::default().validate().is_ok());
    }
}
