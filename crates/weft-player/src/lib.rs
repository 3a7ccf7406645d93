//! Pausable timed stepping loop for automata.
//!
//! A [`Player`] drives anything implementing
//! [`Automaton`](weft_automata::Automaton) at a user-controlled cadence. It
//! is a two-state transport: `Idle` until started, `Running` while stepping,
//! and back to `Idle` on [`Player::pause`] or when the automaton reports
//! exhaustion. Stepping is synchronous, so pausing never interrupts a step
//! in progress.
//!
//! The player is poll-driven: embed [`Player::tick`] in whatever frame loop
//! hosts the rendering surface and redraw whenever it reports a step. A
//! blocking [`Player::run`] loop is provided for headless use.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use weft_automata::RowAutomaton;
//! use weft_player::{Player, Tick};
//!
//! let mut rows = RowAutomaton::new(64, 40, 30).unwrap();
//! let mut player = Player::new();
//! player.set_speed(100); // fastest: 100 ms between steps
//!
//! let t0 = Instant::now();
//! player.start(t0);
//! assert_eq!(player.tick(t0, &mut rows), Tick::Stepped);
//! assert_eq!(player.tick(t0, &mut rows), Tick::Waiting);
//!
//! let t1 = t0 + Duration::from_millis(100);
//! assert_eq!(player.tick(t1, &mut rows), Tick::Stepped);
//! ```

use std::thread;
use std::time::{Duration, Instant};

use weft_automata::{Automaton, StepOutcome};

/// Slowest speed setting.
pub const MIN_SPEED: u8 = 1;

/// Fastest speed setting.
pub const MAX_SPEED: u8 = 100;

/// Maps a speed setting in `1..=100` to a step interval.
///
/// The mapping is `1000 - 9 * speed` milliseconds (speed 1 is roughly one
/// step per second, speed 100 is ten per second). This is a tuning default
/// kept for parity with the surface it came from, not a contract; callers
/// needing a different cadence should use [`Player::set_interval`].
/// Out-of-range speeds are clamped.
pub fn interval_for_speed(speed: u8) -> Duration {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED) as u64;
    Duration::from_millis(1000 - 9 * speed)
}

/// Transport state of a [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// Not stepping.
    #[default]
    Idle,
    /// Actively stepping on schedule.
    Running,
}

/// What a call to [`Player::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The transport is idle; nothing happened.
    Idle,
    /// Running, but the next step is not due yet.
    Waiting,
    /// One step was advanced; the caller should redraw now.
    Stepped,
    /// The automaton is exhausted; the transport has paused itself.
    Finished,
}

/// Repeatedly steps an automaton at a fixed interval.
#[derive(Debug, Clone)]
pub struct Player {
    transport: Transport,
    interval: Duration,
    next_due: Option<Instant>,
}

impl Player {
    /// Creates an idle player at the default speed (50).
    pub fn new() -> Self {
        Self::with_interval(interval_for_speed(50))
    }

    /// Creates an idle player with an explicit step interval.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            transport: Transport::Idle,
            interval,
            next_due: None,
        }
    }

    /// Returns the transport state.
    pub fn transport(&self) -> Transport {
        self.transport
    }

    /// Returns true while the transport is running.
    pub fn is_running(&self) -> bool {
        self.transport == Transport::Running
    }

    /// Returns the current step interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sets the step interval directly.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Sets the step interval from a speed setting (see
    /// [`interval_for_speed`]).
    pub fn set_speed(&mut self, speed: u8) {
        self.interval = interval_for_speed(speed);
    }

    /// Starts the transport. The first step is due immediately.
    pub fn start(&mut self, now: Instant) {
        self.transport = Transport::Running;
        self.next_due = Some(now);
    }

    /// Pauses the transport. No further steps fire until restarted.
    pub fn pause(&mut self) {
        self.transport = Transport::Idle;
        self.next_due = None;
    }

    /// Polls the schedule, stepping the automaton if a step is due.
    ///
    /// After a step the next one is due `interval` after `now`, so the
    /// cadence is measured from the end of each step. Exhaustion pauses the
    /// transport; the final state is still worth one redraw, which is why it
    /// is reported as a distinct [`Tick::Finished`].
    pub fn tick<A: Automaton>(&mut self, now: Instant, automaton: &mut A) -> Tick {
        let due = match (self.transport, self.next_due) {
            (Transport::Idle, _) | (_, None) => return Tick::Idle,
            (Transport::Running, Some(due)) => due,
        };
        if now < due {
            return Tick::Waiting;
        }

        match automaton.step() {
            StepOutcome::Advanced => {
                self.next_due = Some(now + self.interval);
                Tick::Stepped
            }
            StepOutcome::Exhausted => {
                self.pause();
                Tick::Finished
            }
        }
    }

    /// Advances one step immediately, regardless of transport or schedule.
    ///
    /// Exhaustion observed here also pauses a running transport.
    pub fn step_now<A: Automaton>(&mut self, automaton: &mut A) -> StepOutcome {
        let outcome = automaton.step();
        if outcome.is_exhausted() {
            self.pause();
        }
        outcome
    }

    /// Blocking convenience loop: step, render, sleep, repeat.
    ///
    /// Runs until the automaton exhausts or `max_steps` steps have been
    /// taken, sleeping one interval between steps. Returns the number of
    /// steps taken; the transport is idle afterwards.
    pub fn run<A, F>(&mut self, automaton: &mut A, max_steps: u64, mut render: F) -> u64
    where
        A: Automaton,
        F: FnMut(&A),
    {
        self.transport = Transport::Running;
        let mut taken = 0;

        while taken < max_steps {
            match automaton.step() {
                StepOutcome::Advanced => {
                    taken += 1;
                    render(automaton);
                }
                StepOutcome::Exhausted => break,
            }
            if taken < max_steps && !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }

        self.pause();
        taken
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
