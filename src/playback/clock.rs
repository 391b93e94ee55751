use crate::foundation::core::Fps;
use std::collections::VecDeque;
use std::time::Instant;

/// One clock event: how many whole frames elapsed since the previous event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Elapsed frames (may batch several frames after a stall).
    pub elapsed_frames: u64,
}

/// Source of tick events that drives a [`crate::Player`].
///
/// Contract: after [`TickSource::stop`] returns, [`TickSource::poll`] yields nothing until the
/// next [`TickSource::begin`].
pub trait TickSource {
    /// Start emitting ticks.
    fn begin(&mut self);
    /// Stop emitting ticks and drop anything pending.
    fn stop(&mut self);
    /// `true` between `begin` and `stop`.
    fn is_running(&self) -> bool;
    /// Next pending tick, if any.
    fn poll(&mut self) -> Option<Tick>;
}

impl<T: TickSource + ?Sized> TickSource for Box<T> {
    fn begin(&mut self) {
        (**self).begin();
    }

    fn stop(&mut self) {
        (**self).stop();
    }

    fn is_running(&self) -> bool {
        (**self).is_running()
    }

    fn poll(&mut self) -> Option<Tick> {
        (**self).poll()
    }
}

/// Tick source fed by hand, for tests and for hosts that own their own frame loop.
///
/// It also counts subscriptions so callers can check that at most one is ever live.
#[derive(Debug, Default)]
pub struct ManualClock {
    pending: VecDeque<Tick>,
    live: u32,
    begin_count: u64,
    stop_count: u64,
}

impl ManualClock {
    /// Create a stopped clock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a tick of `elapsed_frames`. Ignored while the clock is stopped.
    pub fn push(&mut self, elapsed_frames: u64) {
        if self.live > 0 {
            self.pending.push_back(Tick { elapsed_frames });
        }
    }

    /// Number of subscriptions currently live.
    pub fn live_subscriptions(&self) -> u32 {
        self.live
    }

    /// Total `begin` calls so far.
    pub fn begin_count(&self) -> u64 {
        self.begin_count
    }

    /// Total `stop` calls so far.
    pub fn stop_count(&self) -> u64 {
        self.stop_count
    }

    /// Ticks queued and not yet polled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl TickSource for ManualClock {
    fn begin(&mut self) {
        self.live += 1;
        self.begin_count += 1;
    }

    fn stop(&mut self) {
        self.live = self.live.saturating_sub(1);
        self.stop_count += 1;
        self.pending.clear();
    }

    fn is_running(&self) -> bool {
        self.live > 0
    }

    fn poll(&mut self) -> Option<Tick> {
        if self.live == 0 {
            return None;
        }
        self.pending.pop_front()
    }
}

/// Wall-clock tick source emitting whole frames at a fixed frame rate.
///
/// Fractional frames carry over between polls, so polling faster than the frame rate never loses
/// time and polling slower batches several frames into one tick.
#[derive(Debug, Clone)]
pub struct IntervalClock {
    fps: Fps,
    running: bool,
    last: Option<Instant>,
    carry: f64,
}

impl IntervalClock {
    /// Create a stopped clock ticking at `fps`.
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            running: false,
            last: None,
            carry: 0.0,
        }
    }

    /// Frame rate this clock ticks at.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Start at an explicit instant.
    pub fn begin_at(&mut self, now: Instant) {
        self.running = true;
        self.last = Some(now);
        self.carry = 0.0;
    }

    /// Poll at an explicit instant.
    pub fn poll_at(&mut self, now: Instant) -> Option<Tick> {
        if !self.running {
            return None;
        }
        let last = self.last.replace(now)?;
        let secs = now.saturating_duration_since(last).as_secs_f64();
        self.carry += self.fps.secs_to_frames(secs);
        let whole = self.carry.floor();
        if whole < 1.0 {
            return None;
        }
        self.carry -= whole;
        Some(Tick {
            elapsed_frames: whole as u64,
        })
    }
}

impl TickSource for IntervalClock {
    fn begin(&mut self) {
        self.begin_at(Instant::now());
    }

    fn stop(&mut self) {
        self.running = false;
        self.last = None;
        self.carry = 0.0;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn poll(&mut self) -> Option<Tick> {
        self.poll_at(Instant::now())
    }
}
