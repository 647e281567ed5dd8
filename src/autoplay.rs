//! Auto-play scheduling.
//!
//! The state machine only tracks whether a recurring timer is live and holds
//! its handle. What a tick does lives in `Session::tick`; the platform timer
//! lives behind `IntervalTimer`.

/// A recurring timer source. `start` must not invoke the tick synchronously.
pub trait IntervalTimer {
    type Handle;

    /// Schedule a recurring tick every `period_ms`. `None` if scheduling failed.
    fn start(&mut self, period_ms: u32) -> Option<Self::Handle>;

    /// Cancel a live handle. No tick fires for it afterwards.
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug, PartialEq, Eq)]
pub enum AutoPlay<H> {
    Idle,
    Running(H),
}

impl<H> Default for AutoPlay<H> {
    fn default() -> Self {
        AutoPlay::Idle
    }
}

impl<H> AutoPlay<H> {
    pub fn is_running(&self) -> bool {
        matches!(self, AutoPlay::Running(_))
    }

    /// Idle -> Running. A no-op returning `false` when already running or
    /// when the timer refuses to schedule.
    pub fn start<T>(&mut self, timer: &mut T, period_ms: u32) -> bool
    where
        T: IntervalTimer<Handle = H>,
    {
        if self.is_running() {
            return false;
        }
        match timer.start(period_ms.max(1)) {
            Some(handle) => {
                *self = AutoPlay::Running(handle);
                true
            }
            None => false,
        }
    }

    /// Running -> Idle, cancelling the timer. Idempotent.
    pub fn stop<T>(&mut self, timer: &mut T) -> bool
    where
        T: IntervalTimer<Handle = H>,
    {
        match std::mem::replace(self, AutoPlay::Idle) {
            AutoPlay::Running(handle) => {
                timer.cancel(handle);
                true
            }
            AutoPlay::Idle => false,
        }
    }
}

/// Timer that hands out numbered handles and records calls.
/// Ticks are delivered by calling `Session::tick` directly.
#[derive(Debug, Default)]
pub struct ManualTimer {
    next_id: u32,
    pub live: Vec<u32>,
    pub last_period_ms: Option<u32>,
}

impl IntervalTimer for ManualTimer {
    type Handle = u32;

    fn start(&mut self, period_ms: u32) -> Option<u32> {
        self.next_id += 1;
        self.live.push(self.next_id);
        self.last_period_ms = Some(period_ms);
        Some(self.next_id)
    }

    fn cancel(&mut self, handle: u32) {
        self.live.retain(|&id| id != handle);
    }
}
