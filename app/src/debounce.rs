//! Single-slot debouncing: scheduling a task cancels whatever was pending.

use std::time::Duration;

/// Delay between the last keystroke and the search it triggers.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(150);

/// A timer that can be cancelled before it fires.
pub trait TimerHandle {
    fn cancel(self);
}

impl TimerHandle for leptos::prelude::TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// Tracks the one pending timer and which generation is allowed to run.
///
/// Each [`schedule`](Self::schedule) bumps the generation and cancels the
/// previous timer. A timer that still fires after being superseded is
/// rejected by [`complete`](Self::complete).
#[derive(Debug)]
pub struct Debouncer<H> {
    delay: Duration,
    generation: u64,
    pending: Option<(u64, Option<H>)>,
}

impl<H: TimerHandle> Debouncer<H> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Cancels the pending timer (if any) and arms a new one.
    ///
    /// `arm` receives the new generation and the delay; it returns the timer
    /// handle, or `None` when the platform has no cancellable timer.
    pub fn schedule<F>(&mut self, arm: F) -> u64
    where
        F: FnOnce(u64, Duration) -> Option<H>,
    {
        self.cancel();
        self.generation += 1;
        let handle = arm(self.generation, self.delay);
        self.pending = Some((self.generation, handle));
        self.generation
    }

    /// Called from the timer callback. Returns `true` only for the most
    /// recently scheduled generation, and clears the slot.
    pub fn complete(&mut self, generation: u64) -> bool {
        match self.pending {
            Some((current, _)) if current == generation => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        if let Some((_, Some(handle))) = self.pending.take() {
            handle.cancel();
        }
    }
}
