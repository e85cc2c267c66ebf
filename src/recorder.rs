//! Timing record - fastest/slowest bookkeeping shared across measured calls

use std::time::Duration;

/// The fastest completed call observed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastestCall {
    pub name: String,
    pub args: String,
    pub elapsed: Duration,
}

/// What recording one completed call did to the timing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallOutcome {
    /// This call beat every call recorded before it.
    pub became_fastest: bool,
    /// At least one earlier call completed, so a summary is due.
    pub summary_due: bool,
}

/// Tracks the fastest and slowest completed calls and how many calls were
/// attempted.
///
/// One instance per measurement scope. Call sites thread `&mut Recorder`
/// through explicitly, so there is no hidden cross-function coupling and no
/// locking; concurrent use is not supported.
#[derive(Debug, Default)]
pub struct Recorder {
    fastest: Option<FastestCall>,
    slowest: Option<Duration>,
    attempts: u64,
    completed: u64,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an invocation before the wrapped function runs. A call that later
    /// fails or panics still shows up in [`Self::call_count`].
    pub fn begin_call(&mut self) {
        self.attempts += 1;
    }

    /// Record a completed call's elapsed duration.
    ///
    /// The fastest slot is replaced only on a strictly lower duration, so the
    /// fastest duration never increases over the recorder's lifetime.
    pub fn record(&mut self, name: &str, args: &str, elapsed: Duration) -> CallOutcome {
        self.completed += 1;

        let became_fastest = match &self.fastest {
            Some(current) => elapsed < current.elapsed,
            None => true,
        };
        if became_fastest {
            self.fastest = Some(FastestCall {
                name: name.to_string(),
                args: args.to_string(),
                elapsed,
            });
        }

        // True running maximum, not "most recent call slower than the fastest".
        if self.slowest.map_or(true, |slowest| elapsed > slowest) {
            self.slowest = Some(elapsed);
        }

        CallOutcome {
            became_fastest,
            summary_due: self.completed >= 2,
        }
    }

    /// Total attempted calls, including ones that failed before completing.
    pub fn call_count(&self) -> u64 {
        self.attempts
    }

    /// Calls that finished and were recorded.
    pub fn completed_calls(&self) -> u64 {
        self.completed
    }

    pub fn fastest(&self) -> Option<&FastestCall> {
        self.fastest.as_ref()
    }

    pub fn slowest(&self) -> Option<Duration> {
        self.slowest
    }

    /// Ratio of the slowest to the fastest completed call.
    ///
    /// `None` until a call completes, or when the fastest call was below timer
    /// resolution and a ratio would be meaningless.
    pub fn speedup(&self) -> Option<f64> {
        let fastest = self.fastest.as_ref()?.elapsed;
        let slowest = self.slowest?;
        if fastest.is_zero() {
            return None;
        }
        Some(slowest.as_secs_f64() / fastest.as_secs_f64())
    }
}
