//! Measurement wrapper - composes wall-clock timing around an invocation

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use thiserror::Error;

use crate::recorder::Recorder;
use crate::report;

/// Result of one measured call. The wrapped function's return value passes
/// through untouched.
#[derive(Debug)]
pub struct Measured<T> {
    pub value: T,
    pub elapsed: Duration,
    /// Fastest-call summary, present from the second completed call onward.
    pub summary: Option<String>,
}

#[derive(Debug, Error)]
pub enum MeasureError {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The wrapped callable returned an error; nothing past the attempt count
    /// was recorded for that call.
    #[error(transparent)]
    Call(anyhow::Error),
}

/// Times calls against a shared [`Recorder`] and reports each one to an
/// output sink, stdout by default.
pub struct Harness {
    recorder: Recorder,
    out: Box<dyn Write>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Route report lines somewhere other than stdout.
    pub fn with_output(out: Box<dyn Write>) -> Self {
        Self {
            recorder: Recorder::new(),
            out,
        }
    }

    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    pub fn into_recorder(self) -> Recorder {
        self.recorder
    }

    /// Time one call of `f` and record it.
    ///
    /// A panic in `f` unwinds through the harness: the attempt is counted but
    /// no duration is recorded and no report line is written.
    pub fn measure<T>(
        &mut self,
        name: &str,
        args: &str,
        f: impl FnOnce() -> T,
    ) -> io::Result<Measured<T>> {
        self.recorder.begin_call();
        let start = Instant::now();
        let value = f();
        let elapsed = start.elapsed();
        let summary = self.finish_call(name, args, elapsed)?;
        Ok(Measured {
            value,
            elapsed,
            summary,
        })
    }

    /// Like [`Self::measure`], for callables that can fail. An `Err` from `f`
    /// propagates unchanged and leaves the timing record untouched apart from
    /// the attempt count.
    pub fn try_measure<T>(
        &mut self,
        name: &str,
        args: &str,
        f: impl FnOnce() -> Result<T>,
    ) -> Result<Measured<T>, MeasureError> {
        self.recorder.begin_call();
        let start = Instant::now();
        let value = f().map_err(MeasureError::Call)?;
        let elapsed = start.elapsed();
        let summary = self.finish_call(name, args, elapsed)?;
        Ok(Measured {
            value,
            elapsed,
            summary,
        })
    }

    fn finish_call(&mut self, name: &str, args: &str, elapsed: Duration) -> io::Result<Option<String>> {
        let outcome = self.recorder.record(name, args, elapsed);
        writeln!(self.out, "{}", report::progress_line(name, elapsed))?;

        if !outcome.summary_due {
            return Ok(None);
        }

        // record() always leaves a fastest call behind.
        let summary = match self.recorder.fastest() {
            Some(fastest) => report::fastest_line(fastest),
            None => return Ok(None),
        };
        writeln!(self.out, "{summary}")?;
        if let Some(ratio) = self.recorder.speedup() {
            writeln!(self.out, "{}", report::speedup_line(ratio))?;
        }
        Ok(Some(summary))
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
