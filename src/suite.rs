//! Races named variants of a routine through a shared harness

use std::io::Write;

use anyhow::Result;
use thiserror::Error;

use crate::config::RunConfig;
use crate::export::ExportManager;
use crate::harness::{Harness, MeasureError};
use crate::recorder::FastestCall;

type CaseFn = Box<dyn FnMut() -> Result<()>>;

struct Case {
    name: String,
    args: String,
    run: CaseFn,
}

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("suite has no cases")]
    Empty,
    #[error("case '{name}' failed")]
    Case {
        name: String,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Outcome of a full suite run.
#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub fastest: FastestCall,
    pub speedup: Option<f64>,
    pub call_count: u64,
}

/// Collects named cases and runs each one `iterations` times, after the
/// configured warmup, against a single timing record.
pub struct Suite {
    config: RunConfig,
    harness: Harness,
    cases: Vec<Case>,
}

impl Suite {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            harness: Harness::new(),
            cases: Vec::new(),
        }
    }

    /// Route per-call report lines somewhere other than stdout.
    pub fn with_output(config: RunConfig, out: Box<dyn Write>) -> Self {
        Self {
            config,
            harness: Harness::with_output(out),
            cases: Vec::new(),
        }
    }

    pub fn with_case(
        mut self,
        name: impl Into<String>,
        args: impl Into<String>,
        run: impl FnMut() -> Result<()> + 'static,
    ) -> Self {
        self.cases.push(Case {
            name: name.into(),
            args: args.into(),
            run: Box::new(run),
        });
        self
    }

    pub fn run(&mut self) -> Result<SuiteReport, SuiteError> {
        if self.cases.is_empty() {
            return Err(SuiteError::Empty);
        }

        let mut exporter = match self.config.export.as_ref() {
            Some(export) => Some(ExportManager::from_config(export)?),
            None => None,
        };

        for case in &mut self.cases {
            // Warmup runs are neither timed nor recorded.
            for _ in 0..self.config.warmup {
                (case.run)().map_err(|source| SuiteError::Case {
                    name: case.name.clone(),
                    source,
                })?;
            }

            for _ in 0..self.config.iterations {
                self.harness
                    .try_measure(&case.name, &case.args, &mut case.run)
                    .map_err(|err| match err {
                        MeasureError::Io(err) => SuiteError::Io(err),
                        MeasureError::Call(source) => SuiteError::Case {
                            name: case.name.clone(),
                            source,
                        },
                    })?;

                if let Some(exporter) = exporter.as_mut() {
                    let completed = self.harness.recorder().completed_calls();
                    if exporter.should_export(completed) {
                        exporter.export(self.harness.recorder())?;
                    }
                }
            }
        }

        let recorder = self.harness.recorder();
        let fastest = match recorder.fastest() {
            Some(fastest) => fastest.clone(),
            // Unreachable with at least one case and a validated config, but
            // an empty-suite error beats a panic here.
            None => return Err(SuiteError::Empty),
        };

        Ok(SuiteReport {
            fastest,
            speedup: recorder.speedup(),
            call_count: recorder.call_count(),
        })
    }
}
