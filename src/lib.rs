pub mod config;
pub mod export;
pub mod harness;
pub mod recorder;
pub mod report;
pub mod suite;

pub use config::{ConfigError, RunConfig};
pub use export::{ExportConfig, ExportManager, TimingSnapshot};
pub use harness::{Harness, MeasureError, Measured};
pub use recorder::{CallOutcome, FastestCall, Recorder};
pub use suite::{Suite, SuiteError, SuiteReport};
