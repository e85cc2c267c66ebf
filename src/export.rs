//! Periodic JSON checkpoints of the timing record

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::recorder::Recorder;

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    /// Export after this many completed calls; 0 disables exporting.
    #[serde(default)]
    pub interval_calls: u64,
}

/// One exported view of the timing record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingSnapshot {
    pub timestamp: String,
    pub call_count: u64,
    pub completed_calls: u64,
    pub fastest_name: Option<String>,
    pub fastest_args: Option<String>,
    pub fastest_secs: Option<f64>,
    pub slowest_secs: Option<f64>,
    pub speedup: Option<f64>,
}

impl TimingSnapshot {
    pub fn from_recorder(recorder: &Recorder) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d_%H-%M-%S").to_string(),
            call_count: recorder.call_count(),
            completed_calls: recorder.completed_calls(),
            fastest_name: recorder.fastest().map(|call| call.name.clone()),
            fastest_args: recorder.fastest().map(|call| call.args.clone()),
            fastest_secs: recorder.fastest().map(|call| call.elapsed.as_secs_f64()),
            slowest_secs: recorder.slowest().map(|slowest| slowest.as_secs_f64()),
            speedup: recorder.speedup(),
        }
    }
}

/// Writes the timing record to disk at a configured call interval.
pub struct ExportManager {
    output_dir: PathBuf,
    interval_calls: u64,
    last_export_call: u64,
}

impl ExportManager {
    pub fn new<P: AsRef<Path>>(output_dir: P, interval_calls: u64) -> std::io::Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;

        Ok(Self {
            output_dir,
            interval_calls,
            last_export_call: 0,
        })
    }

    pub fn from_config(config: &ExportConfig) -> std::io::Result<Self> {
        Self::new(&config.output_dir, config.interval_calls)
    }

    /// Whether enough calls have completed since the last export.
    pub fn should_export(&self, completed_calls: u64) -> bool {
        if self.interval_calls == 0 {
            return false;
        }
        completed_calls > 0 && completed_calls - self.last_export_call >= self.interval_calls
    }

    /// Write the current timing record as a pretty-printed JSON file.
    pub fn export(&mut self, recorder: &Recorder) -> std::io::Result<PathBuf> {
        let snapshot = TimingSnapshot::from_recorder(recorder);
        let path = self
            .output_dir
            .join(format!("record_{:08}.json", recorder.completed_calls()));

        let json = serde_json::to_string_pretty(&snapshot)?;
        let mut file = File::create(&path)?;
        file.write_all(json.as_bytes())?;

        self.last_export_call = recorder.completed_calls();
        Ok(path)
    }

    pub fn load_snapshot<P: AsRef<Path>>(path: P) -> std::io::Result<TimingSnapshot> {
        let mut contents = String::new();
        File::open(path)?.read_to_string(&mut contents)?;

        let snapshot = serde_json::from_str(&contents)?;
        Ok(snapshot)
    }

    /// List exported records, oldest first.
    pub fn list_snapshots(&self) -> std::io::Result<Vec<PathBuf>> {
        let mut snapshots = Vec::new();

        if !self.output_dir.exists() {
            return Ok(snapshots);
        }

        for entry in fs::read_dir(&self.output_dir)? {
            let path = entry?.path();
            let is_record = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("record_") && name.ends_with(".json"));
            if path.is_file() && is_record {
                snapshots.push(path);
            }
        }

        snapshots.sort();
        Ok(snapshots)
    }
}
