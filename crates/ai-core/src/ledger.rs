use std::collections::{BTreeMap, VecDeque};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{SampleStatus, Status};

/// Constants governing how execution history is sampled and retained.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TelemetryConfig {
    /// Expected gap between walks. A larger gap between two samples is marked
    /// with a `NotEvaluated` filler.
    pub tick_interval: f64,
    /// Trailing window of history kept, relative to the latest sample.
    pub retention_window: f64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            tick_interval: crate::config::DEFAULT_TICK_INTERVAL_HOURS,
            retention_window: crate::config::DEFAULT_TELEMETRY_WINDOW_HOURS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExecutionSample {
    pub time: f64,
    pub status: SampleStatus,
}

/// Ledger entry for one named node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeExecutionRecord {
    pub last_executed: f64,
    pub status: Status,
    pub depth: u32,
    pub debug_info: String,
    pub execution_history: VecDeque<ExecutionSample>,
}

impl NodeExecutionRecord {
    fn new(time: f64, status: Status, depth: u32) -> Self {
        Self {
            last_executed: time,
            status,
            depth,
            debug_info: String::new(),
            execution_history: VecDeque::new(),
        }
    }
}

/// Execution telemetry keyed by node name.
#[derive(Debug, Clone, Default)]
pub struct ExecutionLedger {
    config: TelemetryConfig,
    records: BTreeMap<String, NodeExecutionRecord>,
}

impl ExecutionLedger {
    pub fn new(config: TelemetryConfig) -> Self {
        Self {
            config,
            records: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> TelemetryConfig {
        self.config
    }

    pub fn records(&self) -> &BTreeMap<String, NodeExecutionRecord> {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&NodeExecutionRecord> {
        self.records.get(name)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Append one sample for `name` and refresh its latest-state fields.
    ///
    /// Never fails. History is pruned from the front on every call, so its
    /// length stays bounded by the retention window.
    pub fn record(&mut self, name: &str, status: Status, time: f64, depth: u32, debug_info: &str) {
        let config = self.config;
        if !self.records.contains_key(name) {
            self.records.insert(
                name.to_owned(),
                NodeExecutionRecord::new(time, status, depth),
            );
        }
        let Some(record) = self.records.get_mut(name) else {
            return;
        };

        let history = &mut record.execution_history;
        if let Some(previous) = history.back().map(|s| s.time) {
            if time - previous > config.tick_interval {
                history.push_back(ExecutionSample {
                    time: previous + config.tick_interval,
                    status: SampleStatus::NotEvaluated,
                });
            }
        }
        history.push_back(ExecutionSample {
            time,
            status: status.into(),
        });

        let cutoff = time - config.retention_window;
        while history.front().is_some_and(|s| s.time < cutoff) {
            history.pop_front();
        }

        record.last_executed = time;
        record.status = status;
        record.depth = depth;
        record.debug_info.clear();
        record.debug_info.push_str(debug_info);
    }
}
