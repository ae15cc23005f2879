//! # Landmarks Monitor
//!
//! Records how long named operations took and whether they succeeded, then
//! answers "how slow, how reliable" per operation.
//!
//! ## Usage
//!
//! ```rust
//! use landmarks_monitor::PerformanceMonitor;
//!
//! let monitor = PerformanceMonitor::new();
//!
//! monitor.record_operation("load_data", 125.5, true);
//! {
//!     let mut op = monitor.operation("validate");
//!     // ... work ...
//!     op.fail(); // recorded as a failure when `op` drops
//! }
//!
//! assert_eq!(monitor.success_rate("validate"), 0.0);
//! println!("{}", monitor.report());
//! ```
//!
//! ## Operation Naming Convention
//!
//! Use `{area}.{operation}` or a bare verb: `load_data`, `validate`,
//! `catalog.statistics`. Names MUST NOT contain `=` (used in summary export).

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cell::RefCell;
use std::time::Instant;

const NO_METRICS: &str = "No metrics recorded";

/// Monitor state. Single owner, NOT thread-safe.
/// Uses RefCell so guards can record through a shared reference.
#[derive(Debug, Default)]
pub struct PerformanceMonitor {
    metrics: RefCell<Vec<OperationMetric>>,
}

/// One recorded operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationMetric {
    pub operation: String,
    pub duration_ms: f64,
    pub success: bool,
    pub timestamp: DateTime<Utc>,
}

/// RAII guard that times an operation. Records elapsed time when dropped.
///
/// Counts as a success unless [`fail`](Self::fail) was called.
pub struct OperationGuard<'a> {
    monitor: &'a PerformanceMonitor,
    operation: String,
    start: Instant,
    success: bool,
}

impl OperationGuard<'_> {
    pub fn fail(&mut self) {
        self.success = false;
    }

    /// Set the outcome from a boolean, e.g. the return of `Catalog::add`.
    pub fn set_success(&mut self, success: bool) {
        self.success = success;
    }
}

impl Drop for OperationGuard<'_> {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        self.monitor
            .record_operation(std::mem::take(&mut self.operation), elapsed_ms, self.success);
    }
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a metric stamped with the current time.
    pub fn record_operation(&self, operation: impl Into<String>, duration_ms: f64, success: bool) {
        self.metrics.borrow_mut().push(OperationMetric {
            operation: operation.into(),
            duration_ms,
            success,
            timestamp: Utc::now(),
        });
    }

    /// Time an operation until the returned guard drops.
    pub fn operation(&self, name: impl Into<String>) -> OperationGuard<'_> {
        OperationGuard {
            monitor: self,
            operation: name.into(),
            start: Instant::now(),
            success: true,
        }
    }

    pub fn metric_count(&self) -> usize {
        self.metrics.borrow().len()
    }

    /// Copy of every metric, oldest first.
    pub fn metrics(&self) -> Vec<OperationMetric> {
        self.metrics.borrow().clone()
    }

    /// Distinct operation names in first-recorded order.
    pub fn operations(&self) -> Vec<String> {
        let metrics = self.metrics.borrow();
        let mut names: Vec<String> = Vec::new();
        for metric in metrics.iter() {
            if !names.contains(&metric.operation) {
                names.push(metric.operation.clone());
            }
        }
        names
    }

    /// Mean duration in milliseconds. 0.0 for an unseen operation.
    pub fn average_duration(&self, operation: &str) -> f64 {
        let metrics = self.metrics.borrow();
        let durations: Vec<f64> = metrics
            .iter()
            .filter(|m| m.operation == operation)
            .map(|m| m.duration_ms)
            .collect();
        if durations.is_empty() {
            0.0
        } else {
            durations.iter().sum::<f64>() / durations.len() as f64
        }
    }

    /// Percentage (0-100) of successful runs. 0.0 for an unseen operation.
    pub fn success_rate(&self, operation: &str) -> f64 {
        let metrics = self.metrics.borrow();
        let (total, successful) = metrics
            .iter()
            .filter(|m| m.operation == operation)
            .fold((0usize, 0usize), |(total, ok), m| (total + 1, ok + usize::from(m.success)));
        if total == 0 {
            0.0
        } else {
            successful as f64 / total as f64 * 100.0
        }
    }

    /// Human-readable per-operation breakdown.
    ///
    /// Output format:
    /// ```text
    /// === Performance Report ===
    ///
    /// load_data:
    ///   Average duration: 121.90ms
    ///   Success rate: 100.0%
    /// ```
    pub fn report(&self) -> String {
        if self.metric_count() == 0 {
            return NO_METRICS.to_string();
        }

        let mut lines = vec!["=== Performance Report ===".to_string()];
        for op in self.operations() {
            lines.push(String::new());
            lines.push(format!("{}:", op));
            lines.push(format!("  Average duration: {:.2}ms", self.average_duration(&op)));
            lines.push(format!("  Success rate: {:.1}%", self.success_rate(&op)));
        }
        lines.join("\n")
    }

    /// Export summary statistics as key=value lines.
    ///
    /// Suitable for grep assertions in shell scripts:
    /// ```bash
    /// AVG=$(grep "op.load_data.avg_ms" perf.txt | cut -d= -f2)
    /// ```
    ///
    /// Output format:
    /// ```text
    /// metric_count=4
    /// op.load_data.avg_ms=121.90
    /// op.load_data.success_pct=100.0
    /// ```
    pub fn export_summary(&self) -> String {
        let mut output = format!("metric_count={}\n", self.metric_count());
        for op in self.operations() {
            output.push_str(&format!(
                "op.{}.avg_ms={:.2}\nop.{}.success_pct={:.1}\n",
                op,
                self.average_duration(&op),
                op,
                self.success_rate(&op)
            ));
        }
        output
    }
}
