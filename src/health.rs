//! CPU and memory utilization sampling.

use std::{
    fmt::Debug,
    sync::{Mutex, PoisonError},
};

use sysinfo::System;
use tracing::trace;

use crate::data::HealthSample;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Memory readings in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemorySample {
    pub used: u64,
    pub total: u64,
}

/// Provider of raw utilization readings
pub trait MetricsSource: Send + Debug {
    /// Global CPU usage in percent since the previous call
    fn sample_cpu(&mut self) -> f32;
    fn sample_memory(&mut self) -> MemorySample;
}

/// [`MetricsSource`] backed by [`sysinfo`]
#[derive(Debug)]
pub struct SysinfoMetrics {
    system: System,
}

impl SysinfoMetrics {
    /// CPU usage is computed against the previous refresh, so the first sample after this may
    /// read as 0
    pub fn new() -> Self {
        SysinfoMetrics {
            system: System::new(),
        }
    }
}

impl Default for SysinfoMetrics {
    fn default() -> Self {
        SysinfoMetrics::new()
    }
}

impl MetricsSource for SysinfoMetrics {
    fn sample_cpu(&mut self) -> f32 {
        self.system.refresh_cpu_usage();
        self.system.global_cpu_usage()
    }

    fn sample_memory(&mut self) -> MemorySample {
        self.system.refresh_memory();
        MemorySample {
            used: self.system.used_memory(),
            total: self.system.total_memory(),
        }
    }
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

impl HealthSample {
    /// Builds a sample from raw readings. `gpu` is not measured and is always 0.
    pub fn from_readings(cpu: f32, memory: MemorySample) -> Self {
        let used = memory.used.min(memory.total);
        let ram = if memory.total == 0 {
            0.0
        } else {
            used as f64 / memory.total as f64 * 100.0
        };

        HealthSample {
            cpu: clamp_percent(f64::from(cpu)),
            ram: clamp_percent(ram),
            gpu: 0.0,
            ram_used_gb: round_2dp(used as f64 / BYTES_PER_GB),
            ram_total_gb: round_2dp(memory.total as f64 / BYTES_PER_GB),
        }
    }
}

/// Samples machine health on demand
#[derive(Debug)]
pub struct HealthReporter {
    source: Mutex<Box<dyn MetricsSource>>,
}

impl HealthReporter {
    pub fn new(source: impl MetricsSource + 'static) -> Self {
        HealthReporter {
            source: Mutex::new(Box::new(source)),
        }
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn sample_health(&self) -> HealthSample {
        // A panic while sampling leaves nothing half-updated, so a poisoned lock is still usable
        let mut source = self.source.lock().unwrap_or_else(PoisonError::into_inner);

        let cpu = source.sample_cpu();
        let memory = source.sample_memory();
        trace!("Raw health readings - cpu: {cpu}, memory: {memory:?}");

        HealthSample::from_readings(cpu, memory)
    }
}

impl Default for HealthReporter {
    fn default() -> Self {
        HealthReporter::new(SysinfoMetrics::new())
    }
}
