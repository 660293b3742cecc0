//! Prometheus metrics exposed at `/metrics`: request counts and latencies per
//! service, plus gauges describing this process.

use prometheus_client::metrics::{
    counter::Counter,
    family::Family,
    gauge::Gauge,
    histogram::{Histogram, exponential_buckets},
};
use prometheus_client::registry::{Registry, Unit};
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::{
    sync::{Arc, atomic::AtomicU64},
    time::Duration,
};
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};
use tokio::sync::Mutex;
use tracing::warn;

const REFRESH_INTERVAL: Duration = Duration::from_secs(15);

/// Process gauges. Every field holds a current level, refreshed by
/// [`run_metrics_collector`].
#[derive(Debug, Clone)]
pub struct SystemMetrics {
    pub resident_memory: Gauge,
    pub virtual_memory: Gauge,
    pub available_memory: Gauge,
    pub cpu_usage: Gauge<f64, AtomicU64>,
    pub threads: Gauge,
    pub start_time: Gauge,
    system: Arc<Mutex<System>>,
    pid: Option<Pid>,
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemMetrics {
    pub fn new() -> Self {
        let pid = sysinfo::get_current_pid()
            .inspect_err(|e| warn!("⚠️ Process metrics disabled: {e}"))
            .ok();

        Self {
            resident_memory: Gauge::default(),
            virtual_memory: Gauge::default(),
            available_memory: Gauge::default(),
            cpu_usage: Gauge::default(),
            threads: Gauge::default(),
            start_time: Gauge::default(),
            system: Arc::new(Mutex::new(System::new())),
            pid,
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register_with_unit(
            "process_resident_memory",
            "Resident set size of the process",
            Unit::Bytes,
            self.resident_memory.clone(),
        );
        registry.register_with_unit(
            "process_virtual_memory",
            "Virtual memory size of the process",
            Unit::Bytes,
            self.virtual_memory.clone(),
        );
        registry.register_with_unit(
            "host_available_memory",
            "Memory available to new allocations on the host",
            Unit::Bytes,
            self.available_memory.clone(),
        );
        registry.register(
            "process_cpu_usage_percent",
            "CPU usage of the process since the previous refresh",
            self.cpu_usage.clone(),
        );
        registry.register(
            "process_threads",
            "Threads owned by the process",
            self.threads.clone(),
        );
        registry.register_with_unit(
            "process_start_time",
            "Start time of the process since unix epoch",
            Unit::Seconds,
            self.start_time.clone(),
        );
    }

    pub async fn refresh(&self) {
        let Some(pid) = self.pid else {
            return;
        };

        let mut system = self.system.lock().await;
        system.refresh_memory();
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::everything(),
        );

        self.available_memory
            .set(i64::try_from(system.available_memory()).unwrap_or(i64::MAX));

        let Some(process) = system.process(pid) else {
            return;
        };

        self.resident_memory
            .set(i64::try_from(process.memory()).unwrap_or(i64::MAX));
        self.virtual_memory
            .set(i64::try_from(process.virtual_memory()).unwrap_or(i64::MAX));
        self.cpu_usage.set(f64::from(process.cpu_usage()));
        self.start_time
            .set(i64::try_from(process.start_time()).unwrap_or_default());

        if let Some(tasks) = process.tasks() {
            self.threads.set(tasks.len() as i64);
        }
    }
}

pub async fn run_metrics_collector(system_metrics: Arc<SystemMetrics>) {
    let mut interval = tokio::time::interval(REFRESH_INTERVAL);
    loop {
        interval.tick().await;
        system_metrics.refresh().await;
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

/// Request count and latency of one service, labelled by method and outcome.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub requests: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            requests: Family::default(),
            // 1ms up to ~16s
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(exponential_buckets(0.001, 2.0, 15))
            }),
        }
    }

    pub fn register(&self, registry: &mut Registry, prefix: &str, component: &str) {
        registry.register(
            format!("{prefix}_requests"),
            format!("Requests handled by the {component}"),
            self.requests.clone(),
        );
        registry.register_with_unit(
            format!("{prefix}_request_duration"),
            format!("Request latency of the {component}"),
            Unit::Seconds,
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.requests.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    fn render(registry: &Registry) -> String {
        let mut buffer = String::new();
        encode(&mut buffer, registry).unwrap();
        buffer
    }

    #[test]
    fn requests_are_counted_per_method_and_outcome() {
        let mut registry = Registry::default();
        let metrics = Metrics::new();
        metrics.register(&mut registry, "cart_service", "CartService");

        metrics.record(Method::Post, Status::Success, 0.002);
        metrics.record(Method::Post, Status::Success, 0.004);
        metrics.record(Method::Post, Status::Error, 0.001);

        let text = render(&registry);
        assert!(text.contains(r#"cart_service_requests_total{method="Post",status="Success"} 2"#));
        assert!(text.contains(r#"cart_service_requests_total{method="Post",status="Error"} 1"#));
        assert!(text.contains("cart_service_request_duration_seconds"));
    }

    #[tokio::test]
    async fn refresh_reports_levels_of_this_process() {
        let mut registry = Registry::default();
        let metrics = SystemMetrics::new();
        metrics.register(&mut registry);

        metrics.refresh().await;
        metrics.refresh().await;

        assert!(metrics.resident_memory.get() > 0);
        assert!(metrics.start_time.get() > 0);

        let text = render(&registry);
        assert!(text.contains("process_resident_memory_bytes"));
        assert!(text.contains("# TYPE process_threads gauge"));
    }
}
