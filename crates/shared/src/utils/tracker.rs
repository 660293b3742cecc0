use crate::{
    domain::ApiResponse,
    errors::ServiceError,
    utils::{Method, Metrics, Status, TracingContext},
};
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use tokio::time::Instant;
use tracing::{error, info};

/// Opens one span per service operation and records its outcome in the
/// request counter and duration histogram of the owning service.
#[derive(Clone, Debug)]
pub struct OperationTracker {
    tracer_name: &'static str,
    metrics: Metrics,
}

impl OperationTracker {
    pub fn new(tracer_name: &'static str, registry: &mut Registry, component: &str) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, &tracer_name.replace('-', "_"), component);

        Self {
            tracer_name,
            metrics,
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer(self.tracer_name)
    }

    pub fn start(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    pub fn complete_success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete(tracing_ctx, method, true, message);
    }

    pub fn complete_error(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete(tracing_ctx, method, false, message);
    }

    /// Closes the span with the outcome of a service call.
    pub fn record_outcome<T>(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        outcome: &Result<ApiResponse<T>, ServiceError>,
    ) {
        match outcome {
            Ok(response) => self.complete_success(tracing_ctx, method, &response.message),
            Err(err) => self.complete_error(tracing_ctx, method, &err.to_string()),
        }
    }

    fn complete(&self, tracing_ctx: &TracingContext, method: Method, is_success: bool, message: &str) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}
