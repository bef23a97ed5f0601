use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use prism_auth::SessionAction;
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use tracing::error;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true)
    })
}

/// Installs the Prometheus recorder and its upkeep task.
///
/// Returns `None` when observability is disabled or the recorder cannot
/// be installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    if !is_observability_enabled() {
        return None;
    }

    let builder = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ],
        )
        .and_then(|b| {
            // Analysis runs take minutes.
            b.set_buckets_for_metric(
                Matcher::Full("backend_request_duration_seconds".to_string()),
                &[0.05, 0.1, 0.5, 1.0, 5.0, 30.0, 60.0, 300.0, 900.0],
            )
        });

    let handle = match builder.and_then(|b| b.install_recorder()) {
        Ok(handle) => handle,
        Err(e) => {
            error!(error = %e, "Failed to install Prometheus recorder");
            return None;
        }
    };

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Some(handle)
}

/// Metrics middleware to track HTTP requests
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router for metrics server
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

pub fn track_session_action(action: SessionAction) {
    if !is_observability_enabled() {
        return;
    }
    let action = match action {
        SessionAction::Continue => "continue",
        SessionAction::RedirectLogin => "redirect_login",
        SessionAction::RedirectRefresh => "redirect_refresh",
        SessionAction::RedirectLogout => "redirect_logout",
    };
    counter!("session_checks_total", "action" => action).increment(1);
}

pub fn track_login(success: bool) {
    if !is_observability_enabled() {
        return;
    }
    let status = if success { "success" } else { "failure" };
    counter!("dashboard_logins_total", "status" => status).increment(1);
}

pub fn track_token_refresh(success: bool) {
    if !is_observability_enabled() {
        return;
    }
    let status = if success { "success" } else { "failure" };
    counter!("token_refreshes_total", "status" => status).increment(1);
}

pub fn track_logout() {
    if !is_observability_enabled() {
        return;
    }
    counter!("dashboard_logouts_total").increment(1);
}

/// Counts a failed backend call by HTTP status.
pub fn track_backend_error(status: u16) {
    if !is_observability_enabled() {
        return;
    }
    counter!("backend_errors_total", "status" => status.to_string()).increment(1);
}

pub fn track_backend_duration(operation: &'static str, duration_secs: f64) {
    if !is_observability_enabled() {
        return;
    }
    histogram!("backend_request_duration_seconds", "operation" => operation).record(duration_secs);
}

pub fn track_plot_served(kind: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("plots_served_total", "kind" => kind).increment(1);
}

pub fn track_alerts(count: usize) {
    if !is_observability_enabled() {
        return;
    }
    histogram!("similarity_alerts_per_request").record(count as f64);
}
