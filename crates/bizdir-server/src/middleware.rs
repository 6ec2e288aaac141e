use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::api::ApiError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest client-supplied request id that is echoed back.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Request id stored as a request extension for handlers and envelopes.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Per-process request budget for the listing API, reset every window.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    budget: usize,
    window: Duration,
    usage: Arc<Mutex<WindowUsage>>,
}

#[derive(Debug)]
struct WindowUsage {
    opened_at: Instant,
    spent: usize,
}

impl RateLimitState {
    #[must_use]
    pub fn new(budget: usize, window: Duration) -> Self {
        Self {
            budget,
            window,
            usage: Arc::new(Mutex::new(WindowUsage {
                opened_at: Instant::now(),
                spent: 0,
            })),
        }
    }

    /// Budget taken from `BIZDIR_RATE_LIMIT_PER_MINUTE`.
    #[must_use]
    pub fn per_minute(budget: usize) -> Self {
        Self::new(budget, Duration::from_secs(60))
    }

    /// Spend one request from the current window.
    ///
    /// Returns the time left until the window reopens when the budget is gone.
    async fn try_spend(&self) -> Result<(), Duration> {
        let mut usage = self.usage.lock().await;
        let elapsed = usage.opened_at.elapsed();
        if elapsed >= self.window {
            usage.opened_at = Instant::now();
            usage.spent = 0;
        } else if usage.spent >= self.budget {
            return Err(self.window.saturating_sub(elapsed));
        }
        usage.spent += 1;
        Ok(())
    }
}

/// Take the caller's `x-request-id` when it is usable, otherwise mint a `UUIDv4`.
/// The id is echoed on the response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));
    let mut res = next.run(req).await;
    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, val);
    }
    res
}

/// Reject with `429 rate_limited` once the window's budget is spent.
pub async fn enforce_rate_limit(
    State(limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    let Err(retry_in) = limit.try_spend().await else {
        return next.run(req).await;
    };

    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map_or_else(String::new, |id| id.0.clone());
    let retry_after_secs = retry_in.as_secs().max(1);
    tracing::warn!(
        path = %req.uri().path(),
        request_id = %request_id,
        budget = limit.budget,
        window_secs = limit.window.as_secs(),
        retry_after_secs,
        "listing api budget exhausted"
    );

    let mut res = ApiError::new(
        request_id,
        "rate_limited",
        format!(
            "request budget of {} per {}s exhausted; retry in {retry_after_secs}s",
            limit.budget,
            limit.window.as_secs()
        ),
    )
    .into_response();
    res.headers_mut()
        .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs));
    res
}
