use std::fmt;
use std::time::Duration;

use serde_json::Value as JsonValue;
use tokio::time::sleep;

use crate::backoff::BackoffSchedule;

/// Default per-request timeout: generous enough to ride out a backend
/// that is cold-starting while the request is in flight.
pub const DEFAULT_TIMEOUT_MS: u64 = 45_000;

/// HTTP verbs the routing backend accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One logical outbound request, fixed at construction.
#[derive(Clone, Debug)]
pub struct RequestSpec {
    url: String,
    method: Method,
    headers: Vec<(String, String)>,
    body: Option<JsonValue>,
    timeout: Duration,
}

impl RequestSpec {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: Vec::new(),
            body: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Creates a GET request spec.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// Creates a POST request spec.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    /// Adds a request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attaches a JSON body. Content type is set by the transport.
    pub fn json_body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the per-request timeout in milliseconds.
    pub fn timeout_ms(self, millis: u64) -> Self {
        self.timeout(Duration::from_millis(millis))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> Method {
        self.method
    }
}

/// Successful transport result: the backend answered with a 2xx status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSuccess {
    pub status: u16,
    pub body: String,
}

/// How a call failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The timeout fired before the transfer completed.
    Timeout,
    /// DNS, connection, or transfer failure below the HTTP layer.
    Network,
    /// The backend answered with a non-2xx status.
    Http(u16),
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::Network => write!(f, "network error"),
            Self::Http(status) => write!(f, "http {status}"),
        }
    }
}

/// Classified failure of a single call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct CallFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl CallFailure {
    fn timeout(timeout: Duration) -> Self {
        Self {
            kind: FailureKind::Timeout,
            message: format!("timed out after {}ms", timeout.as_millis()),
        }
    }

    fn network(err: &reqwest::Error) -> Self {
        Self {
            kind: FailureKind::Network,
            message: err.to_string(),
        }
    }

    fn http(status: u16, body: String) -> Self {
        Self {
            kind: FailureKind::Http(status),
            message: body,
        }
    }

    /// Whether the failure is worth another attempt: timeouts, network
    /// failures, and 5xx answers. Client errors are final.
    pub fn is_transient(&self) -> bool {
        match self.kind {
            FailureKind::Timeout | FailureKind::Network => true,
            FailureKind::Http(status) => status >= 500,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::Http(status) => Some(status),
            _ => None,
        }
    }
}

/// Result of one logical call. Every call resolves to one of these; the
/// call layer itself never panics and never loses a terminal failure.
pub type CallOutcome = Result<CallSuccess, CallFailure>;

/// Default retry predicate: retry timeouts, network failures, and 5xx
/// answers; treat successes and other statuses as final.
pub fn retry_transient(outcome: &CallOutcome) -> bool {
    matches!(outcome, Err(failure) if failure.is_transient())
}

fn classify_transport_error(err: &reqwest::Error, timeout: Duration) -> CallFailure {
    if err.is_timeout() {
        CallFailure::timeout(timeout)
    } else {
        CallFailure::network(err)
    }
}

/// Performs one timeout-bounded request and classifies the result.
///
/// The timer is owned by the request future: when it fires, the in-flight
/// transfer is aborted, and on every exit path the timer goes away with
/// the future. The timeout window also covers reading the response body.
pub async fn call_with_timeout(http: &reqwest::Client, spec: &RequestSpec) -> CallOutcome {
    let mut request = match spec.method {
        Method::Get => http.get(&spec.url),
        Method::Post => http.post(&spec.url),
    };
    for (name, value) in &spec.headers {
        request = request.header(name.as_str(), value.as_str());
    }
    if let Some(body) = &spec.body {
        request = request.json(body);
    }

    let response = match request.timeout(spec.timeout).send().await {
        Ok(response) => response,
        Err(err) => return Err(classify_transport_error(&err, spec.timeout)),
    };

    let status = response.status().as_u16();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => return Err(classify_transport_error(&err, spec.timeout)),
    };

    if (200..300).contains(&status) {
        Ok(CallSuccess { status, body })
    } else {
        Err(CallFailure::http(status, body))
    }
}

/// Runs a call under a backoff schedule.
///
/// Attempt `i` waits `schedule.delay(i)` first, then calls
/// [`call_with_timeout`]. The loop stops early as soon as `should_retry`
/// declines an outcome, and otherwise returns the last outcome once the
/// schedule is exhausted. An empty schedule degenerates to exactly one
/// immediate attempt.
pub async fn call_with_retry<F>(
    http: &reqwest::Client,
    spec: &RequestSpec,
    schedule: &BackoffSchedule,
    should_retry: F,
) -> CallOutcome
where
    F: Fn(&CallOutcome) -> bool,
{
    let attempts = schedule.attempts().max(1);
    let mut attempt = 0usize;
    loop {
        if let Some(delay) = schedule.delay(attempt) {
            if !delay.is_zero() {
                #[cfg(feature = "tracing")]
                tracing::debug!(attempt, delay_ms = delay.as_millis() as u64, "waiting before attempt");
                sleep(delay).await;
            }
        }

        let outcome = call_with_timeout(http, spec).await;
        attempt += 1;

        if attempt >= attempts || !should_retry(&outcome) {
            return outcome;
        }

        #[cfg(feature = "tracing")]
        if let Err(failure) = &outcome {
            tracing::debug!(attempt, error = %failure, "attempt failed, retrying");
        }
    }
}
