//! `routeplan-http` is an async HTTP client for a transit trip-planning API.
//!
//! The backend sleeps when idle, so every call is timeout-bounded and runs
//! under a caller-supplied backoff schedule:
//! - [`RoutePlanClient::plan_route`]
//! - [`RoutePlanClient::warm_up`]
//! - [`call_with_retry`] / [`call_with_timeout`] for raw requests

mod backoff;
mod call;
mod cancel;
mod client;
mod decode;
mod discover;
mod error;
mod options;
mod types;
mod warmup;
mod wire;

pub use backoff::BackoffSchedule;
pub use call::{
    call_with_retry, call_with_timeout, retry_transient, CallFailure, CallOutcome, CallSuccess,
    FailureKind, Method, RequestSpec, DEFAULT_TIMEOUT_MS,
};
pub use cancel::{CallSlot, CallToken};
pub use client::{normalize_base_url, RoutePlanClient};
pub use discover::{EndpointCandidate, EndpointSource};
pub use error::RoutePlanError;
pub use options::ClientOptions;
pub use types::{Itinerary, RouteLeg, RouteQuery, StopRef};
pub use warmup::{probe_if_cooled_down, wait_for_warmup, WarmupPhase, WarmupState};

pub type Result<T> = std::result::Result<T, RoutePlanError>;
