use std::time::Duration;

use crate::{
    call::{call_with_retry, retry_transient, RequestSpec},
    cancel::CallToken,
    decode,
    discover::{EndpointCandidate, EndpointSource},
    warmup::{self, WarmupState},
    ClientOptions, Itinerary, Result, RoutePlanError, RouteQuery,
};

/// Strips whitespace and any trailing slash so path joins stay canonical.
///
/// Example: `"https://myapp.onrender.com/"` → `"https://myapp.onrender.com"`
pub fn normalize_base_url(base: &str) -> String {
    base.trim().trim_end_matches('/').to_owned()
}

/// HTTP client for a transit trip-planning backend.
///
/// The backend sleeps when idle; every operation is timeout-bounded and
/// route calls run under the configured backoff schedule, so the first
/// request after a quiet period rides out the cold start instead of
/// failing.
#[derive(Clone, Debug)]
pub struct RoutePlanClient {
    http: reqwest::Client,
    base_url: String,
    options: ClientOptions,
}

impl RoutePlanClient {
    /// Creates a client for a deployment base URL (no `/api/route`
    /// suffix, e.g. `https://myapp.onrender.com`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(&base_url.into()),
            options: ClientOptions::default(),
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `ROUTEPLAN_BASE_URL` — deployment base URL
    ///
    /// Returns an error if the variable is missing or empty.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use routeplan_http::RoutePlanClient;
    ///
    /// let client = RoutePlanClient::from_env().expect("missing ROUTEPLAN_BASE_URL");
    /// ```
    pub fn from_env() -> std::result::Result<Self, String> {
        let base = std::env::var("ROUTEPLAN_BASE_URL")
            .map_err(|_| "missing ROUTEPLAN_BASE_URL environment variable".to_owned())?;
        if base.trim().is_empty() {
            return Err("ROUTEPLAN_BASE_URL is set but empty".to_owned());
        }
        Ok(Self::new(base))
    }

    /// Locates a live deployment among several base-URL guesses.
    ///
    /// Each candidate's route endpoint is probed once with a harmless
    /// marker request, in the given order; the first one answering with a
    /// route-shaped envelope wins. Useful while a deployment moves
    /// between hosts — pin the base URL with [`RoutePlanClient::new`]
    /// once it settles.
    pub async fn from_candidates<I, S>(bases: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let http = reqwest::Client::new();
        let options = ClientOptions::default();

        let candidates = bases
            .into_iter()
            .map(|base| {
                let base = normalize_base_url(&base.into());
                let spec = RequestSpec::post(format!("{base}/api/route"))
                    .json_body(serde_json::json!({ "warmup": true }))
                    .timeout(Duration::from_millis(options.timeout_ms));
                EndpointCandidate::new(base, spec)
            })
            .collect();

        let chosen = EndpointSource::Probe(candidates)
            .resolve(&http, decode::looks_like_route_envelope)
            .await?;

        Some(Self {
            http,
            base_url: chosen.label,
            options,
        })
    }

    /// Applies client options such as timeout and retry behavior.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Plans a trip.
    ///
    /// The call runs under the configured retry schedule: timeouts,
    /// network failures, and 5xx answers are retried, anything else is
    /// final on the first answer.
    pub async fn plan_route(&self, query: &RouteQuery) -> Result<Itinerary> {
        let spec = self.route_spec(query)?;
        let success = call_with_retry(&self.http, &spec, &self.options.retry, retry_transient).await?;
        decode::decode_route_response(&success.body)
    }

    /// Like [`RoutePlanClient::plan_route`], but bound to a call slot
    /// where only the newest request may apply.
    ///
    /// Returns `Ok(None)` when `token` was superseded while the call was
    /// in flight; stale failures are discarded the same way.
    pub async fn plan_route_latest(
        &self,
        query: &RouteQuery,
        token: &CallToken,
    ) -> Result<Option<Itinerary>> {
        let spec = self.route_spec(query)?;
        let outcome = call_with_retry(&self.http, &spec, &self.options.retry, retry_transient).await;

        if !token.is_current() {
            return Ok(None);
        }

        let success = outcome?;
        Ok(Some(decode::decode_route_response(&success.body)?))
    }

    /// Probes the backend's health endpoint until it answers, or gives
    /// up after the configured attempt budget.
    ///
    /// Readiness is advisory: route calls still run under their own
    /// retry schedule.
    pub async fn warm_up(&self, state: &mut WarmupState) -> bool {
        let probe = self.health_spec();
        warmup::wait_for_warmup(
            &self.http,
            &probe,
            self.options.warmup_attempts,
            &self.options.warmup_backoff,
            state,
        )
        .await
    }

    /// Probes the backend at most once per cooldown window.
    ///
    /// Returns `None` when the probe was skipped, `Some(is_warm)`
    /// otherwise.
    pub async fn probe_if_cooled_down(&self, state: &mut WarmupState) -> Option<bool> {
        let probe = self.health_spec();
        warmup::probe_if_cooled_down(
            &self.http,
            &probe,
            Duration::from_millis(self.options.warmup_cooldown_ms),
            state,
        )
        .await
    }

    fn route_url(&self) -> String {
        format!("{}/api/route", self.base_url)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    fn route_spec(&self, query: &RouteQuery) -> Result<RequestSpec> {
        let body = serde_json::to_value(decode::build_route_request(query)).map_err(|err| {
            RoutePlanError::Decode(format!("route request could not be encoded: {err}"))
        })?;

        Ok(RequestSpec::post(self.route_url())
            .json_body(body)
            .timeout(Duration::from_millis(self.options.timeout_ms)))
    }

    fn health_spec(&self) -> RequestSpec {
        RequestSpec::get(self.health_url()).timeout(Duration::from_millis(self.options.timeout_ms))
    }
}
