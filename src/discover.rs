use crate::call::{call_with_timeout, CallSuccess, RequestSpec};

/// One candidate request shape for an endpoint whose exact contract is
/// not pinned down yet.
#[derive(Clone, Debug)]
pub struct EndpointCandidate {
    /// Identifies the candidate in logs and in the resolved result; the
    /// typed client uses the deployment base URL here.
    pub label: String,
    /// Request to try against the candidate.
    pub spec: RequestSpec,
}

impl EndpointCandidate {
    pub fn new(label: impl Into<String>, spec: RequestSpec) -> Self {
        Self {
            label: label.into(),
            spec,
        }
    }
}

/// Where the operational endpoint comes from.
///
/// `Probe` is a one-time capability negotiation: candidates are tried in
/// priority order and the first structurally valid answer wins. Once the
/// backend contract is known, swap in `Fixed` and skip the probing.
#[derive(Clone, Debug)]
pub enum EndpointSource {
    Fixed(EndpointCandidate),
    Probe(Vec<EndpointCandidate>),
}

impl EndpointSource {
    /// Resolves to a usable endpoint, or `None` when every candidate is
    /// rejected.
    ///
    /// `Fixed` resolves without touching the network. `Probe` issues one
    /// timeout-bounded call per candidate; a candidate is accepted only
    /// when it answers 2xx and `is_valid` approves the response shape.
    pub async fn resolve<F>(&self, http: &reqwest::Client, is_valid: F) -> Option<EndpointCandidate>
    where
        F: Fn(&CallSuccess) -> bool,
    {
        match self {
            Self::Fixed(candidate) => Some(candidate.clone()),
            Self::Probe(candidates) => {
                for candidate in candidates {
                    match call_with_timeout(http, &candidate.spec).await {
                        Ok(success) if is_valid(&success) => {
                            #[cfg(feature = "tracing")]
                            tracing::debug!(label = %candidate.label, "endpoint candidate accepted");
                            return Some(candidate.clone());
                        }
                        _ => {
                            #[cfg(feature = "tracing")]
                            tracing::debug!(label = %candidate.label, "endpoint candidate rejected");
                        }
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EndpointCandidate, EndpointSource};
    use crate::call::RequestSpec;

    #[tokio::test]
    async fn fixed_source_resolves_without_probing() {
        let candidate = EndpointCandidate::new(
            "https://backend",
            RequestSpec::post("https://backend/api/route"),
        );
        let source = EndpointSource::Fixed(candidate);

        let resolved = source
            .resolve(&reqwest::Client::new(), |_| false)
            .await
            .expect("fixed source must resolve");
        assert_eq!(resolved.label, "https://backend");
    }

    #[tokio::test]
    async fn empty_probe_list_resolves_to_none() {
        let source = EndpointSource::Probe(Vec::new());
        assert!(source
            .resolve(&reqwest::Client::new(), |_| true)
            .await
            .is_none());
    }
}
