use crate::call::CallFailure;

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum RoutePlanError {
    /// The call layer gave up: timeout, network failure, or an error
    /// status that survived the retry schedule.
    #[error("call failed: {0}")]
    Call(#[from] CallFailure),
    /// The backend answered but reported no usable route.
    #[error("route error: {0}")]
    Api(String),
    /// Response decoding or protocol-shape validation error.
    #[error("decode error: {0}")]
    Decode(String),
}
