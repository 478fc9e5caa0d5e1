use thiserror::Error;

/// Failure modes of a single API request.
///
/// Every error is terminal for the request it belongs to; the SDK never
/// retries. `MissingCredential` and `InvalidEndpoint` are resolved before
/// any network I/O happens, `InvalidResponse` only after the transport
/// has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PulseError {
    /// No subscription key is set on the client.
    #[error(
        "no subscription key is set; pass one to `PulseClient::new` or `set_subscription_key`"
    )]
    MissingCredential,

    /// An endpoint template did not render into a well-formed URL.
    #[error("endpoint template did not render into a well-formed URL")]
    InvalidEndpoint,

    /// The transport failed, the status was outside the 2xx range, or the
    /// body was not a JSON object.
    #[error("response was not a 2xx JSON object")]
    InvalidResponse,
}
