/// Every way a service call can fail. Each call reports exactly one of these.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    /// A required developer or user token was not configured.
    #[error("required token is not set")]
    TokenNil,
    /// The request never got a response, or a successful response lacked
    /// the attributes the caller needs.
    #[error("Apple Music API request failed")]
    Api,
    #[error("unexpected response status {status}")]
    InvalidResponse { status: u16 },
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response contained no data")]
    NoData,
    #[error("request url or body could not be constructed")]
    InvalidCompiledUrl,
}
