use serde::Deserialize;

/// Error envelope returned by the Graph API for 4XX and 5XX responses.
#[derive(Debug, Deserialize)]
pub struct ODataError {
    /// The error itself.
    pub error: ODataErrorDetail,
}

/// Details of an API error.
#[derive(Debug, Deserialize)]
pub struct ODataErrorDetail {
    /// Service-defined error code, e.g. `ResourceNotFound`.
    #[serde(default)]
    pub code: String,

    /// Human-readable description of the error.
    #[serde(default)]
    pub message: String,

    /// The target of the error, if any.
    pub target: Option<String>,
}
