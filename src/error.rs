use thiserror::Error;
pub use url::ParseError as UrlParseError;

/// Error types for the Graph models and request layer.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A wire value's kind disagrees with the field's declared kind.
    #[error("Type mismatch for '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A wire value has the right kind but cannot be read as the declared
    /// type (bad timestamp, bad base64, integer out of range).
    #[error("Malformed value for '{field}': expected {expected}, got {value}")]
    MalformedValue {
        field: String,
        expected: &'static str,
        value: String,
    },

    /// A string outside the closed set of an enumeration's member names.
    #[error("Unknown {enum_name} value: '{value}'")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },

    /// An ordinal with no corresponding enumeration member.
    #[error("Ordinal {ordinal} is out of range for {enum_name}")]
    EnumOrdinalOutOfRange {
        enum_name: &'static str,
        ordinal: usize,
    },

    /// The API answered with an OData error envelope.
    #[error("API error ({status}): {code}: {message}")]
    ApiError {
        status: u16,
        code: String,
        message: String,
    },

    /// The API answered a request that must return a body with an empty one.
    #[error("No data returned from API")]
    EmptyResponse,

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error parsing URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] UrlParseError),

    /// The API endpoint/path string is invalid.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Error serializing or deserializing JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),
}

/// Result type for Graph model and API operations.
pub type GraphResult<T> = Result<T, GraphError>;
