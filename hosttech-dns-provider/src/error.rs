use serde::{Deserialize, Serialize};

use crate::types::Record;

/// Unified error type for all provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Status codes
///
/// Responses outside the `2xx` range become [`Api`](Self::Api) and keep the numeric HTTP
/// status. Callers branch on [`status_code()`](Self::status_code) rather than on message text;
/// [`RecordSetter::set_records`](crate::RecordSetter::set_records) uses it to turn an
/// update of a missing record into a create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request exceeded its deadline.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The provider answered with a status outside `200..300`.
    Api {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body or reason phrase, if any.
        message: String,
    },

    /// A request parameter is unusable (e.g. empty API token, missing record id).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The record type has no entry in the provider's record table.
    UnsupportedRecordType {
        /// Provider that produced the error.
        provider: String,
        /// The unsupported record type string.
        record_type: String,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ProviderError {
    /// HTTP status carried by [`Api`](Self::Api) errors, `None` for every other variant.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` when the API reported 404 for the requested resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Whether this is expected behavior (user input, missing resource, ...), used for log grading.
    ///
    /// Returns `true` when `warn` is the appropriate level, `false` for `error`.
    /// **Update this method whenever a variant is added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Api { status, .. } => (400..500).contains(status),
            Self::InvalidParameter { .. } | Self::UnsupportedRecordType { .. } => true,
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::ParseError { .. }
            | Self::SerializationError { .. } => false,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::Api {
                provider,
                status,
                message,
            } => {
                if message.is_empty() {
                    write!(f, "[{provider}] API call failed with status {status}")
                } else {
                    write!(f, "[{provider}] API call failed with status {status}: {message}")
                }
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::UnsupportedRecordType {
                provider,
                record_type,
            } => {
                write!(f, "[{provider}] Unsupported record type: {record_type}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Failure of a multi-record operation after zero or more records were already applied.
///
/// Records are processed one request at a time and nothing is rolled back, so `records`
/// holds every record the provider accepted before `error` stopped the run, in input order.
/// Compare its length against the request to find out where processing stopped.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{error}")]
pub struct BatchError {
    /// Records applied before the failure.
    pub records: Vec<Record>,
    /// The error that stopped processing.
    #[source]
    pub error: ProviderError,
}

impl BatchError {
    pub(crate) fn new(records: Vec<Record>, error: ProviderError) -> Self {
        Self { records, error }
    }

    /// Discard the partial result and keep the underlying error.
    #[must_use]
    pub fn into_inner(self) -> ProviderError {
        self.error
    }
}

/// Result of a multi-record operation.
pub type BatchResult = std::result::Result<Vec<Record>, BatchError>;
