use async_trait::async_trait;

use crate::error::{BatchResult, ProviderError, Result};
use crate::types::{Record, Zone};

/// Provider error constructors (internal use).
/// Implementations only need to name themselves.
pub(crate) trait ProviderErrorMapper {
    /// Returns the provider identifier
    fn provider_name(&self) -> &'static str;

    /// Shortcut: parse error
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: invalid parameter
    fn invalid_parameter(&self, param: &str, detail: impl ToString) -> ProviderError {
        ProviderError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: param.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Lists the zones the credentials can manage.
#[async_trait]
pub trait ZoneLister: Send + Sync {
    /// All zones, or an error. Never a partial list.
    async fn list_zones(&self) -> Result<Vec<Zone>>;
}

/// Reads the records of a zone.
#[async_trait]
pub trait RecordGetter: Send + Sync {
    /// All records of `zone`, names relative to it.
    ///
    /// `Ok(vec![])` means the zone has no records; failures are always `Err`.
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>>;
}

/// Creates records.
#[async_trait]
pub trait RecordAppender: Send + Sync {
    /// Create `records` in order and return them as stored by the provider.
    ///
    /// Stops at the first failure; the error carries the records created before it.
    async fn append_records(&self, zone: &str, records: &[Record]) -> BatchResult;
}

/// Updates records, creating the ones that do not exist.
#[async_trait]
pub trait RecordSetter: Send + Sync {
    /// Update `records` in order, creating any record the provider does not know.
    ///
    /// Every record is sent as an update first, even without an id; only an update
    /// answered with `404 Not Found` turns into a create.
    ///
    /// Stops at the first failure; the error carries the records written before it.
    async fn set_records(&self, zone: &str, records: &[Record]) -> BatchResult;
}

/// Deletes records.
#[async_trait]
pub trait RecordDeleter: Send + Sync {
    /// Delete `records` in order and return the ones that were deleted.
    ///
    /// Stops at the first failure; the error carries the records deleted before it.
    async fn delete_records(&self, zone: &str, records: &[Record]) -> BatchResult;
}

/// Every capability at once, for callers that want a single trait object.
pub trait DnsProvider:
    ZoneLister + RecordGetter + RecordAppender + RecordSetter + RecordDeleter
{
    /// Provider identifier
    fn id(&self) -> &'static str;
}
