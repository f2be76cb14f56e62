//! Hosttech error helpers

use crate::error::ProviderError;
use crate::traits::ProviderErrorMapper;
use crate::types::Record;

use super::HosttechProvider;

impl ProviderErrorMapper for HosttechProvider {
    fn provider_name(&self) -> &'static str {
        crate::providers::PROVIDER_NAME
    }
}

impl HosttechProvider {
    /// Log a failed record operation: `warn` for expected failures, `error` otherwise.
    pub(crate) fn log_record_failure(&self, action: &str, record: &Record, err: &ProviderError) {
        let name = self.provider_name();
        if err.is_expected() {
            log::warn!("[{name}] Failed to {action} {record}: {err}");
        } else {
            log::error!("[{name}] Failed to {action} {record}: {err}");
        }
    }
}
