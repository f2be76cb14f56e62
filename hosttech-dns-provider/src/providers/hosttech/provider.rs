//! Hosttech capability trait implementations

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::error::{BatchError, BatchResult, Result};
use crate::traits::{
    DnsProvider, ProviderErrorMapper, RecordAppender, RecordDeleter, RecordGetter, RecordSetter,
    ZoneLister,
};
use crate::types::{Record, Zone};

use super::http::{record_path, records_path, zones_path};
use super::{HosttechProvider, HosttechRecord, HosttechZone};

impl HosttechProvider {
    /// Encode `record`, send it with `method` to `path` and decode the echoed record.
    ///
    /// Unsupported types fail here, before anything goes over the wire.
    async fn write_record(
        &self,
        method: Method,
        path: &str,
        zone: &str,
        record: &Record,
    ) -> Result<Record> {
        let body = HosttechRecord::from_canonical(record)?.to_body()?;
        let data = self.send_record(method, path, &body).await?;
        Ok(HosttechRecord::decode(&data)?.to_canonical(zone))
    }

    fn decode_records(zone: &str, data: &[Value]) -> Result<Vec<Record>> {
        data.iter()
            .map(|value| HosttechRecord::decode(value).map(|r| r.to_canonical(zone)))
            .collect()
    }
}

#[async_trait]
impl ZoneLister for HosttechProvider {
    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let zones: Vec<HosttechZone> = self.get(&zones_path()).await?;
        log::debug!("[{}] Listed {} zones", self.provider_name(), zones.len());
        Ok(zones.iter().map(HosttechZone::to_zone).collect())
    }
}

#[async_trait]
impl RecordGetter for HosttechProvider {
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>> {
        let data: Vec<Value> = self.get(&records_path(zone)).await?;
        let records = Self::decode_records(zone, &data)?;
        log::debug!(
            "[{}] Zone {zone} has {} records",
            self.provider_name(),
            records.len()
        );
        Ok(records)
    }
}

#[async_trait]
impl RecordAppender for HosttechProvider {
    async fn append_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let path = records_path(zone);
        let mut appended = Vec::with_capacity(records.len());

        for record in records {
            match self.write_record(Method::POST, &path, zone, record).await {
                Ok(created) => {
                    log::debug!("[{}] Created {created}", self.provider_name());
                    appended.push(created);
                }
                Err(e) => {
                    self.log_record_failure("create", record, &e);
                    return Err(BatchError::new(appended, e));
                }
            }
        }

        Ok(appended)
    }
}

#[async_trait]
impl RecordSetter for HosttechProvider {
    async fn set_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let mut updated = Vec::with_capacity(records.len());

        for record in records {
            let path = record_path(zone, &record.id);
            match self.write_record(Method::PUT, &path, zone, record).await {
                Ok(written) => {
                    log::debug!("[{}] Updated {written}", self.provider_name());
                    updated.push(written);
                }
                // Record unknown to the provider: create it instead.
                Err(e) if e.is_not_found() => {
                    log::info!(
                        "[{}] Record {} not found in {zone}, creating it",
                        self.provider_name(),
                        record.id
                    );
                    match self
                        .append_records(zone, std::slice::from_ref(record))
                        .await
                    {
                        Ok(created) => updated.extend(created),
                        Err(BatchError {
                            records: created,
                            error,
                        }) => {
                            updated.extend(created);
                            return Err(BatchError::new(updated, error));
                        }
                    }
                }
                Err(e) => {
                    self.log_record_failure("update", record, &e);
                    return Err(BatchError::new(updated, e));
                }
            }
        }

        Ok(updated)
    }
}

#[async_trait]
impl RecordDeleter for HosttechProvider {
    async fn delete_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let mut deleted = Vec::with_capacity(records.len());

        for record in records {
            if record.id.is_empty() {
                let e = self.invalid_parameter("id", format!("{record} has no record id"));
                self.log_record_failure("delete", record, &e);
                return Err(BatchError::new(deleted, e));
            }

            match self.delete(&record_path(zone, &record.id)).await {
                Ok(()) => {
                    log::debug!("[{}] Deleted {record}", self.provider_name());
                    deleted.push(record.clone());
                }
                Err(e) => {
                    self.log_record_failure("delete", record, &e);
                    return Err(BatchError::new(deleted, e));
                }
            }
        }

        Ok(deleted)
    }
}

impl DnsProvider for HosttechProvider {
    fn id(&self) -> &'static str {
        self.provider_name()
    }
}
