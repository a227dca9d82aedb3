use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CreateRecordRequest, EditRecordRequest, Record};

/// Operations of the PDD DNS management API.
///
/// [`PddClient`](crate::PddClient) is the production implementation.
/// Consumers that only need the operation surface — the ACME authenticator,
/// tests — should accept any implementation of this trait instead of the
/// concrete client.
#[async_trait]
pub trait DnsApi: Send + Sync {
    /// Creates a record and returns it as the server populated it.
    async fn add_record(&self, request: &CreateRecordRequest) -> Result<Record>;

    /// Deletes a record by identifier.
    ///
    /// Returns the identifier echoed by the server. The echo is not
    /// cross-checked against the request; it is a best-effort confirmation.
    async fn delete_record(&self, domain: &str, record_id: u64) -> Result<u64>;

    /// Rewrites fields of an existing record.
    async fn edit_record(&self, request: &EditRecordRequest) -> Result<Record>;

    /// Lists every record of a zone, preserving server order.
    async fn list_records(&self, domain: &str) -> Result<Vec<Record>>;
}
