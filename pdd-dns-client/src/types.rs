//! Request and response types for the PDD DNS API.

use serde::{Deserialize, Serialize};

/// One DNS resource record, as the vendor reports it.
///
/// Records are created by [`add_record`](crate::DnsApi::add_record) (the
/// server returns the populated record), read via
/// [`list_records`](crate::DnsApi::list_records), and deleted by identifier.
/// The identifier is assigned by the server and unique within a domain;
/// clients never generate one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Vendor-assigned record identifier.
    pub record_id: u64,
    /// Record type name as reported (`"TXT"`, `"A"`, `"SRV"`, …).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Zone the record belongs to.
    pub domain: String,
    /// Fully-qualified name, zone suffix included.
    pub fqdn: String,
    /// Record value.
    pub content: String,
    /// Priority. The vendor omits it for types where it has no meaning.
    #[serde(default)]
    pub priority: i64,
    /// Time to live in seconds, when set.
    #[serde(default)]
    pub ttl: Option<u32>,
    /// Short label below the zone, when set.
    #[serde(default)]
    pub subdomain: Option<String>,
}

/// Parameters for [`add_record`](crate::DnsApi::add_record).
///
/// Optional fields are skipped during form encoding, so unset parameters
/// never reach the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRecordRequest {
    /// Zone to create the record in.
    pub domain: String,
    /// Record type (`"TXT"`, `"A"`, `"SRV"`, …).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record value.
    pub content: String,
    /// Short label below the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    /// Time to live in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Priority; meaning depends on the record type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// Email address of the domain administrator (SOA).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_mail: Option<String>,
    /// Weight of an SRV record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    /// Service port of an SRV record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Canonical host name of the service in an SRV record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl CreateRecordRequest {
    /// A request with the required fields set and every option unset.
    pub fn new(
        domain: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            record_type: record_type.into(),
            content: content.into(),
            subdomain: None,
            ttl: None,
            priority: None,
            admin_mail: None,
            weight: None,
            port: None,
            target: None,
        }
    }
}

/// Parameters for [`edit_record`](crate::DnsApi::edit_record).
///
/// Only `domain` and `record_id` are required; any field left unset keeps
/// its server-side value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditRecordRequest {
    /// Zone the record belongs to.
    pub domain: String,
    /// Identifier of the record to edit.
    pub record_id: u64,
    /// Email address of the domain administrator (SOA).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_mail: Option<String>,
    /// New record value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// SOA expire, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<u32>,
    /// SOA negative-response caching time, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neg_cache: Option<u32>,
    /// Service port of an SRV record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Priority; meaning depends on the record type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// SOA refresh, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<u32>,
    /// SOA retry, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<u32>,
    /// Short label below the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    /// Canonical host name of the service in an SRV record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Time to live in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Weight of an SRV record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

impl EditRecordRequest {
    /// A request with the required fields set and every option unset.
    pub fn new(domain: impl Into<String>, record_id: u64) -> Self {
        Self {
            domain: domain.into(),
            record_id,
            admin_mail: None,
            content: None,
            expire: None,
            neg_cache: None,
            port: None,
            priority: None,
            refresh: None,
            retry: None,
            subdomain: None,
            target: None,
            ttl: None,
            weight: None,
        }
    }
}

// ---- Operation payloads ----

/// Payload of `add` and `edit` responses.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordResponse {
    pub record: Record,
}

/// Payload of `del` responses: the identifier echoed by the server.
#[derive(Debug, Deserialize)]
pub(crate) struct DeleteResponse {
    pub record_id: u64,
}

/// Payload of `list` responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse {
    #[serde(default)]
    pub records: Vec<Record>,
}
