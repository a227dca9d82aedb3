//! dns-01 challenge provisioning over the PDD API.

use std::collections::HashMap;

use async_trait::async_trait;

use pdd_dns_client::{
    resolve_token, CreateRecordRequest, DnsApi, PddClient, Record, Result,
};

/// TTL for challenge TXT records, in seconds.
pub const CHALLENGE_TTL: u32 = 60;

/// The authenticator surface a certificate-issuance host drives.
///
/// Exactly three lifecycle hooks: credential confirmation before the first
/// challenge, record provisioning, record removal. Hosts call
/// `perform`/`cleanup` in pairs per (domain, validation name).
#[async_trait]
pub trait Dns01Authenticator: Send {
    /// Confirms the authenticator is usable before any challenge starts.
    /// Never performs network I/O.
    async fn setup(&mut self) -> Result<()>;

    /// Publishes the challenge payload as a TXT record at
    /// `validation_name`.
    async fn perform(
        &mut self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> Result<()>;

    /// Removes the record provisioned for (domain, `validation_name`).
    /// A missing record — failed perform, repeated cleanup — is a no-op.
    async fn cleanup(&mut self, domain: &str, validation_name: &str) -> Result<()>;
}

/// dns-01 authenticator for zones managed through PDD.
///
/// Provisioned records are indexed by (domain, validation name) in plain
/// process-local state: the index is filled by [`perform`], consumed by
/// [`cleanup`], and dies with the instance. Records left behind by a crash
/// have to be removed manually, which matches the host tools' expectation.
/// `perform`/`cleanup` pairs are expected to run sequentially per instance;
/// hosts that interleave challenges must serialize access themselves.
///
/// [`perform`]: Dns01Authenticator::perform
/// [`cleanup`]: Dns01Authenticator::cleanup
pub struct Authenticator<A: DnsApi = PddClient> {
    api: A,
    records: HashMap<(String, String), Record>,
}

impl Authenticator<PddClient> {
    /// Builds an authenticator from an explicit token or
    /// `YANDEX_PDD_TOKEN`.
    ///
    /// A token that resolves to nothing, or to an empty string, is a
    /// [`PddError::Configuration`](pdd_dns_client::PddError::Configuration)
    /// — raised here, before any network call.
    pub fn from_token(token: Option<String>) -> Result<Self> {
        let token = resolve_token(token)?;
        Ok(Self::with_api(PddClient::new(token)))
    }
}

impl<A: DnsApi> Authenticator<A> {
    /// Wraps an existing API handle.
    pub fn with_api(api: A) -> Self {
        Self {
            api,
            records: HashMap::new(),
        }
    }

    /// Short label of `validation_name` below `domain`.
    ///
    /// `_acme-challenge.example.com` under `example.com` becomes
    /// `_acme-challenge`; a validation name equal to the zone maps to the
    /// apex (empty label).
    fn challenge_label(validation_name: &str, domain: &str) -> String {
        let label = validation_name
            .strip_suffix(domain)
            .unwrap_or(validation_name);
        label.strip_suffix('.').unwrap_or(label).to_string()
    }
}

#[async_trait]
impl<A: DnsApi> Dns01Authenticator for Authenticator<A> {
    async fn setup(&mut self) -> Result<()> {
        // Credentials were resolved at construction; nothing to probe
        // without a network call.
        Ok(())
    }

    async fn perform(
        &mut self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> Result<()> {
        log::debug!("perform dns-01 probe for domain {domain} for record {validation_name}");

        let mut request = CreateRecordRequest::new(domain, "TXT", validation);
        request.ttl = Some(CHALLENGE_TTL);
        request.subdomain = Some(Self::challenge_label(validation_name, domain));

        let record = self.api.add_record(&request).await?;
        self.records
            .insert((domain.to_string(), validation_name.to_string()), record);
        Ok(())
    }

    async fn cleanup(&mut self, domain: &str, validation_name: &str) -> Result<()> {
        log::debug!("cleanup for domain {domain} for subdomain {validation_name}");

        let key = (domain.to_string(), validation_name.to_string());
        if let Some(record) = self.records.remove(&key) {
            self.api.delete_record(domain, record.record_id).await?;
        }
        Ok(())
    }
}
