//! Subcommand implementations and output rendering.

use pdd_dns_client::{CreateRecordRequest, DnsApi, Record, Result};

/// `add`: creates the record and reports the server-assigned fields.
pub async fn add(api: &impl DnsApi, request: CreateRecordRequest) -> Result<()> {
    let record = api.add_record(&request).await?;
    print!("{}", add_report(&record));
    Ok(())
}

/// `rm`: deletes the record. Silent on success.
pub async fn rm(api: &impl DnsApi, domain: &str, record_id: u64) -> Result<()> {
    api.delete_record(domain, record_id).await?;
    Ok(())
}

/// `ls`: lists the zone as an aligned table.
pub async fn ls(api: &impl DnsApi, domain: &str) -> Result<()> {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let records = api.list_records(domain).await?;

    if records.is_empty() {
        println!("no dns records for {domain}");
        return Ok(());
    }

    print!("{}", listing_table(domain, &records));
    Ok(())
}

/// Per-field report printed after a successful `add`.
fn add_report(record: &Record) -> String {
    let fields = [
        ("record id", record.record_id.to_string()),
        ("type", record.record_type.clone()),
        ("fqdn", record.fqdn.clone()),
        ("content", record.content.clone()),
    ];

    let mut out = String::new();
    for (name, value) in fields {
        out.push_str(&format!("{name:>10}: {value}\n"));
    }
    out
}

/// Aligned listing: RECORD ID, TYPE, TTL, DOMAIN (short label), CONTENT.
fn listing_table(domain: &str, records: &[Record]) -> String {
    let mut out = format!(
        "{:>12} {:>10} {:<6} {:>24} {:<28}\n",
        "RECORD ID", "TYPE", "TTL", "DOMAIN", "CONTENT"
    );

    for record in records {
        let ttl = record.ttl.map(|t| t.to_string()).unwrap_or_default();
        out.push_str(&format!(
            "{:>12} {:>10} {:<6} {:>24} {:<28}\n",
            record.record_id,
            record.record_type,
            ttl,
            short_label(&record.fqdn, domain),
            record.content,
        ));
    }
    out
}

/// Display label of `fqdn` inside `domain`: the zone suffix and its
/// separator stripped, `@` for the apex record.
fn short_label(fqdn: &str, domain: &str) -> String {
    match fqdn.strip_suffix(domain) {
        Some("") => "@".to_string(),
        Some(label) => label.strip_suffix('.').unwrap_or(label).to_string(),
        None => fqdn.to_string(),
    }
}
