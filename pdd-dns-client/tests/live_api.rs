//! Live API tests against a real PDD account.
//!
//! 运行方式:
//! ```bash
//! YANDEX_PDD_TOKEN=xxx PDD_TEST_DOMAIN=example.com \
//!     cargo test -p pdd-dns-client --test live_api -- --ignored --nocapture --test-threads=1
//! ```

use std::env;

use pdd_dns_client::{CreateRecordRequest, DnsApi, EditRecordRequest, PddClient};

/// 跳过测试的宏（当环境变量缺失时）
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

struct TestContext {
    client: PddClient,
    domain: String,
}

impl TestContext {
    fn from_env() -> Option<Self> {
        let token = env::var("YANDEX_PDD_TOKEN").ok()?;
        let domain = env::var("PDD_TEST_DOMAIN").ok()?;
        Some(Self {
            client: PddClient::new(token),
            domain,
        })
    }
}

/// 生成唯一的测试记录名称
fn unique_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

#[tokio::test]
#[ignore]
async fn live_list_records() {
    skip_if_no_credentials!("YANDEX_PDD_TOKEN", "PDD_TEST_DOMAIN");

    let ctx = TestContext::from_env().expect("test context");
    let records = ctx.client.list_records(&ctx.domain).await;
    assert!(records.is_ok(), "list_records failed: {records:?}");

    println!("✓ list_records: {} records", records.unwrap().len());
}

#[tokio::test]
#[ignore]
async fn live_add_list_delete_round_trip() {
    skip_if_no_credentials!("YANDEX_PDD_TOKEN", "PDD_TEST_DOMAIN");

    let ctx = TestContext::from_env().expect("test context");
    let name = unique_record_name();

    let mut request = CreateRecordRequest::new(&ctx.domain, "TXT", "integration-test");
    request.subdomain = Some(name.clone());
    request.ttl = Some(90);

    let record = ctx.client.add_record(&request).await.expect("add_record");
    assert_eq!(record.record_type, "TXT");
    assert!(record.fqdn.starts_with(&name), "fqdn: {}", record.fqdn);

    let records = ctx
        .client
        .list_records(&ctx.domain)
        .await
        .expect("list_records");
    assert!(
        records.iter().any(|r| r.record_id == record.record_id),
        "created record not listed"
    );

    let echoed = ctx
        .client
        .delete_record(&ctx.domain, record.record_id)
        .await
        .expect("delete_record");
    println!("✓ round trip: created and deleted record {echoed}");
}

#[tokio::test]
#[ignore]
async fn live_edit_record() {
    skip_if_no_credentials!("YANDEX_PDD_TOKEN", "PDD_TEST_DOMAIN");

    let ctx = TestContext::from_env().expect("test context");
    let name = unique_record_name();

    let mut request = CreateRecordRequest::new(&ctx.domain, "TXT", "before-edit");
    request.subdomain = Some(name);

    let record = ctx.client.add_record(&request).await.expect("add_record");

    let mut edit = EditRecordRequest::new(&ctx.domain, record.record_id);
    edit.content = Some("after-edit".to_string());

    let edited = ctx.client.edit_record(&edit).await.expect("edit_record");
    assert_eq!(edited.content, "after-edit");

    // Best-effort cleanup.
    let _ = ctx.client.delete_record(&ctx.domain, record.record_id).await;
    println!("✓ edit_record: {}", edited.record_id);
}
