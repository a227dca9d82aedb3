//! PDD DNS API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::http::{execute_request, parse_response};
use crate::traits::DnsApi;
use crate::types::{
    CreateRecordRequest, DeleteResponse, EditRecordRequest, ListResponse, Record, RecordResponse,
};

/// Base URL of the PDD DNS management API.
pub(crate) const PDD_API_BASE: &str = "https://pddimp.yandex.ru/api2/admin/dns";

/// Header carrying the access token.
const TOKEN_HEADER: &str = "PddToken";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the PDD DNS management API.
///
/// The client is constructed with an already-resolved access token (see
/// [`resolve_token`](crate::resolve_token)) and sends it as the `PddToken`
/// header on every request. It never reads the environment itself, and it
/// performs no credential check of its own: an absent or rejected token
/// surfaces as the vendor's auth failure.
///
/// One operation is one HTTP exchange — there is no retry layer and no
/// shared state beyond the connection pool inside [`reqwest::Client`].
pub struct PddClient {
    http: Client,
    token: String,
    base_url: String,
}

impl PddClient {
    /// Creates a client for the production endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: build_http_client(),
            token: token.into(),
            base_url: PDD_API_BASE.to_string(),
        }
    }

    /// Creates a client against a custom base URL (mock server tests).
    #[cfg(test)]
    pub(crate) fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: build_http_client(),
            token: token.into(),
            base_url: base_url.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    /// POSTs a form-encoded body to an API method and validates the
    /// response.
    async fn post_form<T, B>(&self, method: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self
            .http
            .post(self.method_url(method))
            .header(TOKEN_HEADER, &self.token)
            .form(body);
        let (status, text) = execute_request(request, method).await?;
        parse_response(status, &text)
    }

    /// GETs an API method with query parameters and validates the response.
    ///
    /// Parameters are appended with [`reqwest::RequestBuilder::query`],
    /// which merges into any query string already on the URL.
    async fn get_query<T, Q>(&self, method: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self
            .http
            .get(self.method_url(method))
            .header(TOKEN_HEADER, &self.token)
            .query(query);
        let (status, text) = execute_request(request, method).await?;
        parse_response(status, &text)
    }
}

/// 创建带超时配置的 HTTP Client
fn build_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

#[async_trait]
impl DnsApi for PddClient {
    async fn add_record(&self, request: &CreateRecordRequest) -> Result<Record> {
        let response: RecordResponse = self.post_form("add", request).await?;
        Ok(response.record)
    }

    async fn delete_record(&self, domain: &str, record_id: u64) -> Result<u64> {
        #[derive(Serialize)]
        struct DeleteBody<'a> {
            domain: &'a str,
            record_id: u64,
        }

        let body = DeleteBody { domain, record_id };
        let response: DeleteResponse = self.post_form("del", &body).await?;
        Ok(response.record_id)
    }

    async fn edit_record(&self, request: &EditRecordRequest) -> Result<Record> {
        let response: RecordResponse = self.post_form("edit", request).await?;
        Ok(response.record)
    }

    async fn list_records(&self, domain: &str) -> Result<Vec<Record>> {
        let response: ListResponse = self.get_query("list", &[("domain", domain)]).await?;
        Ok(response.records)
    }
}
