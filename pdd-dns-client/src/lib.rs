//! # pdd-dns-client
//!
//! Client bindings for the Yandex PDD (Pochta Dlya Domena) DNS management
//! API: add, delete, edit, and list DNS records of a zone over
//! `https://pddimp.yandex.ru/api2/admin/dns/{method}`, authenticated with a
//! `PddToken` header.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS
//!   implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pdd_dns_client::{resolve_token, CreateRecordRequest, DnsApi, PddClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Resolve the access token (explicit value beats YANDEX_PDD_TOKEN)
//!     let token = resolve_token(None)?;
//!     let client = PddClient::new(token);
//!
//!     // 2. Create a record
//!     let mut request = CreateRecordRequest::new("example.com", "TXT", "hello");
//!     request.subdomain = Some("greeting".to_string());
//!     let record = client.add_record(&request).await?;
//!     println!("created record {}", record.record_id);
//!
//!     // 3. List the zone
//!     for record in client.list_records("example.com").await? {
//!         println!("{} {} -> {}", record.record_id, record.fqdn, record.content);
//!     }
//!
//!     // 4. Delete it again
//!     client.delete_record("example.com", record.record_id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, PddError>`](PddError):
//!
//! - [`PddError::Transport`] — send failure, timeout, or non-200 status
//! - [`PddError::Parse`] — body is not JSON or the payload shape is wrong
//! - [`PddError::Api`] — the vendor envelope reported a failure
//! - [`PddError::Configuration`] — no credential resolvable at setup
//!
//! No failure is retried; each operation is a single atomic HTTP exchange.

mod client;
mod credentials;
mod error;
mod http;
mod traits;
mod types;

// Re-export error types
pub use error::{PddError, Result};

// Re-export the client and the seam it implements
pub use client::PddClient;
pub use traits::DnsApi;

// Re-export request/response types
pub use types::{CreateRecordRequest, EditRecordRequest, Record};

// Re-export credential resolution
pub use credentials::{resolve_token, TOKEN_ENV_VAR};
