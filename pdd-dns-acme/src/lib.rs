//! # pdd-dns-acme
//!
//! ACME dns-01 challenge authenticator for zones managed through the
//! Yandex PDD DNS API.
//!
//! A certificate-issuance host proves domain ownership by asking for a
//! temporary TXT record at a derived name (`_acme-challenge.<domain>`).
//! This crate provides the narrow authenticator surface such hosts drive —
//! [`Dns01Authenticator`] with exactly `setup`, `perform`, and `cleanup` —
//! implemented on top of [`pdd_dns_client`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pdd_dns_acme::{Authenticator, Dns01Authenticator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Token from an explicit value or YANDEX_PDD_TOKEN; an empty or
//!     // missing token fails here, before any network call.
//!     let mut authenticator = Authenticator::from_token(None)?;
//!
//!     authenticator.setup().await?;
//!     authenticator
//!         .perform("example.com", "_acme-challenge.example.com", "token-digest")
//!         .await?;
//!
//!     // ... the host validates the challenge ...
//!
//!     authenticator
//!         .cleanup("example.com", "_acme-challenge.example.com")
//!         .await?;
//!     Ok(())
//! }
//! ```

mod authenticator;

pub use authenticator::{Authenticator, Dns01Authenticator, CHALLENGE_TTL};

// Re-export the client error surface so hosts depend on one crate.
pub use pdd_dns_client::{PddError, Result};
