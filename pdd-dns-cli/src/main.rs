//! `pdd-dns` entry point.
//!
//! Resolves the access token (flag over `YANDEX_PDD_TOKEN`), builds the
//! client, and dispatches the subcommand. Any failure is logged and turns
//! into a nonzero exit; clap itself reports usage errors (missing or
//! unknown subcommand) on exit code 2.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pdd_dns_client::{resolve_token, CreateRecordRequest, PddClient};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    // Tables go to stdout; keep diagnostics on stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    let token = match resolve_token(cli.token) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let client = PddClient::new(token);

    let result = match cli.command {
        Command::Add {
            domain,
            record_type,
            content,
            subdomain,
            ttl,
            priority,
            admin_mail,
            weight,
            port,
            target,
        } => {
            let mut request = CreateRecordRequest::new(domain, record_type, content);
            request.subdomain = subdomain;
            request.ttl = ttl;
            request.priority = priority;
            request.admin_mail = admin_mail;
            request.weight = weight;
            request.port = port;
            request.target = target;
            commands::add(&client, request).await
        }
        Command::Rm { domain, record_id } => commands::rm(&client, &domain, record_id).await,
        Command::Ls { domain } => commands::ls(&client, &domain).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
