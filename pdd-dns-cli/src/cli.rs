//! Command-line surface definitions.

use clap::{Parser, Subcommand};

/// Simple CLI for viewing and modification of DNS records in the Yandex
/// DNS manager (Pochta-Dlya-Domena aka PDD).
#[derive(Parser)]
#[command(name = "pdd-dns")]
#[command(version)]
#[command(about = "View and modify DNS records in the Yandex DNS manager (PDD)")]
#[command(
    long_about = "Simple CLI for viewing and modification of DNS records in the Yandex DNS \
                  manager (Pochta-Dlya-Domena aka PDD). An access token can be issued on the \
                  management page: https://pddimp.yandex.ru/api2/admin/get_token"
)]
pub struct Cli {
    /// Access token (related envvar is YANDEX_PDD_TOKEN)
    #[arg(long, global = true, env = "YANDEX_PDD_TOKEN")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a DNS record
    Add {
        /// Domain of interest
        domain: String,
        /// Record type
        #[arg(value_name = "TYPE")]
        record_type: String,
        /// Record value
        content: String,
        /// Name of subdomain
        #[arg(long)]
        subdomain: Option<String>,
        /// Record ttl
        #[arg(long)]
        ttl: Option<u32>,
        /// Record priority
        #[arg(long)]
        priority: Option<i64>,
        /// Email address of domain administrator
        #[arg(long)]
        admin_mail: Option<String>,
        /// Weight of SRV record
        #[arg(long)]
        weight: Option<i64>,
        /// Service port in SRV record
        #[arg(long)]
        port: Option<u16>,
        /// Canonical hostname of service in SRV record
        #[arg(long)]
        target: Option<String>,
    },
    /// Delete a DNS record
    Rm {
        /// Domain of interest
        domain: String,
        /// Identifier of DNS record
        record_id: u64,
    },
    /// List DNS records of a domain
    Ls {
        /// Domain of interest
        domain: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        let result = Cli::try_parse_from(["pdd-dns", "--token", "t"]);
        assert!(result.is_err());
    }

    #[test]
    fn add_parses_positionals_and_options() {
        let cli = Cli::try_parse_from([
            "pdd-dns",
            "add",
            "example.com",
            "TXT",
            "hello",
            "--subdomain=_acme-challenge",
            "--ttl=60",
        ])
        .unwrap();

        let Command::Add {
            domain,
            record_type,
            content,
            subdomain,
            ttl,
            priority,
            ..
        } = cli.command
        else {
            panic!("expected add subcommand");
        };
        assert_eq!(domain, "example.com");
        assert_eq!(record_type, "TXT");
        assert_eq!(content, "hello");
        assert_eq!(subdomain.as_deref(), Some("_acme-challenge"));
        assert_eq!(ttl, Some(60));
        assert_eq!(priority, None);
    }

    #[test]
    fn rm_requires_numeric_record_id() {
        let result = Cli::try_parse_from(["pdd-dns", "rm", "example.com", "not-a-number"]);
        assert!(result.is_err());
    }

    #[test]
    fn explicit_token_flag_is_captured() {
        let cli =
            Cli::try_parse_from(["pdd-dns", "--token", "from-flag", "ls", "example.com"]).unwrap();
        assert_eq!(cli.token.as_deref(), Some("from-flag"));
    }
}
