//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use quickbill_observability::LogFormat;
use quickbill_presentation::Issuer;

use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "quickbill", version, about = "Build an invoice, preview it, export it as a PDF")]
pub struct Cli {
    /// Name of the issuing business (overrides QUICKBILL_ISSUER_NAME).
    #[arg(long, global = true)]
    pub issuer: Option<String>,

    /// Issuer address, lines separated by '|' (overrides QUICKBILL_ISSUER_ADDRESS).
    #[arg(long, global = true)]
    pub issuer_address: Option<String>,

    /// Log output format: json or pretty (overrides QUICKBILL_LOG_FORMAT).
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive form session (default).
    Session,
    /// Print the invoice preview for the given fields.
    Preview {
        #[command(flatten)]
        invoice: InvoiceArgs,
        /// Print the invoice snapshot as JSON instead of the text preview.
        #[arg(long)]
        json: bool,
    },
    /// Export the invoice for the given fields as a PDF.
    Export {
        #[command(flatten)]
        invoice: InvoiceArgs,
        /// Output file (defaults to QUICKBILL_OUTPUT or invoice.pdf).
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

/// Invoice fields for the one-shot commands.
#[derive(Debug, Clone, Default, Args)]
pub struct InvoiceArgs {
    #[arg(long, default_value = "")]
    pub client: String,

    /// Issue date, YYYY-MM-DD.
    #[arg(long, default_value = "")]
    pub date: String,

    /// Amount already received.
    #[arg(long, default_value = "0")]
    pub received: String,

    /// Line item as "description:price:quantity" (repeatable).
    #[arg(long = "item", value_name = "DESC:PRICE:QTY")]
    pub items: Vec<String>,
}

impl Cli {
    /// Fold command-line overrides into the environment configuration.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(name) = &self.issuer {
            let address_lines = std::mem::take(&mut config.issuer.address_lines);
            config.issuer = Issuer::new(name.as_str());
            config.issuer.address_lines = address_lines;
        }
        if let Some(address) = &self.issuer_address {
            config.issuer.address_lines.clear();
            config.issuer = config.issuer.clone().with_address(address);
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_export_with_repeated_items() {
        let cli = Cli::try_parse_from([
            "quickbill",
            "export",
            "--client",
            "Hamza",
            "--item",
            "Shirt:20:2",
            "--item",
            "Trousers:35.50:1",
            "--received",
            "50",
            "-o",
            "hamza.pdf",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Export { invoice, out }) => {
                assert_eq!(invoice.client, "Hamza");
                assert_eq!(invoice.items.len(), 2);
                assert_eq!(invoice.received, "50");
                assert_eq!(out, Some(PathBuf::from("hamza.pdf")));
            }
            other => panic!("expected export command, got {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_means_session() {
        let cli = Cli::try_parse_from(["quickbill"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn flags_override_configuration() {
        let cli = Cli::try_parse_from([
            "quickbill",
            "--issuer",
            "Needle Works",
            "--log-format",
            "json",
            "session",
        ])
        .unwrap();
        let mut config = AppConfig::default();
        config.issuer = config.issuer.with_address("Old Street");

        cli.apply_to(&mut config);

        assert_eq!(config.issuer.name, "Needle Works");
        assert_eq!(config.issuer.address_lines, vec!["Old Street"]);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(Cli::try_parse_from(["quickbill", "--log-format", "xml"]).is_err());
    }
}
