//! `quickbill` entry point.

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use quickbill_cli::args::{Cli, Command};
use quickbill_cli::oneshot::build_invoice;
use quickbill_cli::{AppConfig, Session};
use quickbill_export::{ExportOptions, PdfExporter};
use quickbill_presentation::{InvoiceView, RenderMode, render_text};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    cli.apply_to(&mut config);

    quickbill_observability::init(config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let exporter = PdfExporter::new(ExportOptions {
        output: config.output.clone(),
        ..ExportOptions::default()
    });

    match cli.command.unwrap_or(Command::Session) {
        Command::Session => {
            tracing::info!(issuer = %config.issuer.name, "starting form session");
            let stdin = io::stdin();
            let mut session = Session::new(config.issuer, exporter);
            session
                .run(stdin.lock(), io::stdout().lock())
                .context("form session failed")?;
        }
        Command::Preview { invoice, json } => {
            let invoice = build_invoice(&invoice);
            let mut stdout = io::stdout().lock();
            if json {
                serde_json::to_writer_pretty(&mut stdout, &invoice.snapshot())
                    .context("failed to serialize invoice snapshot")?;
                writeln!(stdout)?;
            } else {
                let view =
                    InvoiceView::build(&invoice.snapshot(), &config.issuer, RenderMode::Presentation);
                write!(stdout, "{}", render_text(&view))?;
            }
        }
        Command::Export { invoice, out } => {
            let invoice = build_invoice(&invoice);
            let view =
                InvoiceView::build(&invoice.snapshot(), &config.issuer, RenderMode::Presentation);
            let written = exporter
                .export_to_path(&view, out.as_deref())
                .context("invoice export failed")?;
            println!("{}", written.display());
        }
    }

    Ok(())
}
