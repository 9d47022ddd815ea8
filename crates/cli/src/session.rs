//! Interactive form session: one invoice, edited line by line.

use std::io::{BufRead, Write};
use std::path::Path;

use thiserror::Error;

use quickbill_core::DomainError;
use quickbill_export::{ExportError, PdfExporter};
use quickbill_invoicing::{Invoice, ItemField};
use quickbill_presentation::{InvoiceView, Issuer, RenderMode, format_currency, render_text};

pub const HELP: &str = "\
commands:
  add                           append a blank item
  set <#> <field> [value...]    edit item # (fields: description, price, quantity)
  remove <#>                    remove item #
  client [name...]              set the client name
  date [YYYY-MM-DD]             set or clear the issue date
  received <amount>             set the amount already received
  total                         print total and remaining balance
  show                          editable preview
  preview                       final preview, as it will be exported
  json                          invoice snapshot as JSON
  export [path]                 write the PDF
  reset                         start over with a blank invoice
  help                          this text
  quit                          leave the session";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown command '{0}'; type 'help' for the list")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("no item #{0}")]
    NoSuchItem(usize),

    #[error(transparent)]
    Field(#[from] DomainError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("failed to serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of one session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

/// Parse a 1-based item position into a ledger index.
fn parse_position(raw: &str, usage: &'static str) -> Result<usize, SessionError> {
    match raw.parse::<usize>() {
        Ok(position) if position >= 1 => Ok(position - 1),
        _ => Err(SessionError::Usage(usage)),
    }
}

/// The form surface: owns one invoice plus what it needs to render and export it.
#[derive(Debug)]
pub struct Session {
    invoice: Invoice,
    issuer: Issuer,
    exporter: PdfExporter,
}

impl Session {
    pub fn new(issuer: Issuer, exporter: PdfExporter) -> Self {
        Self {
            invoice: Invoice::new(),
            issuer,
            exporter,
        }
    }

    pub fn invoice(&self) -> &Invoice {
        &self.invoice
    }

    pub fn view(&self, mode: RenderMode) -> InvoiceView {
        InvoiceView::build(&self.invoice.snapshot(), &self.issuer, mode)
    }

    fn totals_line(&self) -> String {
        format!(
            "total {}  received {}  remaining {}",
            format_currency(self.invoice.compute_total()),
            format_currency(self.invoice.received_amount()),
            format_currency(self.invoice.compute_remaining()),
        )
    }

    /// Execute one command line.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, SessionError> {
        let (command, rest) = split_word(line.trim());
        let message = match command.to_ascii_lowercase().as_str() {
            "" => String::new(),
            "add" => {
                let index = self.invoice.add_item();
                format!("added item #{}", index + 1)
            }
            "set" => {
                const USAGE: &str = "set <#> <description|price|quantity> [value...]";
                let (position, rest) = split_word(rest);
                let index = parse_position(position, USAGE)?;
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err(SessionError::Usage(USAGE));
                }
                let field: ItemField = field.parse()?;
                if !self.invoice.update_item(index, field, value) {
                    return Err(SessionError::NoSuchItem(index + 1));
                }
                tracing::debug!(item = index + 1, field = field.as_str(), "item updated");
                self.totals_line()
            }
            "remove" | "rm" => {
                let index = parse_position(rest.trim(), "remove <#>")?;
                let removed = self
                    .invoice
                    .remove_item(index)
                    .ok_or(SessionError::NoSuchItem(index + 1))?;
                let label = if removed.description().is_empty() {
                    "blank item".to_string()
                } else {
                    format!("'{}'", removed.description())
                };
                format!("removed {label}; {}", self.totals_line())
            }
            "client" => {
                self.invoice.set_client_name(rest.trim());
                format!("client: {}", self.invoice.client_name())
            }
            "date" => {
                self.invoice.set_date_input(rest);
                match self.invoice.issue_date() {
                    Some(date) => format!("date: {}", date.format("%Y-%m-%d")),
                    None if rest.trim().is_empty() => "date cleared".to_string(),
                    None => "date cleared (expected YYYY-MM-DD)".to_string(),
                }
            }
            "received" => {
                self.invoice.set_received_amount_input(rest);
                self.totals_line()
            }
            "total" | "totals" => self.totals_line(),
            "show" => render_text(&self.view(RenderMode::Editable)),
            "preview" => render_text(&self.view(RenderMode::Presentation)),
            "json" => serde_json::to_string_pretty(&self.invoice.snapshot())?,
            "export" => {
                let path = rest.trim();
                let path = (!path.is_empty()).then(|| Path::new(path));
                let written = self
                    .exporter
                    .export_to_path(&self.view(RenderMode::Presentation), path)?;
                format!("exported to {}", written.display())
            }
            "reset" => {
                self.invoice.reset();
                "invoice reset".to_string()
            }
            "help" | "?" => HELP.to_string(),
            "quit" | "exit" | "q" => return Ok(Outcome::Quit),
            other => return Err(SessionError::UnknownCommand(other.to_string())),
        };
        Ok(Outcome::Continue(message))
    }

    /// Read commands until `quit` or end of input. Command errors are reported
    /// on `out` and never end the session.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> std::io::Result<()> {
        writeln!(out, "quickbill: type 'help' for commands")?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            match self.execute(&line) {
                Ok(Outcome::Quit) => return Ok(()),
                Ok(Outcome::Continue(message)) if message.is_empty() => {}
                Ok(Outcome::Continue(message)) => writeln!(out, "{}", message.trim_end())?,
                Err(e) => {
                    tracing::debug!(error = %e, "command rejected");
                    writeln!(out, "error: {e}")?;
                }
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }
}
