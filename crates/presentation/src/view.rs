use serde::{Deserialize, Serialize};

use quickbill_core::InvoiceId;
use quickbill_invoicing::InvoiceSnapshot;

use crate::format::{format_currency, format_date};
use crate::issuer::Issuer;

/// How a view presents its fields.
///
/// A property of the render call, not of the invoice: totals are identical in
/// both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Working view for the form: item positions and placeholders for blanks.
    Editable,
    /// Frozen static text, used for export.
    Presentation,
}

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineView {
    /// 1-based position shown next to the row; only in editable mode.
    pub position: Option<usize>,
    pub description: String,
    pub quantity: String,
    pub price: String,
    pub amount: String,
}

/// Fully formatted invoice, ready for a text or document renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceView {
    pub mode: RenderMode,
    pub invoice_id: InvoiceId,
    pub version: u64,
    pub issuer: Issuer,
    pub date: String,
    pub billed_to: String,
    pub lines: Vec<LineView>,
    pub total: String,
    pub received: String,
    pub remaining: String,
}

const DESCRIPTION_PLACEHOLDER: &str = "<description>";
const CLIENT_PLACEHOLDER: &str = "<client name>";
const DATE_PLACEHOLDER: &str = "<YYYY-MM-DD>";

fn or_placeholder(value: String, mode: RenderMode, placeholder: &str) -> String {
    match mode {
        RenderMode::Editable if value.trim().is_empty() => placeholder.to_string(),
        _ => value,
    }
}

impl InvoiceView {
    pub fn build(snapshot: &InvoiceSnapshot, issuer: &Issuer, mode: RenderMode) -> Self {
        let lines = snapshot
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| LineView {
                position: (mode == RenderMode::Editable).then_some(i + 1),
                description: or_placeholder(
                    line.description.clone(),
                    mode,
                    DESCRIPTION_PLACEHOLDER,
                ),
                quantity: line.quantity.to_string(),
                price: format_currency(line.unit_price),
                amount: format_currency(line.amount),
            })
            .collect();

        Self {
            mode,
            invoice_id: snapshot.invoice_id,
            version: snapshot.version,
            issuer: issuer.clone(),
            date: or_placeholder(
                snapshot.issue_date.map(format_date).unwrap_or_default(),
                mode,
                DATE_PLACEHOLDER,
            ),
            billed_to: or_placeholder(snapshot.client_name.clone(), mode, CLIENT_PLACEHOLDER),
            lines,
            total: format_currency(snapshot.total_amount),
            received: format_currency(snapshot.received_amount),
            remaining: format_currency(snapshot.remaining_amount),
        }
    }

    pub fn is_presentation(&self) -> bool {
        self.mode == RenderMode::Presentation
    }
}
