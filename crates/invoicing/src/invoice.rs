use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use quickbill_core::{AggregateRoot, InvoiceId, LineItemId, Money};

use crate::input::{coerce_amount, coerce_date};
use crate::line_item::{ItemField, LineItem};

/// Aggregate root: Invoice (the ledger of one invoice being built).
///
/// Totals are never stored; `compute_total` and `compute_remaining` derive them
/// from the current items on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    id: InvoiceId,
    client_name: String,
    issue_date: Option<NaiveDate>,
    items: Vec<LineItem>,
    received_amount: Money,
    version: u64,
}

impl Default for Invoice {
    fn default() -> Self {
        Self::new()
    }
}

impl Invoice {
    /// Fresh form state: one blank item, no client, no date, nothing received.
    pub fn new() -> Self {
        Self::with_id(InvoiceId::new())
    }

    pub fn with_id(id: InvoiceId) -> Self {
        Self {
            id,
            client_name: String::new(),
            issue_date: None,
            items: vec![LineItem::blank()],
            received_amount: Money::ZERO,
            version: 0,
        }
    }

    /// Discard every edit and return to the creation state (same invoice id).
    pub fn reset(&mut self) {
        let version = self.version;
        *self = Self::with_id(self.id);
        self.version = version + 1;
    }

    pub fn id_typed(&self) -> InvoiceId {
        self.id
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn issue_date(&self) -> Option<NaiveDate> {
        self.issue_date
    }

    pub fn received_amount(&self) -> Money {
        self.received_amount
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Append a blank item and return its index.
    pub fn add_item(&mut self) -> usize {
        self.push_item(LineItem::blank())
    }

    /// Append a prepared item and return its index.
    pub fn push_item(&mut self, item: LineItem) -> usize {
        self.items.push(item);
        self.touch();
        self.items.len() - 1
    }

    /// Set one field of the item at `index` from raw form input.
    ///
    /// Out-of-range indices are ignored; returns whether an item was updated.
    pub fn update_item(&mut self, index: usize, field: ItemField, value: &str) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        item.apply(field, value);
        self.touch();
        true
    }

    /// Remove the item at `index`, keeping the order of the rest.
    ///
    /// Out-of-range indices are ignored. The list is allowed to become empty.
    pub fn remove_item(&mut self, index: usize) -> Option<LineItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.touch();
        Some(removed)
    }

    /// Index of the item with the given id, if it is still on the invoice.
    pub fn position_of(&self, id: LineItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id_typed() == id)
    }

    pub fn set_client_name(&mut self, name: impl Into<String>) {
        self.client_name = name.into();
        self.touch();
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.issue_date = date;
        self.touch();
    }

    /// Set the date from a raw `YYYY-MM-DD` input; anything else clears it.
    pub fn set_date_input(&mut self, raw: &str) {
        self.set_date(coerce_date(raw));
    }

    /// Negative amounts are stored as zero.
    pub fn set_received_amount(&mut self, amount: Money) {
        self.received_amount = amount.non_negative();
        self.touch();
    }

    pub fn set_received_amount_input(&mut self, raw: &str) {
        self.set_received_amount(coerce_amount(raw));
    }

    /// Σ `unit_price × quantity` over the current items.
    pub fn compute_total(&self) -> Money {
        self.items.iter().map(LineItem::amount).sum()
    }

    /// `compute_total() − received_amount`; negative when overpaid.
    pub fn compute_remaining(&self) -> Money {
        self.compute_total() - self.received_amount
    }

    /// Owned, read-only copy of the current state plus its derivations.
    pub fn snapshot(&self) -> InvoiceSnapshot {
        let lines: Vec<LineSnapshot> = self
            .items
            .iter()
            .map(|item| LineSnapshot {
                id: item.id_typed(),
                description: item.description().to_string(),
                unit_price: item.unit_price(),
                quantity: item.quantity(),
                amount: item.amount(),
            })
            .collect();

        let total_amount: Money = lines.iter().map(|l| l.amount).sum();

        InvoiceSnapshot {
            invoice_id: self.id,
            version: self.version,
            client_name: self.client_name.clone(),
            issue_date: self.issue_date,
            lines,
            received_amount: self.received_amount,
            total_amount,
            remaining_amount: total_amount - self.received_amount,
        }
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}

impl AggregateRoot for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// One line of an [`InvoiceSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSnapshot {
    pub id: LineItemId,
    pub description: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub amount: Money,
}

/// The invoice as of one version, with totals already derived.
///
/// This is what display surfaces and exporters read; it never changes after it
/// is taken, whatever happens to the invoice afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSnapshot {
    pub invoice_id: InvoiceId,
    pub version: u64,
    pub client_name: String,
    pub issue_date: Option<NaiveDate>,
    pub lines: Vec<LineSnapshot>,
    pub received_amount: Money,
    pub total_amount: Money,
    pub remaining_amount: Money,
}
