//! Invoicing domain module: the invoice ledger.
//!
//! Holds one invoice's client, issue date, line items and received payment, and
//! derives the total and remaining balance. Pure domain logic only: no IO, no
//! rendering, no persistence.

pub mod input;
pub mod invoice;
pub mod line_item;

pub use invoice::{Invoice, InvoiceSnapshot, LineSnapshot};
pub use line_item::{ItemField, LineItem};
